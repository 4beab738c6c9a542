use crate::error::{OutlineError, Result};
use crate::models::common::ArticleType;
use serde::{Deserialize, Serialize};

/// Minimum sections a usable outline carries.
pub const MIN_SECTIONS: usize = 3;
/// Minimum bullets per section.
pub const MIN_BULLETS: usize = 2;

/// Structured article outline as returned by the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Outline {
    pub h1: String,
    pub sections: Vec<OutlineSection>,
    #[serde(default)]
    pub ctas: Vec<CallToAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutlineSection {
    pub h2: String,
    pub bullets: Vec<String>,
}

/// Call-to-action placed after the section with the given index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CallToAction {
    pub after: usize,
    pub text: String,
}

impl Outline {
    /// Check the outline shape: a heading, at least [`MIN_SECTIONS`]
    /// sections, each with a heading and at least [`MIN_BULLETS`] bullets.
    pub fn validate(&self) -> Result<()> {
        if self.h1.trim().is_empty() {
            return Err(OutlineError::Parse("outline is missing an h1".into()));
        }

        if self.sections.len() < MIN_SECTIONS {
            return Err(OutlineError::Parse(format!(
                "outline has {} sections, expected at least {}",
                self.sections.len(),
                MIN_SECTIONS
            )));
        }

        for (idx, section) in self.sections.iter().enumerate() {
            if section.h2.trim().is_empty() {
                return Err(OutlineError::Parse(format!(
                    "section {} is missing an h2",
                    idx
                )));
            }
            if section.bullets.len() < MIN_BULLETS {
                return Err(OutlineError::Parse(format!(
                    "section '{}' has {} bullets, expected at least {}",
                    section.h2,
                    section.bullets.len(),
                    MIN_BULLETS
                )));
            }
        }

        Ok(())
    }

    /// Call-to-action registered after the given section index, if any.
    pub fn cta_after(&self, index: usize) -> Option<&CallToAction> {
        self.ctas.iter().find(|cta| cta.after == index)
    }
}

/// One outline generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct OutlineRequest {
    pub topic: String,
    pub keyword: Option<String>,
    pub model_id: Option<String>,
    pub max_new_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl OutlineRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            keyword: None,
            model_id: None,
            max_new_tokens: None,
            temperature: None,
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = Some(max_new_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Successful generation result.
///
/// `text` is always displayable. `outline` is present when the model
/// answered with the structured JSON shape; a plain-text answer passes
/// through unchanged with `outline: None`.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedOutline {
    pub text: String,
    pub outline: Option<Outline>,
    pub model: String,
    pub article_type: ArticleType,
}
