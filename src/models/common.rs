use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub max_tokens: usize,
    pub description: String,
}

/// Heuristic article category, steering prompt guidance and templates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArticleType {
    HowTo,
    Listicle,
    Explanatory,
    General,
}

impl ArticleType {
    /// Detect the article type from the topic text. Single-word markers
    /// match whole words only, so "topic" does not read as "top".
    pub fn detect(topic: &str) -> Self {
        let topic_lower = topic.to_lowercase();
        let words: Vec<&str> = topic_lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let has_word = |marker: &str| words.iter().any(|w| *w == marker);

        if topic_lower.contains("how to")
            || topic_lower.contains("step by step")
            || has_word("guide")
            || has_word("tutorial")
        {
            ArticleType::HowTo
        } else if has_word("best")
            || has_word("top")
            || has_word("vs")
            || has_word("versus")
            || has_word("comparison")
        {
            ArticleType::Listicle
        } else if topic_lower.contains("what is")
            || topic_lower.contains("introduction to")
            || has_word("understanding")
            || has_word("explain")
        {
            ArticleType::Explanatory
        } else {
            ArticleType::General
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArticleType::HowTo => "How-To Guide",
            ArticleType::Listicle => "Listicle",
            ArticleType::Explanatory => "Explanatory",
            ArticleType::General => "General",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_how_to() {
        assert_eq!(ArticleType::detect("how to buy a phone"), ArticleType::HowTo);
        assert_eq!(
            ArticleType::detect("Step by Step Sourdough"),
            ArticleType::HowTo
        );
        assert_eq!(
            ArticleType::detect("Beginner's guide to kayaking"),
            ArticleType::HowTo
        );
    }

    #[test]
    fn test_detect_listicle() {
        assert_eq!(
            ArticleType::detect("10 best laptops for students"),
            ArticleType::Listicle
        );
        assert_eq!(
            ArticleType::detect("Rust vs Go for backend work"),
            ArticleType::Listicle
        );
    }

    #[test]
    fn test_detect_explanatory() {
        assert_eq!(
            ArticleType::detect("What is ownership in Rust"),
            ArticleType::Explanatory
        );
        assert_eq!(
            ArticleType::detect("Understanding async runtimes"),
            ArticleType::Explanatory
        );
    }

    #[test]
    fn test_detect_general() {
        assert_eq!(
            ArticleType::detect("garden irrigation systems"),
            ArticleType::General
        );
        // "topic" must not match the "top" marker
        assert_eq!(
            ArticleType::detect("a topic without markers"),
            ArticleType::General
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(ArticleType::HowTo.label(), "How-To Guide");
        assert_eq!(ArticleType::General.label(), "General");
    }
}
