pub mod format;
pub mod parser;
pub mod prompt;
pub mod template;

use crate::{
    config::{Config, GenerationConfig},
    error::{OutlineError, Result},
    inference::{HfInferenceClient, TextGeneration},
    models::common::ArticleType,
    models::outline::{GeneratedOutline, OutlineRequest},
    models::text::TextGenerationRequest,
};
use std::sync::Arc;

const DEFAULT_MAX_NEW_TOKENS: u32 = 1500;
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Model label attached to scaffold results.
const TEMPLATE_MODEL: &str = "template";

/// Orchestrates one outline generation round trip: validate the input,
/// build the prompt, issue a single call through the inference backend,
/// and decode the response.
///
/// Stateless across invocations and cheap to clone; cancelling is dropping
/// the in-flight future.
#[derive(Clone)]
pub struct OutlineGenerator {
    backend: Arc<dyn TextGeneration>,
    credential: String,
    generation: GenerationConfig,
    fallback_to_template: bool,
}

impl OutlineGenerator {
    pub fn new(config: Config) -> Result<Self> {
        let hf_config = config
            .huggingface
            .ok_or_else(|| OutlineError::Config("HuggingFace config is required".into()))?;

        let credential = hf_config.api_token.clone().unwrap_or_default();
        let backend = HfInferenceClient::new(hf_config)?;

        Ok(Self {
            backend: Arc::new(backend),
            credential,
            generation: config.generation.unwrap_or_default(),
            fallback_to_template: config.fallback_to_template,
        })
    }

    /// Build a generator over an arbitrary backend. The credential is still
    /// validated per request even though the backend owns transport auth.
    pub fn with_backend(backend: Arc<dyn TextGeneration>, credential: impl Into<String>) -> Self {
        Self {
            backend,
            credential: credential.into(),
            generation: GenerationConfig::default(),
            fallback_to_template: false,
        }
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_template_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_template = enabled;
        self
    }

    /// Generate an outline for the requested topic.
    ///
    /// Empty credential or topic fails validation before any network I/O.
    /// One outbound call per invocation; failures are classified per
    /// [`OutlineError`] and never substituted silently unless template
    /// fallback was enabled explicitly.
    pub async fn generate(&self, request: OutlineRequest) -> Result<GeneratedOutline> {
        if self.credential.trim().is_empty() {
            return Err(OutlineError::Validation(
                "API credential must not be empty".into(),
            ));
        }

        let topic = request.topic.trim().to_string();
        if topic.is_empty() {
            return Err(OutlineError::Validation("topic must not be empty".into()));
        }

        let article_type = ArticleType::detect(&topic);
        let keyword = request.keyword.as_deref();
        log::info!(
            "Generating outline for topic '{}' ({})",
            topic,
            article_type.label()
        );

        let generation_request = TextGenerationRequest {
            prompt: prompt::build_prompt(&topic, keyword, article_type),
            max_new_tokens: request
                .max_new_tokens
                .or(self.generation.max_new_tokens)
                .or(Some(DEFAULT_MAX_NEW_TOKENS)),
            temperature: request
                .temperature
                .or(self.generation.temperature)
                .or(Some(DEFAULT_TEMPERATURE)),
            model_id: request.model_id.clone(),
        };

        let response = match self.backend.generate(generation_request).await {
            Ok(response) => response,
            Err(e) if self.fallback_to_template => {
                log::warn!("Generation failed ({}), using template scaffold", e);
                return Ok(self.scaffold(&topic, keyword));
            }
            Err(e) => {
                log::error!("Generation failed: {}", e.kind());
                return Err(e);
            }
        };

        match parser::parse_generated(&response.text) {
            Ok(parser::ParsedResponse::Structured(outline)) => {
                log::info!(
                    "Received structured outline with {} sections",
                    outline.sections.len()
                );
                Ok(GeneratedOutline {
                    text: format::render_text(&outline),
                    outline: Some(outline),
                    model: response.model,
                    article_type,
                })
            }
            Ok(parser::ParsedResponse::Plain(text)) => {
                log::info!("Received plain-text outline ({} chars)", text.len());
                Ok(GeneratedOutline {
                    text,
                    outline: None,
                    model: response.model,
                    article_type,
                })
            }
            Err(e) if self.fallback_to_template => {
                log::warn!("Response unusable ({}), using template scaffold", e);
                Ok(self.scaffold(&topic, keyword))
            }
            Err(e) => Err(e),
        }
    }

    /// Convenience wrapper returning the rendered text only.
    pub async fn generate_markdown(&self, request: OutlineRequest) -> Result<String> {
        self.generate(request).await.map(|generated| generated.text)
    }

    /// Deterministic scaffold outline for the topic, without touching the
    /// inference endpoint.
    pub fn scaffold(&self, topic: &str, keyword: Option<&str>) -> GeneratedOutline {
        let outline = template::scaffold(topic, keyword);
        GeneratedOutline {
            text: format::render_text(&outline),
            outline: Some(outline),
            model: TEMPLATE_MODEL.to_string(),
            article_type: ArticleType::detect(topic),
        }
    }
}
