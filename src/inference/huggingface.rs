use crate::{
    config::HfConfig,
    error::{OutlineError, Result},
    inference::traits::TextGeneration,
    models::common::ModelInfo,
    models::text::{
        HfErrorBody, HfGeneratedText, HfGenerationOptions, HfGenerationParameters,
        HfGenerationPayload, TextGenerationRequest, TextGenerationResponse,
    },
};
use async_trait::async_trait;
use reqwest::Client;

const PROBE_PROMPT: &str = "Hello";
const PROBE_MAX_NEW_TOKENS: u32 = 5;

/// Client for the hosted HuggingFace Inference API.
///
/// One HTTPS round trip per generation, bearer-authorized, with the timeout
/// bounded by [`HfConfig::with_timeout`]. Dropping an in-flight future
/// cancels the request; no state is shared across invocations.
#[derive(Clone)]
pub struct HfInferenceClient {
    client: Client,
    base_url: String,
    token: String,
    default_model: String,
}

impl HfInferenceClient {
    pub fn new(config: HfConfig) -> Result<Self> {
        let token = config
            .api_token
            .clone()
            .ok_or_else(|| OutlineError::Config("HuggingFace API token is required".into()))?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| OutlineError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            token,
            default_model: config.model().to_string(),
        })
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Known-good models for outline generation. The Llama entry is gated
    /// and requires accepting its terms on the hub first.
    pub fn supported_models() -> Vec<ModelInfo> {
        vec![
            ModelInfo {
                id: "meta-llama/Llama-3.2-3B-Instruct".into(),
                name: "Llama 3.2 3B Instruct".into(),
                provider: "Meta".into(),
                max_tokens: 4096,
                description: "Primary model, best outline quality".into(),
            },
            ModelInfo {
                id: "google/flan-t5-large".into(),
                name: "FLAN-T5 Large".into(),
                provider: "Google".into(),
                max_tokens: 1024,
                description: "Free-tier fallback".into(),
            },
            ModelInfo {
                id: "google/flan-t5-base".into(),
                name: "FLAN-T5 Base".into(),
                provider: "Google".into(),
                max_tokens: 1024,
                description: "Free-tier fallback".into(),
            },
        ]
    }

    fn model_url(&self, model_id: &str) -> String {
        format!("{}/models/{}", self.base_url, model_id)
    }

    fn build_headers(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Ok(value) = format!("Bearer {}", self.token).parse() {
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }
        if let Ok(value) = "application/json".parse() {
            headers.insert(reqwest::header::CONTENT_TYPE, value);
        }
        headers
    }

    fn build_payload(request: &TextGenerationRequest) -> HfGenerationPayload {
        HfGenerationPayload {
            inputs: request.prompt.clone(),
            parameters: HfGenerationParameters {
                max_new_tokens: request.max_new_tokens,
                temperature: request.temperature,
                return_full_text: false,
            },
            options: HfGenerationOptions {
                wait_for_model: true,
            },
        }
    }

    fn map_send_error(e: reqwest::Error) -> OutlineError {
        if e.is_timeout() {
            OutlineError::Network(format!("request timed out: {}", e))
        } else if e.is_connect() {
            OutlineError::Network(format!("connection failed: {}", e))
        } else {
            OutlineError::Network(format!("request failed: {}", e))
        }
    }

    /// Pull a human-readable message out of an error body, falling back to
    /// the raw text.
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<HfErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) => body.trim().to_string(),
        }
    }

    /// Decode a 2xx body into generated text.
    ///
    /// The endpoint answers with `[{"generated_text": ...}]`; some deployments
    /// return a bare object, and simulated endpoints may return plain text,
    /// which is used verbatim. An empty body is a parse failure.
    fn decode_generated(body: &str) -> Result<String> {
        if body.trim().is_empty() {
            return Err(OutlineError::Parse("empty response body".into()));
        }

        if let Ok(items) = serde_json::from_str::<Vec<HfGeneratedText>>(body) {
            return items
                .into_iter()
                .next()
                .map(|item| item.generated_text)
                .ok_or_else(|| OutlineError::Parse("response array was empty".into()));
        }

        if let Ok(item) = serde_json::from_str::<HfGeneratedText>(body) {
            return Ok(item.generated_text);
        }

        if let Ok(err) = serde_json::from_str::<HfErrorBody>(body) {
            return Err(OutlineError::Parse(format!(
                "endpoint reported an error: {}",
                err.error
            )));
        }

        Ok(body.to_string())
    }

    /// Probe the candidates in order and return the first usable model.
    ///
    /// 401 means the token itself is bad and aborts the scan; a gated model
    /// (403) or a missing one (404) moves on to the next candidate, as do
    /// transient failures.
    pub async fn resolve_model(&self, candidates: &[String]) -> Result<String> {
        for model_id in candidates {
            log::info!("🔍 Probing model: {}", model_id);

            match self.probe(model_id).await {
                Ok(()) => {
                    log::info!("✅ Connected to: {}", model_id);
                    return Ok(model_id.clone());
                }
                Err(OutlineError::Auth { status: 401, message }) => {
                    log::error!("🔑 Token rejected while probing {}: {}", model_id, message);
                    return Err(OutlineError::Auth {
                        status: 401,
                        message,
                    });
                }
                Err(OutlineError::Auth { status: 403, .. }) => {
                    log::warn!(
                        "⚠️  {} is gated; accept its terms on the hub and retry",
                        model_id
                    );
                }
                Err(OutlineError::Upstream { status: 404, .. }) => {
                    log::warn!("❌ {} is not available", model_id);
                }
                Err(e) => {
                    log::warn!("⚠️  {} probe failed: {}", model_id, e);
                }
            }
        }

        Err(OutlineError::Upstream {
            status: 503,
            message: "no candidate model is currently available".into(),
        })
    }
}

#[async_trait]
impl TextGeneration for HfInferenceClient {
    async fn generate(&self, request: TextGenerationRequest) -> Result<TextGenerationResponse> {
        let model_id = request
            .model_id
            .clone()
            .unwrap_or_else(|| self.default_model.clone());

        let payload = Self::build_payload(&request);
        let payload_json = serde_json::to_string(&payload)
            .map_err(|e| OutlineError::Serialization(e.to_string()))?;

        log::info!("Invoking model: {}", model_id);
        log::debug!("Generation request payload: {}", payload_json);

        let response = self
            .client
            .post(self.model_url(&model_id))
            .headers(self.build_headers())
            .body(payload_json)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OutlineError::Network(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(OutlineError::from_status(
                status.as_u16(),
                Self::error_message(&body),
            ));
        }

        let text = Self::decode_generated(&body)?;

        Ok(TextGenerationResponse {
            text,
            model: model_id,
        })
    }

    async fn probe(&self, model_id: &str) -> Result<()> {
        let request = TextGenerationRequest {
            prompt: PROBE_PROMPT.to_string(),
            max_new_tokens: Some(PROBE_MAX_NEW_TOKENS),
            temperature: None,
            model_id: Some(model_id.to_string()),
        };

        self.generate(request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_payload() {
        let request = TextGenerationRequest {
            prompt: "outline this".into(),
            max_new_tokens: Some(1500),
            temperature: Some(0.7),
            model_id: None,
        };

        let payload = HfInferenceClient::build_payload(&request);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["inputs"], "outline this");
        assert_eq!(json["parameters"]["max_new_tokens"], 1500);
        assert_eq!(json["parameters"]["return_full_text"], false);
        assert_eq!(json["options"]["wait_for_model"], true);
    }

    #[test]
    fn test_payload_omits_unset_parameters() {
        let request = TextGenerationRequest {
            prompt: "p".into(),
            max_new_tokens: None,
            temperature: None,
            model_id: None,
        };

        let json = serde_json::to_value(HfInferenceClient::build_payload(&request)).unwrap();
        assert!(json["parameters"].get("max_new_tokens").is_none());
        assert!(json["parameters"].get("temperature").is_none());
    }

    #[test]
    fn test_decode_generated_array() {
        let body = r#"[{"generated_text": "1. Intro"}]"#;
        assert_eq!(
            HfInferenceClient::decode_generated(body).unwrap(),
            "1. Intro"
        );
    }

    #[test]
    fn test_decode_generated_object() {
        let body = r#"{"generated_text": "outline text"}"#;
        assert_eq!(
            HfInferenceClient::decode_generated(body).unwrap(),
            "outline text"
        );
    }

    #[test]
    fn test_decode_plain_text_passthrough() {
        let body = "1. Intro\n2. Body\n3. Conclusion";
        assert_eq!(HfInferenceClient::decode_generated(body).unwrap(), body);
    }

    #[test]
    fn test_decode_empty_body_is_parse_error() {
        assert!(matches!(
            HfInferenceClient::decode_generated(""),
            Err(OutlineError::Parse(_))
        ));
        assert!(matches!(
            HfInferenceClient::decode_generated("   \n"),
            Err(OutlineError::Parse(_))
        ));
    }

    #[test]
    fn test_decode_empty_array_is_parse_error() {
        assert!(matches!(
            HfInferenceClient::decode_generated("[]"),
            Err(OutlineError::Parse(_))
        ));
    }

    #[test]
    fn test_decode_error_body() {
        let body = r#"{"error": "Model is currently loading", "estimated_time": 20.0}"#;
        let err = HfInferenceClient::decode_generated(body).unwrap_err();
        assert!(matches!(err, OutlineError::Parse(_)));
        assert!(err.to_string().contains("currently loading"));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            HfInferenceClient::error_message(r#"{"error": "Rate limit reached"}"#),
            "Rate limit reached"
        );
        assert_eq!(
            HfInferenceClient::error_message("Service Unavailable\n"),
            "Service Unavailable"
        );
    }

    #[test]
    fn test_client_requires_token() {
        let result = HfInferenceClient::new(HfConfig::new());
        assert!(matches!(result, Err(OutlineError::Config(_))));
    }

    #[test]
    fn test_model_url() {
        let client =
            HfInferenceClient::new(HfConfig::new().with_token("hf_test").with_base_url(
                "https://api-inference.huggingface.co/",
            ))
            .unwrap();
        assert_eq!(
            client.model_url("google/flan-t5-base"),
            "https://api-inference.huggingface.co/models/google/flan-t5-base"
        );
    }

    #[test]
    fn test_supported_models_catalog() {
        let models = HfInferenceClient::supported_models();
        assert_eq!(models.len(), 3);
        assert_eq!(models[0].provider, "Meta");
    }
}
