use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct TextGenerationRequest {
    pub prompt: String,
    pub max_new_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub model_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextGenerationResponse {
    pub text: String,
    pub model: String,
}

/// Request body of the hosted text-generation endpoint.
#[derive(Debug, Serialize)]
pub struct HfGenerationPayload {
    pub inputs: String,
    pub parameters: HfGenerationParameters,
    pub options: HfGenerationOptions,
}

#[derive(Debug, Serialize)]
pub struct HfGenerationParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    pub return_full_text: bool,
}

#[derive(Debug, Serialize)]
pub struct HfGenerationOptions {
    pub wait_for_model: bool,
}

/// One element of the endpoint's response array.
#[derive(Debug, Serialize, Deserialize)]
pub struct HfGeneratedText {
    pub generated_text: String,
}

/// Error body the endpoint returns alongside non-2xx statuses.
#[derive(Debug, Serialize, Deserialize)]
pub struct HfErrorBody {
    pub error: String,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}
