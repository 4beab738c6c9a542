use crate::{
    error::Result,
    models::text::{TextGenerationRequest, TextGenerationResponse},
};
use async_trait::async_trait;

/// Seam between the outline orchestrator and the hosted inference endpoint.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Issue one generation request and wait for the full response.
    async fn generate(&self, request: TextGenerationRequest) -> Result<TextGenerationResponse>;

    /// Cheap availability check for a single model.
    async fn probe(&self, model_id: &str) -> Result<()>;
}
