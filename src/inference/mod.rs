pub mod huggingface;
pub mod traits;

pub use huggingface::HfInferenceClient;
pub use traits::TextGeneration;

/// Candidate models for [`HfInferenceClient::resolve_model`], in preference
/// order. The Llama entry requires accepting its terms on the hub.
pub fn default_model_candidates() -> Vec<String> {
    vec![
        "meta-llama/Llama-3.2-3B-Instruct".to_string(),
        "google/flan-t5-large".to_string(),
        "google/flan-t5-base".to_string(),
    ]
}
