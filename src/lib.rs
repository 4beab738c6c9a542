pub mod config;
pub mod error;
pub mod inference;
pub mod logger;
pub mod models;
pub mod outline;

pub use config::{Config, GenerationConfig, HfConfig};
pub use error::{OutlineError, Result};
pub use inference::{default_model_candidates, HfInferenceClient, TextGeneration};
pub use models::{
    ArticleType, GeneratedOutline, ModelInfo, Outline, OutlineRequest, OutlineSection,
};
pub use outline::OutlineGenerator;
