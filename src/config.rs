use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.2-3B-Instruct";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct HfConfig {
    pub api_token: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for HfConfig {
    fn default() -> Self {
        HfConfig {
            api_token: None,
            base_url: None,
            model: None,
            timeout_secs: None,
        }
    }
}

impl HfConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_token = env::var("HF_TOKEN").ok();
        let base_url = env::var("HF_BASE_URL").ok();
        let model = env::var("HF_MODEL").ok();
        let timeout_secs = env::var("HF_TIMEOUT_SECS").ok().and_then(|s| s.parse().ok());

        HfConfig {
            api_token,
            base_url,
            model,
            timeout_secs,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub max_new_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub wait_for_model: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            max_new_tokens: None,
            temperature: None,
            wait_for_model: true,
        }
    }
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let max_new_tokens = env::var("OUTLINE_MAX_NEW_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok());
        let temperature = env::var("OUTLINE_TEMPERATURE")
            .ok()
            .and_then(|s| s.parse().ok());

        GenerationConfig {
            max_new_tokens,
            temperature,
            wait_for_model: true,
        }
    }

    pub fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = Some(max_new_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_wait_for_model(mut self, wait: bool) -> Self {
        self.wait_for_model = wait;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub huggingface: Option<HfConfig>,
    pub generation: Option<GenerationConfig>,
    pub fallback_to_template: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            huggingface: None,
            generation: None,
            fallback_to_template: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let fallback_to_template = env::var("OUTLINE_TEMPLATE_FALLBACK")
            .ok()
            .map_or(false, |val| val == "true");

        Config {
            huggingface: Some(HfConfig::from_env()),
            generation: Some(GenerationConfig::from_env()),
            fallback_to_template,
        }
    }

    pub fn with_huggingface(mut self, config: HfConfig) -> Self {
        self.huggingface = Some(config);
        self
    }

    pub fn with_generation(mut self, config: GenerationConfig) -> Self {
        self.generation = Some(config);
        self
    }

    pub fn with_template_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_template = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hf_config_builders() {
        let config = HfConfig::new()
            .with_token("hf_test")
            .with_model("google/flan-t5-large")
            .with_timeout(5);

        assert_eq!(config.api_token.as_deref(), Some("hf_test"));
        assert_eq!(config.model(), "google/flan-t5-large");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_hf_config_defaults() {
        let config = HfConfig::new();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_config_aggregate() {
        let config = Config::new()
            .with_huggingface(HfConfig::new().with_token("hf_test"))
            .with_generation(GenerationConfig::new().with_temperature(0.2))
            .with_template_fallback(true);

        assert!(config.huggingface.is_some());
        assert!(config.fallback_to_template);
        assert_eq!(
            config.generation.as_ref().and_then(|g| g.temperature),
            Some(0.2)
        );
    }
}
