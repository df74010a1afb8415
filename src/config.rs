use std::env;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub aspect_ratio: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model: None,
            base_url: None,
            aspect_ratio: None,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok();
        let model = env::var("GEMINI_MODEL").ok();
        let base_url = env::var("GEMINI_BASE_URL").ok();

        GeminiConfig {
            api_key,
            model,
            base_url,
            aspect_ratio: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Points the client at a different host, used by tests to inject a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(aspect_ratio.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub batch_size: Option<usize>,
    pub output_dir: Option<String>,
    pub gemini: Option<GeminiConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            batch_size: None,
            output_dir: None,
            gemini: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let batch_size = env::var("LOGO_BATCH_SIZE")
            .ok()
            .and_then(|s| s.parse().ok());
        let output_dir = env::var("LOGO_OUTPUT_DIR").ok();

        Config {
            batch_size,
            output_dir,
            gemini: None,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    pub fn with_gemini(mut self, config: GeminiConfig) -> Self {
        self.gemini = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_config_builder() {
        let config = GeminiConfig::new()
            .with_api_key("secret")
            .with_model("gemini-2.5-flash-image")
            .with_base_url("http://localhost:1234")
            .with_aspect_ratio("1:1");

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model.as_deref(), Some("gemini-2.5-flash-image"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:1234"));
        assert_eq!(config.aspect_ratio.as_deref(), Some("1:1"));
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_batch_size(3)
            .with_output_dir("out")
            .with_gemini(GeminiConfig::new().with_api_key("secret"));

        assert_eq!(config.batch_size, Some(3));
        assert_eq!(config.output_dir.as_deref(), Some("out"));
        assert!(config.gemini.is_some());
    }

    #[test]
    fn test_config_defaults_empty() {
        let config = Config::new();
        assert!(config.batch_size.is_none());
        assert!(config.output_dir.is_none());
        assert!(config.gemini.is_none());
    }
}
