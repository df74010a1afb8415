use crate::{
    config::GeminiConfig,
    error::{LogoError, Result},
    models::{
        Content, ErrorResponse, GenerateContentRequest, GenerateContentResponse,
        GenerationConfig, ImageConfig,
    },
};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_ASPECT_RATIO: &str = "1:1";

/// Thin transport wrapper around the `models.generateContent` endpoint.
/// One shared HTTP client, no retries, no state between calls.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    aspect_ratio: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config.api_key.unwrap_or_default();
        if api_key.is_empty() {
            log::warn!("No API key configured, the service will reject every request");
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| LogoError::TransportError(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            model: config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            aspect_ratio: config
                .aspect_ratio
                .unwrap_or_else(|| DEFAULT_ASPECT_RATIO.to_string()),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Text-to-image call; attaches the configured aspect ratio.
    pub async fn generate_image(&self, content: Content) -> Result<GenerateContentResponse> {
        let request = GenerateContentRequest {
            contents: vec![content],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: self.aspect_ratio.clone(),
                }),
            }),
        };
        self.generate_content(request).await
    }

    /// Mixed image+text call for edits. No image config, the service keeps
    /// the source image's dimensions.
    pub async fn edit_image(&self, content: Content) -> Result<GenerateContentResponse> {
        let request = GenerateContentRequest {
            contents: vec![content],
            generation_config: None,
        };
        self.generate_content(request).await
    }

    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        log::debug!("Invoking model: {}", self.model);

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| LogoError::TransportError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| LogoError::TransportError(e.to_string()))?;

            log::error!("Service returned {}: {}", status, body);

            return Err(match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(error_response) => LogoError::ApiError {
                    code: error_response.error.code,
                    message: error_response.error.message,
                },
                Err(_) => LogoError::ApiError {
                    code: status.as_u16(),
                    message: body,
                },
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| LogoError::SerializationError(e.to_string()))
    }
}
