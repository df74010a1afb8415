use futures::future::try_join_all;

use crate::{
    config::Config,
    error::{LogoError, Result},
    gemini::GeminiClient,
    models::{Content, GeneratedAsset, GenerationRequest, InlineData, Part},
    prompt,
};

pub const DEFAULT_BATCH_SIZE: usize = 10;

const NO_IMAGE_GENERATED: &str = "generation response contained no inline image data";
const NO_IMAGE_EDITED: &str = "edit response contained no inline image data";

/// Orchestrates logo generation against the Gemini API: a fixed-size batch
/// of concurrent generation calls, and single-shot edits of a prior asset.
#[derive(Clone)]
pub struct LogoStudio {
    client: GeminiClient,
    batch_size: usize,
}

impl LogoStudio {
    pub fn new(config: Config) -> Result<Self> {
        let client = GeminiClient::new(config.gemini.unwrap_or_default())?;

        Ok(Self {
            client,
            batch_size: config.batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
        })
    }

    /// The configured default batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Dispatches `batch_size` independent generation requests concurrently
    /// and waits for all of them. Result order matches request-construction
    /// order regardless of completion order; the first failure aborts the
    /// whole batch and no partial list is returned.
    pub async fn generate_batch(
        &self,
        company_name: &str,
        philosophy: &str,
        batch_size: usize,
    ) -> Result<Vec<GeneratedAsset>> {
        let requests: Vec<GenerationRequest> = (0..batch_size)
            .map(|index| GenerationRequest {
                company_name: company_name.to_string(),
                philosophy: philosophy.to_string(),
                variation_index: index,
            })
            .collect();

        log::info!(
            "Dispatching batch of {} generation requests to {}",
            requests.len(),
            self.client.model()
        );

        try_join_all(requests.iter().map(|request| self.generate_one(request))).await
    }

    async fn generate_one(&self, request: &GenerationRequest) -> Result<GeneratedAsset> {
        let prompt_text = prompt::build_generation_prompt(
            &request.company_name,
            &request.philosophy,
            request.variation_index,
        );

        let content = Content {
            parts: vec![Part::Text(prompt_text)],
        };

        let response = self.client.generate_image(content).await?;
        let inline = response
            .first_inline_data()
            .ok_or_else(|| LogoError::ImageDecodeError(NO_IMAGE_GENERATED.into()))?;

        Ok(GeneratedAsset::from_inline_data(
            &inline.mime_type,
            &inline.data,
            format!("{} - {}", request.company_name, request.philosophy),
        ))
    }

    /// Sends one mixed image+text call and returns a new asset with a fresh
    /// identifier. The source asset is left untouched and its origin prompt
    /// is carried over as provenance.
    pub async fn edit_asset(
        &self,
        asset: &GeneratedAsset,
        instruction: &str,
    ) -> Result<GeneratedAsset> {
        let edit = prompt::build_edit_payload(asset, instruction)?;

        let content = Content {
            parts: vec![
                Part::InlineData(InlineData {
                    mime_type: edit.mime_type,
                    data: edit.image_data,
                }),
                Part::Text(edit.instruction),
            ],
        };

        log::info!("Dispatching edit request for asset {}", asset.id);

        let response = self.client.edit_image(content).await?;
        let inline = response
            .first_inline_data()
            .ok_or_else(|| LogoError::ImageDecodeError(NO_IMAGE_EDITED.into()))?;

        Ok(GeneratedAsset::from_inline_data(
            &inline.mime_type,
            &inline.data,
            asset.origin_prompt.clone(),
        ))
    }
}
