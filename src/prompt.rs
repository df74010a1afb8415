//! Prompt and payload construction for generation and edit calls.

use chrono::Utc;

use crate::error::Result;
use crate::models::{EditRequest, GeneratedAsset};

/// Builds the text prompt for one batch member. Total over its inputs; the
/// seed token exists only to keep otherwise-identical prompts distinct and
/// must not be parsed back.
pub fn build_generation_prompt(
    company_name: &str,
    philosophy: &str,
    variation_index: usize,
) -> String {
    let seed = format!("{}-{}", variation_index, Utc::now().timestamp_millis());
    format!(
        "Create a professional, modern, and minimalist logo for a company named \"{}\". \
         The company philosophy is: \"{}\". \
         Design requirement: high-quality vector style, clean lines, suitable for branding. \
         Variation unique seed: {}. \
         Avoid complex text, focus on a symbolic icon and professional typography.",
        company_name, philosophy, seed
    )
}

/// Splits a prior asset into payload and media type and frames the user's
/// instruction for the edit call. Fails if the asset's stored representation
/// cannot be split.
pub fn build_edit_payload(asset: &GeneratedAsset, instruction: &str) -> Result<EditRequest> {
    let (mime_type, image_data) = asset.split_data_url()?;

    let instruction = format!(
        "Modify this logo according to the following request: \"{}\". \
         Keep the core brand identity recognizable while applying the requested change perfectly.",
        instruction
    );

    Ok(EditRequest {
        image_data,
        mime_type,
        instruction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogoError;
    use std::collections::HashSet;

    #[test]
    fn test_prompts_embed_inputs() {
        let prompt = build_generation_prompt("Acme", "minimalist", 0);
        assert!(prompt.contains("\"Acme\""));
        assert!(prompt.contains("\"minimalist\""));
        assert!(prompt.contains("Variation unique seed: 0-"));
    }

    #[test]
    fn test_prompts_are_pairwise_distinct() {
        let prompts: HashSet<String> = (0..10)
            .map(|i| build_generation_prompt("Acme", "minimalist", i))
            .collect();
        assert_eq!(prompts.len(), 10);
    }

    #[test]
    fn test_edit_payload_frames_instruction() {
        let asset = GeneratedAsset::from_inline_data("image/png", "QUJD", "Acme - minimalist");
        let edit = build_edit_payload(&asset, "make it neon").unwrap();

        assert_eq!(edit.mime_type, "image/png");
        assert_eq!(edit.image_data, "QUJD");
        assert!(edit.instruction.contains("\"make it neon\""));
        assert!(edit.instruction.contains("brand identity"));
    }

    #[test]
    fn test_edit_payload_rejects_malformed_asset() {
        let asset = GeneratedAsset {
            id: "x".into(),
            image_data: "not a data url".into(),
            origin_prompt: String::new(),
        };
        assert!(matches!(
            build_edit_payload(&asset, "make it neon"),
            Err(LogoError::MalformedAsset(_))
        ));
    }
}
