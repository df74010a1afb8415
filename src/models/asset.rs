use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LogoError, Result};

/// A generated or edited logo held in memory, with the prompt that produced
/// it as provenance. The image is stored as a data URL
/// (`data:<mime>;base64,<payload>`) so the caller can hand it straight to a
/// renderer or split it back apart for a follow-up edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedAsset {
    pub id: String,
    pub image_data: String,
    pub origin_prompt: String,
}

impl GeneratedAsset {
    /// Builds an asset from an inline-data response part. Every asset gets a
    /// fresh random identifier; edits never reuse the source asset's id.
    pub fn from_inline_data(
        mime_type: &str,
        data: &str,
        origin_prompt: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            image_data: format!("data:{};base64,{}", mime_type, data),
            origin_prompt: origin_prompt.into(),
        }
    }

    /// Splits the stored data URL into (media type, base64 payload).
    pub fn split_data_url(&self) -> Result<(String, String)> {
        let rest = self.image_data.strip_prefix("data:").ok_or_else(|| {
            LogoError::MalformedAsset("image data is not a data URL".into())
        })?;

        let (header, payload) = rest.split_once(',').ok_or_else(|| {
            LogoError::MalformedAsset("data URL is missing the payload separator".into())
        })?;

        let mime_type = header.strip_suffix(";base64").ok_or_else(|| {
            LogoError::MalformedAsset("data URL is missing the base64 marker".into())
        })?;

        if mime_type.is_empty() {
            return Err(LogoError::MalformedAsset(
                "data URL carries no media type".into(),
            ));
        }

        Ok((mime_type.to_string(), payload.to_string()))
    }

    /// Decodes the stored payload into raw image bytes.
    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        let (_, payload) = self.split_data_url()?;
        STANDARD
            .decode(payload)
            .map_err(|e| LogoError::MalformedAsset(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_round_trip() {
        let payload = STANDARD.encode(b"\x89PNG\r\n\x1a\n");
        let asset = GeneratedAsset::from_inline_data("image/png", &payload, "Acme - minimalist");

        let (mime_type, data) = asset.split_data_url().unwrap();
        assert_eq!(mime_type, "image/png");
        assert_eq!(data, payload);
        assert_eq!(asset.decode_bytes().unwrap(), b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_identifiers_are_unique() {
        let a = GeneratedAsset::from_inline_data("image/png", "AAAA", "p");
        let b = GeneratedAsset::from_inline_data("image/png", "AAAA", "p");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_split_rejects_missing_separator() {
        let asset = GeneratedAsset {
            id: "x".into(),
            image_data: "data:image/png;base64".into(),
            origin_prompt: String::new(),
        };
        assert!(matches!(
            asset.split_data_url(),
            Err(LogoError::MalformedAsset(_))
        ));
    }

    #[test]
    fn test_split_rejects_non_data_url() {
        let asset = GeneratedAsset {
            id: "x".into(),
            image_data: "https://example.com/logo.png".into(),
            origin_prompt: String::new(),
        };
        assert!(matches!(
            asset.split_data_url(),
            Err(LogoError::MalformedAsset(_))
        ));
    }

    #[test]
    fn test_split_rejects_empty_media_type() {
        let asset = GeneratedAsset {
            id: "x".into(),
            image_data: "data:;base64,AAAA".into(),
            origin_prompt: String::new(),
        };
        assert!(matches!(
            asset.split_data_url(),
            Err(LogoError::MalformedAsset(_))
        ));
    }
}
