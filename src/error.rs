use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Transport error: {0}")]
    TransportError(String),
    #[error("API error {code}: {message}")]
    ApiError { code: u16, message: String },
    #[error("Image decode error: {0}")]
    ImageDecodeError(String),
    #[error("Malformed asset: {0}")]
    MalformedAsset(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, LogoError>;
