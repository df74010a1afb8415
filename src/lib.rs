pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod prompt;
pub mod studio;

pub use config::{Config, GeminiConfig};
pub use error::{LogoError, Result};
pub use gemini::GeminiClient;
pub use models::*;
pub use studio::LogoStudio;
