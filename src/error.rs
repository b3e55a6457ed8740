//! Error types for Recap.

use thiserror::Error;

/// Library-level error type for Recap operations.
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No user message found")]
    NoUserMessage,

    #[error("Invalid YouTube URL: {0}")]
    InvalidVideoUrl(String),

    #[error("Transcript unavailable: {0}")]
    Transcript(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Recap operations.
pub type Result<T> = std::result::Result<T, RecapError>;
