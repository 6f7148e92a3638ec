//! Error types for decorcost

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The vision collaborator answered with an error payload instead of an analysis
    #[error("Vision service rejected the request ({code}): {message}")]
    VisionRejected { code: String, message: String },

    #[error("Invalid vision response: {0}")]
    InvalidVisionResponse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
