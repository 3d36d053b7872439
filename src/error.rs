//! Error types for Viser.

use thiserror::Error;

/// Library-level error type for Viser operations.
///
/// The matching engine itself is total and never errors; this type covers
/// the surrounding plumbing (configuration, catalog and transcript files).
#[derive(Error, Debug)]
pub enum ViserError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for Viser operations.
pub type Result<T> = std::result::Result<T, ViserError>;
