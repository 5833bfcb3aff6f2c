// Central Error Type for Queuescope

use thiserror::Error;

/// Application-level error type
///
/// Queue queries never produce one of these: a missing process or runtime
/// reads as an empty result. Errors come from registry invariants and from
/// adapters (snapshot loading, configuration, subscriber setup).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
