//! Error types for the authorization matcher

use thiserror::Error;

/// Authorization matcher errors
///
/// Matching and aggregation never fail; these cover the configuration and
/// serving surfaces around them.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for authorization matcher operations
pub type Result<T> = std::result::Result<T, AuthzError>;
