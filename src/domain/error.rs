use std::io;

use thiserror::Error;

/// Library-wide error type for wxdesk operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// The draft timestamp could not be expanded to an instant.
    #[error("Invalid timestamp '{0}': expected YYYY-MM-DD or an RFC 3339 instant")]
    InvalidTimestamp(String),

    /// The remote store could not be reached.
    #[error("Store request failed: {0}")]
    Transport(String),

    /// The remote store answered with a non-2xx status.
    #[error("Store returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The requested observation does not exist in the store.
    #[error("Observation {0} not found")]
    ObservationNotFound(i64),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
