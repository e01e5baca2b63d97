//! Error types for display name generation

use thiserror::Error;

/// Result type alias for naming operations
pub type NamingResult<T> = Result<T, NamingError>;

/// Error type for naming operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// A required descriptor was absent
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration references a custom generator that was never registered
    #[error("unknown display name generator: {0}")]
    UnknownGenerator(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl NamingError {
    /// Returns a stable numeric code for this error kind
    pub fn error_code(&self) -> u32 {
        match self {
            NamingError::InvalidArgument(_) => 1,
            NamingError::UnknownGenerator(_) => 2,
            NamingError::ConfigError(_) => 3,
        }
    }
}

impl From<serde_json::Error> for NamingError {
    fn from(err: serde_json::Error) -> Self {
        NamingError::ConfigError(err.to_string())
    }
}
