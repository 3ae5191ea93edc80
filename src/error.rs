//! Error types for the banditsim library.

use thiserror::Error;

/// Result type alias for bandit operations.
pub type Result<T> = std::result::Result<T, BanditError>;

/// Errors that can occur while configuring or running a simulation.
#[derive(Error, Debug)]
pub enum BanditError {
    /// Malformed environment or policy parameters.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A JSON simulation config could not be parsed.
    #[error("config error: {source}")]
    Config {
        #[from]
        source: serde_json::Error,
    },
}

impl BanditError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        BanditError::InvalidConfiguration {
            message: message.into(),
        }
    }
}
