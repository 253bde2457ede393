//! AI crate error types.

use thiserror::Error;
use nutrinest_core::Error as CoreError;

/// Errors from the generation pipeline.
#[derive(Debug, Error)]
pub enum AiError {
    /// No API key configured for the provider.
    #[error("Missing API key: set {0}")]
    MissingApiKey(String),

    /// The request never produced a usable response (network, TLS, decode).
    #[error("Request to generation endpoint failed: {0}")]
    Http(String),

    /// The provider answered with an error payload. Carries the provider's
    /// own message when one is present.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AiError> for CoreError {
    fn from(err: AiError) -> Self {
        CoreError::Generation(err.to_string())
    }
}
