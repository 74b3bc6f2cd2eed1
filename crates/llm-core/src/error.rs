//! Error types for model invocations.

use thiserror::Error;

/// Errors that can occur when invoking a language model.
///
/// Pipeline stages treat every variant uniformly as "invocation failed";
/// the distinctions exist for logging and for configuration errors, which
/// are raised at client construction and never absorbed.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The client is misconfigured (missing API key, bad URL).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request could not reach the provider.
    #[error("network error: {0}")]
    Network(String),

    /// The provider returned an error response.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The model replied, but the output could not be parsed.
    #[error("malformed model output: {0}")]
    MalformedOutput(String),

    /// The model is temporarily unavailable.
    #[error("model unavailable: {0}")]
    Unavailable(String),
}
