use thiserror::Error;

use crate::session::SessionError;

/// Shown when a 2xx body cannot be read or the request never completes.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to analyze. Please try again.";

/// Shown when a non-2xx body carries no usable `error` field.
pub const DEFAULT_API_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Every way a submission can fail.
///
/// `Display` is the exact message shown inline above the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please enter a valid news URL.")]
    InvalidUrl,

    #[error("Please paste at least {min_chars} characters of article text.")]
    TextTooShort { min_chars: usize },

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Api(String),

    #[error("No analysis result returned. Please try again.")]
    EmptyResult,

    #[error("Could not save the analysis result.")]
    Storage(#[from] SessionError),
}

impl SubmitError {
    /// Transport failure; an empty message falls back to the generic one.
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            SubmitError::Network(DEFAULT_FAILURE_MESSAGE.to_string())
        } else {
            SubmitError::Network(message)
        }
    }
}
