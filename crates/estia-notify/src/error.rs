//! Notification errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Twilio rejected the credentials.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Twilio answered with an error payload.
    #[error("Twilio error {code} (HTTP {status}): {message}")]
    Provider {
        status: u16,
        code: i64,
        message: String,
    },

    /// The response body could not be read.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No recipients configured")]
    NoRecipients,
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        NotifyError::Http(err.to_string())
    }
}
