//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Honeypot field was filled in; the submit is dropped without feedback
    #[error("Submission suppressed")]
    SpamSuppressed,

    /// Submit attempted before the CAPTCHA was solved
    #[error("CAPTCHA verification required")]
    CaptchaRequired,

    /// A submission is already waiting for the backend
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// The submission backend rejected the message or could not be reached
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// The submission backend did not answer in time
    #[error("Submission timed out after {0} ms")]
    SubmissionTimedOut(u64),

    /// Language Context used outside a mounted `LanguageProvider`
    #[error("Language context accessed outside of a mounted LanguageProvider")]
    ContextMisuse,

    /// Configuration file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (visitor input, flaky network) rather than a bug.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::SpamSuppressed
            | Self::CaptchaRequired
            | Self::SubmissionInFlight
            | Self::SubmissionFailed(_)
            | Self::SubmissionTimedOut(_) => true,
            Self::ContextMisuse | Self::Config(_) | Self::SerializationError(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        Self::SubmissionFailed(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
