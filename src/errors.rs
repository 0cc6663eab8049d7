//! Error types for rapid_summarize

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Errors raised by the summarization engine
///
/// Empty input and documents without eligible sentences are not errors:
/// they produce an empty summary.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// A caller-supplied argument is out of its domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The strategy name does not match any known summarization strategy
    #[error(
        "invalid argument: unsupported strategy '{0}' \
         (expected 'frequency', 'lemma-frequency' or 'graph')"
    )]
    UnsupportedStrategy(String),

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No stopword/lemma resources exist for the requested language
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A summary spec failed validation
    #[error("invalid summary spec: {0}")]
    InvalidSpec(String),

    /// Malformed JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummarizerError {
    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an invalid-config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether this error is a caller programming error (bad argument or
    /// unknown strategy) rather than a configuration or resource problem
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::UnsupportedStrategy(_)
        )
    }
}
