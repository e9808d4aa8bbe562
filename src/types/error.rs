//! Error types
//!
//! None of these ever reach a scoring caller: the fallback chain absorbs them.
//! Only configuration and server startup surface errors.

use thiserror::Error;

/// Failures of the external NLP provider
#[derive(Error, Debug)]
pub enum NlpError {
    /// Provider missing or cannot be constructed
    #[error("NLP service unavailable: {0}")]
    Unavailable(String),

    /// Transport failure
    #[error("NLP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("NLP service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("NLP response decode error: {0}")]
    Decode(String),
}

/// Result type alias for NLP calls
pub type NlpResult<T> = Result<T, NlpError>;

impl NlpError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

/// Failures inside a scoring tier
#[derive(Error, Debug)]
pub enum ScoringError {
    /// Feature extraction failed
    #[error(transparent)]
    Nlp(#[from] NlpError),

    /// A formula produced an unusable value
    #[error("Analysis error: {0}")]
    Analysis(String),
}

impl ScoringError {
    pub fn analysis(msg: impl Into<String>) -> Self {
        Self::Analysis(msg.into())
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for configuration
pub type ConfigResult<T> = Result<T, ConfigError>;
