//! Unified error types for the tutor crate.
//!
//! This module provides the error hierarchy covering:
//! - LLM provider errors (authentication, rate limiting, etc.)
//! - Configuration errors (settings files, runtime construction)
//! - Agent runtime errors

use std::fmt;

/// Result type alias for tutor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tutor crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// LLM provider error.
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Agent runtime error.
    #[error("Agent error: {0}")]
    Agent(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an agent error with a message.
    #[must_use]
    pub fn agent(msg: impl Into<String>) -> Self {
        Self::Agent(msg.into())
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the LLM error kind, if this is a provider failure.
    #[must_use]
    pub const fn llm_kind(&self) -> Option<LlmErrorKind> {
        match self {
            Self::Llm(err) => Some(err.kind),
            _ => None,
        }
    }
}

/// Error type for LLM provider operations.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct LlmError {
    /// The error kind.
    pub kind: LlmErrorKind,
    /// The provider name (e.g., "openai").
    pub provider: Option<String>,
    /// Additional error message.
    pub message: String,
    /// Optional error code from the provider.
    pub code: Option<String>,
}

/// Categories of LLM errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LlmErrorKind {
    /// Authentication or authorization failure.
    Auth,
    /// Rate limit exceeded.
    RateLimited,
    /// Response format error.
    ResponseFormat,
    /// Network or connection error.
    Network,
    /// HTTP status error.
    HttpStatus,
    /// Provider-specific error.
    Provider,
    /// Internal error.
    Internal,
}

impl LlmError {
    /// Create an authentication error.
    #[must_use]
    pub fn auth(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::Auth,
            provider: Some(provider.into()),
            message: message.into(),
            code: None,
        }
    }

    /// Create a rate limit error.
    #[must_use]
    pub fn rate_limited(provider: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::RateLimited,
            provider: Some(provider.into()),
            message: "Rate limit exceeded. Please retry after some time.".into(),
            code: None,
        }
    }

    /// Create a response format error.
    #[must_use]
    pub fn response_format(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::ResponseFormat,
            provider: None,
            message: format!("Expected {}, got {}", expected.into(), got.into()),
            code: None,
        }
    }

    /// Create a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::Network,
            provider: None,
            message: message.into(),
            code: None,
        }
    }

    /// Create an HTTP status error.
    #[must_use]
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::HttpStatus,
            provider: None,
            message: format!("HTTP {status}: {}", body.into()),
            code: Some(status.to_string()),
        }
    }

    /// Create a provider-specific error.
    #[must_use]
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::Provider,
            provider: Some(provider.into()),
            message: message.into(),
            code: None,
        }
    }

    /// Create a provider error with an error code.
    #[must_use]
    pub fn provider_code(
        provider: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: LlmErrorKind::Provider,
            provider: Some(provider.into()),
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: LlmErrorKind::Internal,
            provider: None,
            message: message.into(),
            code: None,
        }
    }

    /// Check if this is a retryable error.
    ///
    /// Nothing in this crate retries; the flag is for callers.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.kind, LlmErrorKind::RateLimited | LlmErrorKind::Network)
    }
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(provider) = &self.provider {
            write!(f, "[{provider}] ")?;
        }
        write!(f, "{}", self.message)?;
        if let Some(code) = &self.code {
            write!(f, " (code: {code})")?;
        }
        Ok(())
    }
}

impl std::error::Error for LlmError {}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network("Request timed out")
        } else if err.is_connect() {
            Self::network(format!("Connection failed: {err}"))
        } else {
            Self::network(err.to_string())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod error {
        use super::*;

        #[test]
        fn agent_creates_error() {
            let err = Error::agent("something went wrong");
            assert!(matches!(err, Error::Agent(_)));
            assert!(err.to_string().contains("something went wrong"));
        }

        #[test]
        fn config_creates_error() {
            let err = Error::config("bad settings file");
            assert!(matches!(err, Error::Config(_)));
            assert!(err.to_string().starts_with("Config error"));
        }

        #[test]
        fn from_llm_error() {
            let err: Error = LlmError::network("timeout").into();
            assert!(matches!(err, Error::Llm(_)));
            assert_eq!(err.llm_kind(), Some(LlmErrorKind::Network));
        }

        #[test]
        fn llm_kind_is_none_for_other_variants() {
            assert_eq!(Error::agent("x").llm_kind(), None);
        }

        #[test]
        fn from_io_error() {
            let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
            let err: Error = io_err.into();
            assert!(matches!(err, Error::Io(_)));
        }
    }

    mod llm_error {
        use super::*;

        #[test]
        fn auth_creates_error() {
            let err = LlmError::auth("openai", "Invalid API key");
            assert_eq!(err.kind, LlmErrorKind::Auth);
            assert_eq!(err.provider.as_deref(), Some("openai"));
            assert!(err.message.contains("Invalid API key"));
            assert!(err.code.is_none());
        }

        #[test]
        fn rate_limited_is_retryable() {
            let err = LlmError::rate_limited("openai");
            assert_eq!(err.kind, LlmErrorKind::RateLimited);
            assert!(err.is_retryable());
        }

        #[test]
        fn auth_is_not_retryable() {
            assert!(!LlmError::auth("openai", "nope").is_retryable());
        }

        #[test]
        fn http_status_keeps_code() {
            let err = LlmError::http_status(502, "bad gateway");
            assert_eq!(err.kind, LlmErrorKind::HttpStatus);
            assert_eq!(err.code.as_deref(), Some("502"));
            assert_eq!(err.to_string(), "HTTP 502: bad gateway (code: 502)");
        }

        #[test]
        fn display_includes_provider_and_code() {
            let err = LlmError::provider_code("openai", "model_not_found", "no such model");
            assert_eq!(
                err.to_string(),
                "[openai] no such model (code: model_not_found)"
            );
        }

        #[test]
        fn response_format_message() {
            let err = LlmError::response_format("at least one choice", "empty choices");
            assert_eq!(err.kind, LlmErrorKind::ResponseFormat);
            assert_eq!(err.message, "Expected at least one choice, got empty choices");
        }
    }
}
