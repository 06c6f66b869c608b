//! OpenAI-compatible client configuration.

use crate::config::Credentials;

/// Configuration for the OpenAI-compatible client.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Base URL for the API (defaults to OpenAI's API).
    pub base_url: String,
    /// Default model to use when a request leaves `model` empty.
    pub model: String,
    /// Optional organization ID.
    pub organization: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl OpenAIConfig {
    /// Default OpenAI API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    /// Groq's OpenAI-compatible endpoint.
    pub const GROQ_BASE_URL: &'static str = "https://api.groq.com/openai/v1";
    /// Default model.
    pub const DEFAULT_MODEL: &'static str = "llama-3.3-70b-versatile";
    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Creates a new configuration with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Creates a configuration from loaded credentials.
    ///
    /// An empty base URL keeps [`Self::DEFAULT_BASE_URL`].
    #[must_use]
    pub fn from_credentials(credentials: &Credentials) -> Self {
        let config = Self::new(credentials.api_key.clone());
        if credentials.base_url.is_empty() {
            config
        } else {
            config.with_base_url(credentials.base_url.clone())
        }
    }

    /// Creates config for Groq.
    #[must_use]
    pub fn groq(api_key: impl Into<String>) -> Self {
        Self::new(api_key).with_base_url(Self::GROQ_BASE_URL)
    }

    /// Sets the base URL. Trailing slashes are dropped.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Sets the default model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the organization ID.
    #[must_use]
    pub fn with_organization(mut self, org: impl Into<String>) -> Self {
        self.organization = Some(org.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            model: Self::DEFAULT_MODEL.to_owned(),
            organization: None,
            timeout_secs: Some(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = OpenAIConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, OpenAIConfig::DEFAULT_BASE_URL);
        assert_eq!(config.model, OpenAIConfig::DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, Some(120));
    }

    #[test]
    fn test_config_builder() {
        let config = OpenAIConfig::new("key")
            .with_model("llama-3.1-8b-instant")
            .with_organization("org-1")
            .with_timeout(60);

        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.organization.as_deref(), Some("org-1"));
        assert_eq!(config.timeout_secs, Some(60));
    }

    #[test]
    fn test_groq_base_url() {
        let config = OpenAIConfig::groq("gsk");
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = OpenAIConfig::new("k").with_base_url("http://localhost:8000/v1/");
        assert_eq!(config.base_url, "http://localhost:8000/v1");
    }

    #[test]
    fn test_from_credentials() {
        let creds = Credentials::new("gsk_abc", "https://api.groq.com/openai/v1");
        let config = OpenAIConfig::from_credentials(&creds);
        assert_eq!(config.api_key, "gsk_abc");
        assert_eq!(config.base_url, OpenAIConfig::GROQ_BASE_URL);

        let config = OpenAIConfig::from_credentials(&Credentials::new("k", ""));
        assert_eq!(config.base_url, OpenAIConfig::DEFAULT_BASE_URL);
    }
}
