//! OpenAI-compatible API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::chat::ChatRequest;
use crate::error::{LlmError, Result};
use crate::message::Message;

use super::config::OpenAIConfig;
use super::types::{OpenAIChatRequest, OpenAIErrorResponse, OpenAIMessage};

/// OpenAI-compatible API client.
///
/// Cloning is cheap: the configuration is shared and `reqwest::Client`
/// is reference counted.
#[derive(Debug, Clone)]
pub struct OpenAI {
    pub(crate) config: Arc<OpenAIConfig>,
    pub(crate) client: Client,
}

impl OpenAI {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an `Auth` error if the API key is empty, or an `Internal`
    /// error if the HTTP client cannot be built.
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(LlmError::auth("openai", "API key is required").into());
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .map_err(|e| LlmError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the default model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the chat completions URL.
    pub(crate) fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Build request headers for JSON requests.
    pub(crate) fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json");

        if let Some(org) = &self.config.organization {
            req = req.header("OpenAI-Organization", org);
        }

        req
    }

    /// Convert Message to OpenAI format.
    pub(crate) fn convert_message(msg: &Message) -> OpenAIMessage {
        OpenAIMessage {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }

    /// Build the request body.
    pub(crate) fn build_body(&self, request: &ChatRequest) -> OpenAIChatRequest {
        let model = if request.model.is_empty() {
            self.config.model.clone()
        } else {
            request.model.clone()
        };

        OpenAIChatRequest {
            model,
            messages: request.messages.iter().map(Self::convert_message).collect(),
            stream: false,
        }
    }

    /// Parse an error response from the provider.
    pub(crate) fn parse_error(status: u16, body: &str) -> LlmError {
        match status {
            401 | 403 => {
                let message = serde_json::from_str::<OpenAIErrorResponse>(body)
                    .map_or_else(|_| format!("HTTP {status}"), |r| r.error.message);
                return LlmError::auth("openai", message);
            }
            429 => return LlmError::rate_limited("openai"),
            _ => {}
        }

        if let Ok(error_response) = serde_json::from_str::<OpenAIErrorResponse>(body) {
            let error = error_response.error;
            let code = error.code.unwrap_or(error.error_type);
            return if code.is_empty() {
                LlmError::provider("openai", error.message)
            } else {
                LlmError::provider_code("openai", code, error.message)
            };
        }

        LlmError::http_status(status, body.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmErrorKind;

    fn client() -> OpenAI {
        OpenAI::new(OpenAIConfig::groq("gsk_test")).expect("client should build")
    }

    #[test]
    fn test_empty_key_is_auth_error() {
        let err = OpenAI::new(OpenAIConfig::new("")).expect_err("empty key must fail");
        assert_eq!(err.llm_kind(), Some(LlmErrorKind::Auth));
    }

    #[test]
    fn test_chat_url() {
        assert_eq!(
            client().chat_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_message_conversion() {
        let converted = OpenAI::convert_message(&Message::user("Hello!"));
        assert_eq!(converted.role, "user");
        assert_eq!(converted.content.as_deref(), Some("Hello!"));
    }

    #[test]
    fn test_build_body_keeps_request_model() {
        let request = ChatRequest::new("llama-3.3-70b-versatile")
            .system("You are a math tutor")
            .user("2+2=");
        let body = client().build_body(&request);
        let json = serde_json::to_value(&body).expect("body serializes");

        assert_eq!(json["model"], "llama-3.3-70b-versatile");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "You are a math tutor");
        assert_eq!(json["messages"][1]["content"], "2+2=");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_build_body_falls_back_to_default_model() {
        let body = client().build_body(&ChatRequest::default().user("hi"));
        assert_eq!(body.model, OpenAIConfig::DEFAULT_MODEL);
    }

    #[test]
    fn test_parse_error_statuses() {
        let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        assert_eq!(OpenAI::parse_error(401, body).kind, LlmErrorKind::Auth);
        assert_eq!(OpenAI::parse_error(403, "").kind, LlmErrorKind::Auth);
        assert_eq!(
            OpenAI::parse_error(429, body).kind,
            LlmErrorKind::RateLimited
        );

        let err = OpenAI::parse_error(404, body);
        assert_eq!(err.kind, LlmErrorKind::Provider);
        assert_eq!(err.code.as_deref(), Some("invalid_api_key"));

        let err = OpenAI::parse_error(502, "<html>bad gateway</html>");
        assert_eq!(err.kind, LlmErrorKind::HttpStatus);
    }
}
