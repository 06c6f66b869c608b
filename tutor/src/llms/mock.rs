//! Mock chat provider for testing.
//!
//! Returns predefined responses in sequence, cycling through them, and
//! records every request it receives so tests can inspect the outbound
//! model id and messages without any network traffic.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::chat::{ChatProvider, ChatRequest, ChatResponse};
use crate::error::{Error, LlmError, Result};
use crate::usage::Usage;

/// A recording mock provider.
///
/// # Example
///
/// ```rust,ignore
/// let provider = MockProvider::new(vec!["4".to_owned()]);
/// // every call returns "4"; provider.requests() lists what was sent
/// ```
#[derive(Debug)]
pub struct MockProvider {
    model: String,
    responses: Vec<String>,
    failure: Option<LlmError>,
    usage: Option<Usage>,
    index: AtomicUsize,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    /// Create a mock provider with predefined responses.
    #[must_use]
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            model: "mock-model".to_owned(),
            responses,
            failure: None,
            usage: None,
            index: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock provider whose every call fails with `error`.
    #[must_use]
    pub fn failing(error: LlmError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new(Vec::new())
        }
    }

    /// Set the model reported by [`ChatProvider::default_model`].
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Attach `usage` to every successful response.
    #[must_use]
    pub const fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Number of calls made so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        if let Ok(mut guard) = self.requests.lock() {
            guard.push(request.clone());
        }
        let index = self.index.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = &self.failure {
            return Err(Error::Llm(err.clone()));
        }
        if self.responses.is_empty() {
            return Err(LlmError::response_format("a canned response", "none configured").into());
        }

        let text = self.responses[index % self.responses.len()].clone();
        let response = ChatResponse::from_text(text)
            .with_model(request.model.clone())
            .with_id(format!("mock-{index}"));
        Ok(match self.usage {
            Some(usage) => response.with_usage(usage),
            None => response,
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn default_model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmErrorKind;

    #[tokio::test]
    async fn test_mock_cycles_responses() {
        let provider = MockProvider::new(vec!["first".to_owned(), "second".to_owned()]);
        let request = ChatRequest::new("m").user("hi");

        let r1 = provider.chat(&request).await.expect("chat should succeed");
        let r2 = provider.chat(&request).await.expect("chat should succeed");
        let r3 = provider.chat(&request).await.expect("chat should succeed");

        assert_eq!(r1.text(), Some("first"));
        assert_eq!(r2.text(), Some("second"));
        assert_eq!(r3.text(), Some("first"));
        assert_eq!(provider.call_count(), 3);
        assert_eq!(provider.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_mock_failure_is_recorded() {
        let provider = MockProvider::failing(LlmError::rate_limited("mock"));
        let err = provider
            .chat(&ChatRequest::new("m"))
            .await
            .expect_err("should fail");
        assert_eq!(err.llm_kind(), Some(LlmErrorKind::RateLimited));
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_mock_records_requests() {
        let provider = MockProvider::new(vec!["4".to_owned()]).with_model("tiny");
        let request = ChatRequest::new("llama-3.3-70b-versatile")
            .system("be brief")
            .user("2+2=");
        let response = tokio_test::block_on(provider.chat(&request)).expect("chat should succeed");

        assert_eq!(response.text(), Some("4"));
        assert_eq!(response.model.as_deref(), Some("llama-3.3-70b-versatile"));
        assert_eq!(provider.default_model(), "tiny");
        let sent = provider.requests();
        assert_eq!(sent[0].system_prompt(), Some("be brief"));
    }
}
