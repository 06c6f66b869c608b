//! Completion models: a provider bound to one model identifier.
//!
//! The agent layer depends only on [`CompletionModel`]. The stock
//! implementation, [`ChatCompletionsModel`], forwards to any
//! [`ChatProvider`] with its bound model id and adds nothing else.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::chat::{ChatRequest, ChatResponse, SharedChatProvider};
use crate::error::Result;
use crate::message::Message;

/// A model capable of turning a conversation into a completion.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// The model identifier sent with every request.
    fn model_id(&self) -> &str;

    /// Produce a completion for `messages`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the underlying provider returns.
    async fn generate(&self, messages: Vec<Message>) -> Result<ChatResponse>;
}

/// A shared, thread-safe [`CompletionModel`] trait object.
pub type SharedCompletionModel = Arc<dyn CompletionModel>;

/// Adapter exposing a chat-completions provider as a [`CompletionModel`].
#[derive(Clone)]
pub struct ChatCompletionsModel {
    model: String,
    client: SharedChatProvider,
}

impl ChatCompletionsModel {
    /// Bind `client` to the model identifier `model`.
    #[must_use]
    pub fn new(model: impl Into<String>, client: SharedChatProvider) -> Self {
        Self {
            model: model.into(),
            client,
        }
    }

    /// Wrap this adapter in an [`Arc`] for use by an agent.
    #[must_use]
    pub fn shared(self) -> SharedCompletionModel {
        Arc::new(self)
    }
}

impl fmt::Debug for ChatCompletionsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatCompletionsModel")
            .field("model", &self.model)
            .field("provider", &self.client.provider_name())
            .finish()
    }
}

#[async_trait]
impl CompletionModel for ChatCompletionsModel {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, messages: Vec<Message>) -> Result<ChatResponse> {
        let request = ChatRequest::with_messages(&self.model, messages);
        self.client.chat(&request).await
    }
}
