//! The run-level hook trait.

use async_trait::async_trait;

use crate::chat::ChatResponse;
use crate::error::Error;
use crate::message::Message;

use super::context::RunContext;

/// A shared, thread-safe [`RunHooks`] trait object.
pub type SharedRunHooks = std::sync::Arc<dyn RunHooks>;

/// Run-level lifecycle hooks.
///
/// Every method receives the agent name and has a default no-op body, so
/// implementations only override the events they care about.
///
/// This trait is object-safe and can be used as `Arc<dyn RunHooks>`.
#[async_trait]
pub trait RunHooks: Send + Sync {
    /// Called before the agent begins execution.
    async fn on_agent_start(&self, _ctx: &RunContext, _agent_name: &str) {}

    /// Called after the agent produces its final output.
    async fn on_agent_end(&self, _ctx: &RunContext, _agent_name: &str, _output: &str) {}

    /// Called just before invoking the model.
    ///
    /// `system_prompt` is the agent's instructions (if any), and `messages`
    /// is the full conversation sent to the model.
    async fn on_llm_start(
        &self,
        _ctx: &RunContext,
        _agent_name: &str,
        _system_prompt: Option<&str>,
        _messages: &[Message],
    ) {
    }

    /// Called immediately after the model returns a response.
    async fn on_llm_end(&self, _ctx: &RunContext, _agent_name: &str, _response: &ChatResponse) {}

    /// Called when the run fails.
    async fn on_error(&self, _ctx: &RunContext, _agent_name: &str, _error: &Error) {}
}
