//! Gated dispatch of run telemetry.
//!
//! [`HookDispatch`] is the only place the runner reports lifecycle events.
//! Event emission belongs to the hook sink; the dispatcher itself only
//! records a failure on the current span. When the run has tracing disabled
//! it holds no hooks and every method is a no-op.

use crate::callback::{NoopRunHooks, RunContext, RunHooks};
use crate::chat::ChatResponse;
use crate::error::Error;
use crate::message::Message;

use super::result::RunConfig;

pub(super) struct HookDispatch<'a> {
    hooks: Option<&'a dyn RunHooks>,
    agent_name: &'a str,
}

impl<'a> HookDispatch<'a> {
    pub(super) fn new(config: &'a RunConfig, noop: &'a NoopRunHooks, agent_name: &'a str) -> Self {
        let hooks = if config.tracing_disabled {
            None
        } else {
            Some(config.hooks.as_deref().unwrap_or(noop))
        };
        Self { hooks, agent_name }
    }

    pub(super) async fn agent_start(&self, ctx: &RunContext) {
        if let Some(hooks) = self.hooks {
            hooks.on_agent_start(ctx, self.agent_name).await;
        }
    }

    pub(super) async fn llm_start(
        &self,
        ctx: &RunContext,
        system_prompt: Option<&str>,
        messages: &[Message],
    ) {
        if let Some(hooks) = self.hooks {
            hooks
                .on_llm_start(ctx, self.agent_name, system_prompt, messages)
                .await;
        }
    }

    pub(super) async fn llm_end(&self, ctx: &RunContext, response: &ChatResponse) {
        if let Some(hooks) = self.hooks {
            hooks.on_llm_end(ctx, self.agent_name, response).await;
        }
    }

    pub(super) async fn agent_end(&self, ctx: &RunContext, output: &str) {
        if let Some(hooks) = self.hooks {
            hooks.on_agent_end(ctx, self.agent_name, output).await;
        }
    }

    pub(super) async fn error(&self, ctx: &RunContext, err: &Error) {
        if let Some(hooks) = self.hooks {
            tracing::Span::current().record("error", tracing::field::display(err));
            hooks.on_error(ctx, self.agent_name, err).await;
        }
    }
}
