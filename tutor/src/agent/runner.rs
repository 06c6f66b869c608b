//! Stateless execution engine for [`Agent`] runs.
//!
//! A run is a single chat-completion round: the agent's instructions become
//! the system message, the input becomes the user message, and the model's
//! text reply becomes [`RunResult::final_output`].

use futures::future::BoxFuture;
use tracing::Instrument;

use crate::callback::{NoopRunHooks, RunContext};
use crate::error::{Error, Result};
use crate::message::Message;

use super::config::Agent;
use super::hook::HookDispatch;
use super::result::{RunConfig, RunResult};

/// Stateless agent runner.
#[derive(Debug, Clone, Copy)]
pub struct Runner;

impl Runner {
    /// Run an agent once with the given input.
    ///
    /// When `config.tracing_disabled` is `false` the run executes inside an
    /// `agent` span and calls `config.hooks` (or [`NoopRunHooks`] if none).
    /// When `true`, neither happens.
    pub fn run<'a>(
        agent: &'a Agent,
        input: impl Into<String>,
        config: RunConfig,
    ) -> BoxFuture<'a, Result<RunResult>> {
        let input = input.into();

        if config.tracing_disabled {
            return Box::pin(Self::run_inner(agent, input, config));
        }

        let span = tracing::info_span!(
            "agent",
            agent.name = %agent.name,
            agent.model = agent.model_id().unwrap_or_default(),
            error = tracing::field::Empty,
        );
        Box::pin(Self::run_inner(agent, input, config).instrument(span))
    }

    /// Run an agent once, blocking the calling thread until it completes.
    ///
    /// Builds a private current-thread runtime for the duration of the call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Agent`] if called from inside a Tokio runtime, an
    /// I/O error if the runtime cannot be built, and otherwise whatever
    /// [`Runner::run`] returns.
    pub fn run_sync(agent: &Agent, input: impl Into<String>, config: RunConfig) -> Result<RunResult> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(Error::agent(
                "Runner::run_sync cannot be called from within an async runtime; use Runner::run",
            ));
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(Self::run(agent, input, config))
    }

    async fn run_inner(agent: &Agent, input: String, config: RunConfig) -> Result<RunResult> {
        let model = agent.model.as_deref().ok_or_else(|| {
            Error::agent(format!(
                "agent '{}' has no model configured; call .model() before running",
                agent.name
            ))
        })?;

        let noop = NoopRunHooks;
        let hooks = HookDispatch::new(&config, &noop, &agent.name);
        let mut context = RunContext::new().with_agent_name(&agent.name);

        let messages = Self::build_messages(agent, input);
        let system_prompt = (!agent.instructions.is_empty()).then_some(agent.instructions.as_str());

        hooks.agent_start(&context).await;
        context.advance_step();
        hooks.llm_start(&context, system_prompt, &messages).await;

        let response = match model.generate(messages).await {
            Ok(response) => response,
            Err(err) => {
                hooks.error(&context, &err).await;
                return Err(err);
            }
        };

        if let Some(usage) = response.usage {
            context.add_usage(usage);
        }
        hooks.llm_end(&context, &response).await;

        let result = RunResult {
            final_output: response.text().unwrap_or_default().to_owned(),
            agent_name: agent.name.clone(),
            model: model.model_id().to_owned(),
            usage: *context.usage(),
            response_id: response.id.clone(),
            stop_reason: response.stop_reason,
        };

        hooks.agent_end(&context, &result.final_output).await;
        Ok(result)
    }

    fn build_messages(agent: &Agent, input: String) -> Vec<Message> {
        let mut messages = Vec::with_capacity(2);
        if !agent.instructions.is_empty() {
            messages.push(Message::system(&agent.instructions));
        }
        messages.push(Message::user(input));
        messages
    }
}
