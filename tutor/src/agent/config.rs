//! Agent definition.
//!
//! An [`Agent`] is a name, a system instruction and a bound
//! [`CompletionModel`](crate::model::CompletionModel). It holds no execution
//! logic; the [`Runner`](super::Runner) drives it.
//!
//! # Example
//!
//! ```rust,ignore
//! use tutor::prelude::*;
//!
//! let agent = Agent::new("Math Teacher")
//!     .instructions("You are a math tutor")
//!     .model(ChatCompletionsModel::new("llama-3.3-70b-versatile", client).shared());
//!
//! let result = agent.run_sync("2+2=", RunConfig::default())?;
//! ```

use std::fmt;

use futures::future::BoxFuture;

use crate::error::Result;
use crate::model::SharedCompletionModel;

use super::result::{RunConfig, RunResult};
use super::runner::Runner;

/// A pure configuration struct defining an AI agent.
///
/// - **`name`**: identifies the agent in logs and hooks
/// - **`instructions`**: system prompt sent ahead of every input
/// - **`model`**: the completion model this agent talks to
#[derive(Clone)]
pub struct Agent {
    /// Name identifying this agent.
    pub(crate) name: String,

    /// System-level instructions (prompt) for the agent.
    pub(crate) instructions: String,

    /// The completion model this agent uses.
    pub(crate) model: Option<SharedCompletionModel>,
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("instructions", &self.instructions)
            .field("model", &self.model_id())
            .finish()
    }
}

impl Agent {
    /// Create an agent with the given name, no instructions and no model.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: String::new(),
            model: None,
        }
    }

    /// Set the system instructions.
    #[must_use]
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Bind the completion model.
    #[must_use]
    pub fn model(mut self, model: SharedCompletionModel) -> Self {
        self.model = Some(model);
        self
    }

    /// The agent's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The agent's instructions, empty if none were set.
    #[must_use]
    pub fn get_instructions(&self) -> &str {
        &self.instructions
    }

    /// The bound model's identifier, if a model is configured.
    #[must_use]
    pub fn model_id(&self) -> Option<&str> {
        self.model.as_deref().map(|m| m.model_id())
    }

    /// Whether a model has been bound.
    #[must_use]
    pub const fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Run this agent once; see [`Runner::run`].
    pub fn run<'a>(
        &'a self,
        input: impl Into<String>,
        config: RunConfig,
    ) -> BoxFuture<'a, Result<RunResult>> {
        Runner::run(self, input, config)
    }

    /// Run this agent once, blocking; see [`Runner::run_sync`].
    ///
    /// # Errors
    ///
    /// See [`Runner::run_sync`].
    pub fn run_sync(&self, input: impl Into<String>, config: RunConfig) -> Result<RunResult> {
        Runner::run_sync(self, input, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::llms::MockProvider;
    use crate::model::ChatCompletionsModel;

    #[test]
    fn new_has_no_model() {
        let agent = Agent::new("Math Teacher");
        assert_eq!(agent.name(), "Math Teacher");
        assert_eq!(agent.get_instructions(), "");
        assert!(!agent.has_model());
        assert_eq!(agent.model_id(), None);
    }

    #[test]
    fn builder_sets_fields() {
        let model = ChatCompletionsModel::new(
            "llama-3.3-70b-versatile",
            Arc::new(MockProvider::new(Vec::new())),
        );
        let agent = Agent::new("Math Teacher")
            .instructions("You are a math tutor")
            .model(model.shared());

        assert_eq!(agent.get_instructions(), "You are a math tutor");
        assert_eq!(agent.model_id(), Some("llama-3.3-70b-versatile"));

        let debug = format!("{agent:?}");
        assert!(debug.contains("Math Teacher"));
        assert!(debug.contains("llama-3.3-70b-versatile"));
    }
}
