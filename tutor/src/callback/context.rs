//! Context shared by every hook invocation in a run.

use crate::usage::Usage;

/// Context passed to all hook methods during an agent run.
///
/// Hooks receive `&RunContext`: they observe the run, they do not steer it.
///
/// # Example
///
/// ```rust
/// use tutor::callback::RunContext;
///
/// let ctx = RunContext::new().with_agent_name("Math Teacher");
/// assert_eq!(ctx.agent_name(), Some("Math Teacher"));
/// assert_eq!(ctx.step(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Cumulative token usage across all LLM calls in this run.
    usage: Usage,
    /// Current step number (1 once the model call begins, 0 before).
    step: usize,
    /// Name of the running agent.
    agent_name: Option<String>,
}

impl RunContext {
    /// Create a new empty run context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the agent name.
    #[must_use]
    pub fn with_agent_name(mut self, name: impl Into<String>) -> Self {
        self.agent_name = Some(name.into());
        self
    }

    /// Get the cumulative token usage.
    #[must_use]
    pub const fn usage(&self) -> &Usage {
        &self.usage
    }

    /// Get the current step number.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Get the agent name, if set.
    #[must_use]
    pub fn agent_name(&self) -> Option<&str> {
        self.agent_name.as_deref()
    }

    /// Update the cumulative token usage by adding new usage.
    pub fn add_usage(&mut self, usage: Usage) {
        self.usage += usage;
    }

    /// Advance to the next step.
    pub const fn advance_step(&mut self) {
        self.step += 1;
    }
}
