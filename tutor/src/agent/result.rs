//! Run configuration and result types.

use std::fmt;

use crate::callback::SharedRunHooks;
use crate::chat::StopReason;
use crate::usage::Usage;

/// Per-run configuration.
///
/// Tracing is a property of the run, not of the process: two runs in the
/// same process may differ.
#[derive(Clone, Default)]
pub struct RunConfig {
    /// When `true`, the run opens no span, logs no lifecycle events and
    /// calls no hooks.
    pub tracing_disabled: bool,

    /// Telemetry sink for lifecycle events.
    pub hooks: Option<SharedRunHooks>,
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("tracing_disabled", &self.tracing_disabled)
            .field("hooks", &self.hooks.as_ref().map(|_| "<hooks>"))
            .finish()
    }
}

impl RunConfig {
    /// Create a config with tracing enabled and no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable tracing for this run.
    #[must_use]
    pub const fn tracing_disabled(mut self, disabled: bool) -> Self {
        self.tracing_disabled = disabled;
        self
    }

    /// Set the telemetry sink.
    #[must_use]
    pub fn hooks(mut self, hooks: SharedRunHooks) -> Self {
        self.hooks = Some(hooks);
        self
    }
}

/// The outcome of one agent run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// The model's textual reply; empty if it returned no text.
    pub final_output: String,
    /// Name of the agent that produced the output.
    pub agent_name: String,
    /// Model identifier the request was sent with.
    pub model: String,
    /// Token usage reported by the provider.
    pub usage: Usage,
    /// Provider-assigned completion ID, if any.
    pub response_id: Option<String>,
    /// Why the model stopped generating.
    pub stop_reason: StopReason,
}

impl RunResult {
    /// The final output as a string slice.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.final_output
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.final_output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::callback::NoopRunHooks;

    #[test]
    fn default_config_traces() {
        let config = RunConfig::new();
        assert!(!config.tracing_disabled);
        assert!(config.hooks.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let config = RunConfig::new()
            .tracing_disabled(true)
            .hooks(Arc::new(NoopRunHooks));
        assert!(config.tracing_disabled);
        assert!(format!("{config:?}").contains("<hooks>"));
    }

    #[test]
    fn result_displays_final_output() {
        let result = RunResult {
            final_output: "2 + 2 = 4".to_owned(),
            agent_name: "Math Teacher".to_owned(),
            model: "llama-3.3-70b-versatile".to_owned(),
            usage: Usage::zero(),
            response_id: None,
            stop_reason: StopReason::Stop,
        };
        assert_eq!(result.to_string(), "2 + 2 = 4");
        assert_eq!(result.text(), "2 + 2 = 4");
    }
}
