//! Run telemetry hooks.
//!
//! A run reports its lifecycle to a [`RunHooks`] sink:
//!
//! 1. **`on_agent_start`**: agent begins execution
//! 2. **`on_llm_start`** → *LLM call* → **`on_llm_end`**
//! 3. **`on_agent_end`**: final output produced, or **`on_error`** on failure
//!
//! Hooks only fire for runs whose [`RunConfig`](crate::agent::RunConfig)
//! leaves tracing enabled.

mod context;
mod hooks;
mod logging;
mod noop;

pub use context::RunContext;
pub use hooks::{RunHooks, SharedRunHooks};
pub use logging::{LogLevel, LoggingRunHooks};
pub use noop::NoopRunHooks;
