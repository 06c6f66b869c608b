//! Agent module: a named, instructed agent and the runner that drives it.
//!
//! - **[`Agent`]** is a pure data holder: name, instructions and a bound
//!   [`CompletionModel`](crate::model::CompletionModel).
//! - **[`Runner`]** is a stateless execution engine that performs one
//!   chat-completion round per run.
//! - **[`RunConfig`]** carries per-run options such as the tracing toggle.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tutor::agent::{Agent, RunConfig, Runner};
//!
//! let agent = Agent::new("Math Teacher")
//!     .instructions("You are a math tutor")
//!     .model(model);
//!
//! let result = Runner::run_sync(&agent, "2+2=", RunConfig::default().tracing_disabled(true))?;
//! println!("{}", result.final_output);
//! ```

mod config;
mod hook;
pub mod result;
mod runner;

pub use config::Agent;
pub use result::{RunConfig, RunResult};
pub use runner::Runner;
