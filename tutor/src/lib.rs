//! Tutor - a minimal agent runner for OpenAI-compatible chat backends
//!
//! This crate wires a named agent with fixed instructions to a
//! chat-completions endpoint (Groq by default), runs it once on an input and
//! returns the model's reply.

pub mod agent;
pub mod callback;
pub mod chat;
pub mod config;
pub mod error;
pub mod llms;
pub mod message;
pub mod model;
pub mod prelude;
pub mod usage;

pub use error::{Error, LlmError, Result};
