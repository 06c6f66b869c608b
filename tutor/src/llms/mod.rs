//! LLM backend implementations.
//!
//! # Available Backends
//!
//! - [`openai`] - any OpenAI-compatible Chat Completions endpoint (OpenAI, Groq, vLLM, ...)
//! - [`mock`] - canned responses that record every request, for tests

pub mod mock;
pub mod openai;

pub use mock::MockProvider;
pub use openai::{OpenAI, OpenAIConfig};
