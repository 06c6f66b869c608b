//! OpenAI-compatible API client.
//!
//! Talks to any endpoint that speaks the Chat Completions wire format.
//! Groq is reached by pointing [`OpenAIConfig::base_url`] at
//! [`OpenAIConfig::GROQ_BASE_URL`].

mod chat;
mod client;
mod config;
mod types;

pub use client::OpenAI;
pub use config::OpenAIConfig;
