//! Startup configuration.
//!
//! Environment lookups happen here and nowhere else. The binary loads an
//! optional `.env` file, reads [`Credentials`] once, folds them into a
//! [`Settings`] value and passes that down by value.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::agent::{Agent, RunConfig};
use crate::callback::LoggingRunHooks;
use crate::error::{Error, Result};
use crate::llms::{OpenAI, OpenAIConfig};
use crate::model::ChatCompletionsModel;

/// Environment variable holding the API key.
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Environment variable holding the API base URL.
pub const GROQ_BASE_URL_VAR: &str = "GROQ_BASE_URL";

/// API credentials for the inference endpoint.
///
/// Either field may be empty; validation happens when the client is built.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Secret bearer token.
    pub api_key: String,
    /// Root URL of the OpenAI-compatible API.
    pub base_url: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("Credentials")
            .field("api_key", &key)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Credentials {
    /// Create credentials from explicit values.
    #[must_use]
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Read `GROQ_API_KEY` and `GROQ_BASE_URL` from the process environment.
    ///
    /// An unset (or non-unicode) variable yields an empty string.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary lookup function.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: lookup(GROQ_API_KEY_VAR).unwrap_or_default(),
            base_url: lookup(GROQ_BASE_URL_VAR).unwrap_or_default(),
        }
    }

    /// Whether an API key is present.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Load `KEY=value` lines from a settings file into the environment.
///
/// With `None`, looks for `.env` in the working directory and its parents;
/// if none exists, returns `Ok(None)`. With `Some(path)`, the file must be
/// readable. Variables already set in the environment are never overwritten.
///
/// # Errors
///
/// Returns [`Error::Config`] if an explicit file cannot be read, or if any
/// file found fails to parse.
pub fn load_dotenv(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| {
                Error::config(format!("failed to load {}: {e}", path.display()))
            })?;
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(found) => Ok(Some(found)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(Error::config(format!("failed to load .env: {e}"))),
        },
    }
}

/// Everything needed to build and run the agent once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Endpoint credentials.
    pub credentials: Credentials,
    /// Model identifier sent with every request.
    pub model: String,
    /// Agent name.
    pub agent_name: String,
    /// System instructions.
    pub instructions: String,
    /// User input for the single run.
    pub input: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    /// Whether run telemetry is suppressed.
    pub tracing_disabled: bool,
}

impl Settings {
    /// Default model identifier.
    pub const DEFAULT_MODEL: &'static str = "llama-3.3-70b-versatile";
    /// Default agent name.
    pub const DEFAULT_AGENT_NAME: &'static str = "Math Teacher";
    /// Default instructions.
    pub const DEFAULT_INSTRUCTIONS: &'static str = "You are a math tutor";
    /// Default input.
    pub const DEFAULT_INPUT: &'static str = "2+2=";

    /// Default settings around the given credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Self::default()
        }
    }

    /// Client configuration derived from these settings.
    #[must_use]
    pub fn openai_config(&self) -> OpenAIConfig {
        OpenAIConfig::from_credentials(&self.credentials)
            .with_model(self.model.clone())
            .with_timeout(self.timeout_secs)
    }

    /// Build the client, model adapter and agent.
    ///
    /// # Errors
    ///
    /// Fails with an `Auth` [`LlmError`](crate::LlmError) if the API key is
    /// empty, or if the HTTP client cannot be constructed.
    pub fn build_agent(&self) -> Result<Agent> {
        let client = OpenAI::new(self.openai_config())?;
        let model = ChatCompletionsModel::new(self.model.clone(), Arc::new(client));
        Ok(Agent::new(self.agent_name.clone())
            .instructions(self.instructions.clone())
            .model(model.shared()))
    }

    /// Per-run configuration. Logging hooks are attached when tracing is on.
    #[must_use]
    pub fn run_config(&self) -> RunConfig {
        let config = RunConfig::new().tracing_disabled(self.tracing_disabled);
        if self.tracing_disabled {
            config
        } else {
            config.hooks(Arc::new(LoggingRunHooks::new()))
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            model: Self::DEFAULT_MODEL.to_owned(),
            agent_name: Self::DEFAULT_AGENT_NAME.to_owned(),
            instructions: Self::DEFAULT_INSTRUCTIONS.to_owned(),
            input: Self::DEFAULT_INPUT.to_owned(),
            timeout_secs: OpenAIConfig::DEFAULT_TIMEOUT_SECS,
            tracing_disabled: true,
        }
    }
}
