//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tutor::prelude::*;
//! ```

pub use crate::agent::{Agent, RunConfig, RunResult, Runner};
pub use crate::callback::{LoggingRunHooks, NoopRunHooks, RunContext, RunHooks, SharedRunHooks};
pub use crate::chat::{
    ChatProvider, ChatRequest, ChatResponse, SharedChatProvider, StopReason,
};
pub use crate::config::{Credentials, Settings, load_dotenv};
pub use crate::error::{Error, LlmError, LlmErrorKind, Result};
pub use crate::llms::{MockProvider, OpenAI, OpenAIConfig};
pub use crate::message::{Message, Role};
pub use crate::model::{ChatCompletionsModel, CompletionModel, SharedCompletionModel};
pub use crate::usage::Usage;
