//! Agent with tracing example using Groq.
//!
//! Wires up `tracing-subscriber` so the `agent` span and the
//! [`LoggingRunHooks`] events are printed to stderr.
//!
//! ```bash
//! export GROQ_API_KEY=gsk_...
//! cargo run --example agent_groq_tracing
//! ```

#![allow(clippy::print_stdout)]

use std::sync::Arc;
use tutor::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    load_dotenv(None)?;

    let client: SharedChatProvider =
        Arc::new(OpenAI::new(OpenAIConfig::from_credentials(&Credentials::from_env()))?);

    let agent = Agent::new("Math Teacher")
        .instructions("You are a math tutor")
        .model(ChatCompletionsModel::new("llama-3.3-70b-versatile", client).shared());

    let config = RunConfig::new().hooks(Arc::new(LoggingRunHooks::new()));
    let result = agent.run("What is 12 squared?", config).await?;

    println!("{}", result.final_output);
    println!("{}", result.usage);

    Ok(())
}
