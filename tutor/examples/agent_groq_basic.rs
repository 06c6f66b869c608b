//! Basic agent example using Groq.
//!
//! Builds the math tutor from the environment and runs it once,
//! synchronously, with tracing disabled.
//!
//! ```bash
//! export GROQ_API_KEY=gsk_...
//! export GROQ_BASE_URL=https://api.groq.com/openai/v1
//! cargo run --example agent_groq_basic
//! ```

#![allow(clippy::print_stdout)]

use tutor::prelude::*;

fn main() -> Result<()> {
    load_dotenv(None)?;

    let settings = Settings::new(Credentials::from_env());
    let agent = settings.build_agent()?;

    let result = Runner::run_sync(&agent, "2+2=", RunConfig::default().tracing_disabled(true))?;
    println!("{}", result.final_output);

    Ok(())
}
