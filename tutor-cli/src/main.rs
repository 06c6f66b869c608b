//! Tutor CLI - run the math tutor agent once, or serve it over HTTP.
//!
//! Loads an optional `.env` file, reads `GROQ_API_KEY` / `GROQ_BASE_URL`,
//! sends the input to the configured model and prints the reply to stdout.
//! With `--serve <ADDR>` it answers `POST /ask` instead.

#![allow(clippy::print_stdout)] // CLI program intentionally uses stdout

mod serve;

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tutor::prelude::*;

/// Ask a hosted model a question through a named agent
#[derive(Debug, Parser)]
#[command(name = "tutor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input sent to the agent
    #[arg(default_value = Settings::DEFAULT_INPUT)]
    input: String,

    /// Model identifier
    #[arg(short, long, env = "TUTOR_MODEL", default_value = Settings::DEFAULT_MODEL)]
    model: String,

    /// Agent name
    #[arg(short, long, default_value = Settings::DEFAULT_AGENT_NAME)]
    name: String,

    /// System instructions for the agent
    #[arg(short, long, default_value = Settings::DEFAULT_INSTRUCTIONS)]
    instructions: String,

    /// Settings file to load before reading credentials (default: .env)
    #[arg(short, long)]
    env_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = 120)]
    timeout: u64,

    /// Emit run spans, lifecycle logs and hook events
    #[arg(long)]
    trace: bool,

    /// Serve `POST /ask` on this address instead of running once
    #[arg(long, value_name = "ADDR")]
    serve: Option<SocketAddr>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(&self, credentials: Credentials) -> Settings {
        Settings {
            credentials,
            model: self.model.clone(),
            agent_name: self.name.clone(),
            instructions: self.instructions.clone(),
            input: self.input.clone(),
            timeout_secs: self.timeout,
            tracing_disabled: !self.trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let outcome = match cli.serve {
        Some(addr) => run_server(&cli, addr),
        None => run_once(&cli).map(|result| println!("{}", result.final_output)),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Load the settings file and environment into [`Settings`].
fn load_settings(cli: &Cli) -> Result<Settings> {
    if let Some(path) = load_dotenv(cli.env_file.as_deref())? {
        tracing::debug!(path = %path.display(), "Loaded settings file");
    }

    let settings = cli.settings(Credentials::from_env());
    tracing::debug!(
        model = %settings.model,
        agent = %settings.agent_name,
        base_url = %settings.credentials.base_url,
        "Loaded settings"
    );
    Ok(settings)
}

/// Build the agent and run it once.
fn run_once(cli: &Cli) -> Result<RunResult> {
    let settings = load_settings(cli)?;
    let agent = settings.build_agent()?;
    Runner::run_sync(&agent, settings.input.clone(), settings.run_config())
}

/// Build the agent and serve it until ctrl-c.
fn run_server(cli: &Cli, addr: SocketAddr) -> Result<()> {
    let settings = load_settings(cli)?;
    let agent = settings.build_agent()?;
    let app = serve::router(agent, settings.run_config());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("listening on {addr}");
        serve::serve(listener, app).await
    })
}

/// Initialize logging with the given verbosity level.
///
/// Logs go to stderr so stdout carries only the final output.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "tutor={level},{}",
            if verbosity >= 2 { "debug" } else { "warn" }
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}
