//! Tally CLI - page view counter.
//!
//! Fetches the current view count from the configured counter endpoint and
//! writes it to the terminal. Fetch and display failures are logged, not
//! surfaced as process failures.

mod error;
mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tally_config::{CliSettings, Config};
use tally_counter::{CounterClient, ViewCountUpdater};
use tally_display::TermDisplay;

use error::CliError;
use output::Output;

/// Tally - page view counter.
#[derive(Parser)]
#[command(name = "tally", version, about)]
struct Cli {
    /// Counter endpoint URL (overrides config).
    #[arg(short, long, env = "TALLY_ENDPOINT")]
    endpoint: Option<String>,

    /// HTTP timeout in seconds (overrides config).
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Path to configuration file (default: auto-discover tally.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(cli, &output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Load configuration and refresh the display once.
///
/// Only setup failures surface here. The update itself reports its failures
/// through tracing and always completes.
fn run(cli: Cli, output: &Output) -> Result<(), CliError> {
    let cli_settings = CliSettings {
        endpoint: cli.endpoint,
        timeout_secs: cli.timeout,
    };
    let config = Config::load(cli.config.as_deref(), Some(&cli_settings))?;
    let endpoint = config.require_endpoint()?;

    output.info(&format!("Fetching view count from {endpoint}"));

    let client = CounterClient::with_timeout(endpoint, config.counter.timeout());
    let display = TermDisplay::new();

    ViewCountUpdater::new(&client, &display).update();

    Ok(())
}
