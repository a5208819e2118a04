//! Terminal client entry point.
mod app;
mod commands;
mod config;
mod input;

use anyhow::Result;
use clap::Parser;
use commands::{Lint, Play};
use config::CliConfig;
use tracing_subscriber::EnvFilter;

/// Show do Milhão in the terminal
#[derive(Parser)]
#[command(name = "quiz")]
#[command(about = "Multiple-choice quiz with lifelines and a prize ladder", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser)]
enum Command {
    /// Play a game (default)
    Play(Play),

    /// Check a question catalog for structural problems
    Lint(Lint),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    setup_logging(&config);

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Play(cmd)) => cmd.execute(&config),
        Some(Command::Lint(cmd)) => cmd.execute(&config),
        None => Play::default().execute(&config),
    }
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn setup_logging(config: &CliConfig) {
    let directive = config.log_filter.as_deref().unwrap_or("warn");
    let env_filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(filter = directive, "Logging initialized");
}
