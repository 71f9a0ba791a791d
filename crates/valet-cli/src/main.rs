//! CLI entry point for Valet.
//!
//! This binary provides the `valet` command with subcommands for running
//! the interactive chat REPL and checking the effective configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod config;
mod repl;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Valet -- a voice/text command assistant.
#[derive(Parser)]
#[command(
    name = "valet",
    version,
    about = "Valet -- command assistant",
    long_about = "A command assistant that turns free-text requests into alarms, \
                  email drafts, reminders, scheduled tasks, and quick answers."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive chat REPL.
    Run,

    /// Show the effective configuration.
    Status,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            init_tracing("info");
            repl::cmd_run().await
        }
        Commands::Status => {
            init_tracing("warn");
            cmd_status()
        }
    }
}

// ---------------------------------------------------------------------------
// Subcommand: status
// ---------------------------------------------------------------------------

fn cmd_status() -> Result<()> {
    let config = config::load_config();

    println!();
    println!("  Valet Status");
    println!("  ============");
    println!();

    let path = std::path::Path::new(config::CONFIG_PATH);
    if path.exists() {
        println!("  Config:          OK ({})", path.display());
    } else {
        println!("  Config:          MISSING (using defaults)");
    }

    println!("  Notifications:   {}", grant_label(config.allow_notifications));
    println!("  Reminders:       {}", grant_label(config.allow_reminders));
    println!("  Calendar:        {}", grant_label(config.allow_calendar));
    println!();

    Ok(())
}

fn grant_label(granted: bool) -> &'static str {
    if granted { "GRANTED" } else { "DENIED" }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Initialize the tracing subscriber with the given default log level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
