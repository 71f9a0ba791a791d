//! Subcommand: `valet run` -- interactive chat REPL.
//!
//! Wires the local adapters into the command executor, opens a chat
//! controller, and feeds it stdin lines. Each submitted command yields
//! exactly one printed reply.

use std::io::{self, Write as _};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use valet_adapters::{
    LocalCalendarStore, LocalNotificationService, LocalReminderStore, SystemClock,
    SystemUriOpener,
};
use valet_chat::ChatController;
use valet_intent::CommandExecutor;
use valet_kernel::IntentClassifier;

use crate::config::{ValetConfig, load_config};

/// Run the interactive REPL.
pub async fn cmd_run() -> Result<()> {
    info!("starting valet");

    let config = load_config();
    let controller = build_controller(&config)?;
    info!(
        notifications = config.allow_notifications,
        reminders = config.allow_reminders,
        calendar = config.allow_calendar,
        "collaborators wired"
    );

    // Startup banner.
    println!();
    println!("  Valet v{}", env!("CARGO_PKG_VERSION"));
    println!("  Commands: alarms, email drafts, reminders, tasks, music,");
    println!("            weather, tip, time, date.");
    println!("  Type a command, or 'quit' to exit.");
    println!();
    if let Some(welcome) = controller.transcript().first() {
        println!("  {}", welcome.text);
        println!();
    }

    // REPL loop.
    let stdin = io::stdin();
    let mut line_buf = String::new();

    loop {
        print!("> ");
        io::stdout().flush().ok();

        line_buf.clear();
        match stdin.read_line(&mut line_buf) {
            Ok(0) => {
                println!();
                info!("EOF received, exiting");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("  Error reading input: {e}");
                continue;
            }
        }

        let trimmed = line_buf.trim();

        if trimmed.is_empty() {
            continue;
        }

        if trimmed == "quit" || trimmed == "exit" {
            info!("user requested exit");
            break;
        }

        if let Some(reply) = controller.send(trimmed).await {
            println!("  {reply}");
            println!();
        }
    }

    info!("shutting down");
    Ok(())
}

/// Build the chat controller over the locally-backed collaborators.
fn build_controller(config: &ValetConfig) -> Result<ChatController> {
    let classifier = IntentClassifier::new().context("failed to build intent classifier")?;

    let executor = CommandExecutor::new(
        classifier,
        Arc::new(LocalNotificationService::new(config.allow_notifications)),
        Arc::new(LocalReminderStore::new(config.allow_reminders)),
        Arc::new(LocalCalendarStore::new(config.allow_calendar)),
        Arc::new(SystemUriOpener::new()),
        Arc::new(SystemClock::new()),
    );

    Ok(ChatController::with_welcome(
        Arc::new(executor),
        &config.welcome_message,
    ))
}
