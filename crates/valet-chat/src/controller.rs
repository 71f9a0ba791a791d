//! Chat controller -- owns the transcript and drives command dispatch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use valet_intent::CommandExecutor;

use crate::transcript::{ConversationEntry, ConversationLog, Sender};

/// Greeting appended as the first transcript entry.
pub const DEFAULT_WELCOME: &str = "Welcome! How can I help you today?";

/// Drives the conversation: one user entry, then exactly one reply entry,
/// per submitted command.
///
/// Multiple commands may be in flight at once; each call appends its own
/// pair, so a command's user entry always precedes its own reply even
/// when replies from different commands interleave.
pub struct ChatController {
    log: Arc<ConversationLog>,
    executor: Arc<CommandExecutor>,
    is_sending: AtomicBool,
}

impl ChatController {
    /// Create a controller with the default welcome greeting.
    pub fn new(executor: Arc<CommandExecutor>) -> Self {
        Self::with_welcome(executor, DEFAULT_WELCOME)
    }

    /// Create a controller whose first transcript entry is `welcome`.
    pub fn with_welcome(executor: Arc<CommandExecutor>, welcome: &str) -> Self {
        let log = Arc::new(ConversationLog::new());
        log.append(Sender::Assistant, welcome);

        Self {
            log,
            executor,
            is_sending: AtomicBool::new(false),
        }
    }

    /// Whether a command is currently awaiting its reply.
    pub fn is_sending(&self) -> bool {
        self.is_sending.load(Ordering::SeqCst)
    }

    /// Snapshot of the transcript in append order.
    pub fn transcript(&self) -> Vec<ConversationEntry> {
        self.log.entries()
    }

    /// Submit one command.
    ///
    /// Whitespace-only input is ignored and appends nothing. Otherwise
    /// the trimmed text is appended as a user entry *before* dispatch
    /// begins, the dispatcher's reply is appended when it resolves, and
    /// the reply text is returned.
    pub async fn send(&self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.is_sending.store(true, Ordering::SeqCst);
        self.log.append(Sender::User, trimmed);
        debug!(command = %trimmed, "command submitted");

        let reply = self.executor.execute(trimmed).await;

        self.log.append(Sender::Assistant, reply.as_str());
        self.is_sending.store(false, Ordering::SeqCst);

        Some(reply)
    }
}
