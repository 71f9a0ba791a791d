//! Append-only conversation transcript.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// One transcript line. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationEntry {
    /// Unique identifier (UUID v7).
    pub id: String,
    /// The entry text.
    pub text: String,
    /// Who authored it.
    pub sender: Sender,
}

/// Ordered, append-only log of conversation entries.
///
/// Appends from any thread serialize through the internal mutex, so
/// writes land whole and in arrival order. There is no API to mutate or
/// remove an entry.
pub struct ConversationLog {
    entries: Mutex<Vec<ConversationEntry>>,
}

impl ConversationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Append an entry and return it.
    pub fn append(&self, sender: Sender, text: impl Into<String>) -> ConversationEntry {
        let entry = ConversationEntry {
            id: Uuid::now_v7().to_string(),
            text: text.into(),
            sender,
        };

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.push(entry.clone());
        entry
    }

    /// Snapshot of the log in append order.
    pub fn entries(&self) -> Vec<ConversationEntry> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of entries appended so far.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_in_order_with_unique_ids() {
        let log = ConversationLog::new();
        assert!(log.is_empty());

        let first = log.append(Sender::User, "hello");
        let second = log.append(Sender::Assistant, "hi there");

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "hello");
        assert_eq!(entries[0].sender, Sender::User);
        assert_eq!(entries[1].text, "hi there");
        assert_eq!(entries[1].sender, Sender::Assistant);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn snapshot_is_detached_from_later_appends() {
        let log = ConversationLog::new();
        log.append(Sender::User, "one");

        let snapshot = log.entries();
        log.append(Sender::User, "two");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }
}
