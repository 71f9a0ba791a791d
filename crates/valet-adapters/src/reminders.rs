//! Local reminder store -- in-memory registry behind an access gate.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AdapterError, Result};
use crate::traits::ReminderStore;

/// A saved reminder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedReminder {
    /// Unique identifier (UUID v7).
    pub id: String,
    /// Reminder title.
    pub title: String,
}

/// Reminder store backed by an in-memory registry.
pub struct LocalReminderStore {
    /// Whether the (simulated) access prompt is answered with a grant.
    access_granted: bool,
    /// Reminders saved so far, in creation order.
    saved: Mutex<Vec<SavedReminder>>,
}

impl LocalReminderStore {
    /// Create a store whose access prompt resolves to `access_granted`.
    pub fn new(access_granted: bool) -> Self {
        Self {
            access_granted,
            saved: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every reminder saved so far.
    pub fn saved(&self) -> Vec<SavedReminder> {
        self.saved.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl ReminderStore for LocalReminderStore {
    async fn request_access(&self) -> bool {
        debug!(granted = self.access_granted, "reminder access requested");
        self.access_granted
    }

    async fn create(&self, title: &str) -> Result<()> {
        let reminder = SavedReminder {
            id: Uuid::now_v7().to_string(),
            title: title.to_string(),
        };

        debug!(id = %reminder.id, title, "reminder saved");

        let mut saved = self.saved.lock().map_err(|e| {
            AdapterError::Internal(format!("failed to acquire lock on reminder registry: {e}"))
        })?;
        saved.push(reminder);

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_reminders_in_order() {
        let store = LocalReminderStore::new(true);
        assert!(store.request_access().await);

        store.create("Buy milk").await.unwrap();
        store.create("Water plants").await.unwrap();

        let saved = store.saved();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].title, "Buy milk");
        assert_eq!(saved[1].title, "Water plants");
    }

    #[tokio::test]
    async fn denied_access_is_reported() {
        let store = LocalReminderStore::new(false);
        assert!(!store.request_access().await);
    }
}
