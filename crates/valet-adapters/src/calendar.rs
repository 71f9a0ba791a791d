//! Local calendar store -- in-memory event registry behind an access gate.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AdapterError, Result};
use crate::traits::CalendarStore;

/// A saved calendar event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Unique identifier (UUID v7).
    pub id: String,
    /// Event title.
    pub title: String,
    /// Event start.
    pub start: DateTime<Local>,
    /// Event end.
    pub end: DateTime<Local>,
}

/// Calendar store backed by an in-memory registry.
pub struct LocalCalendarStore {
    /// Whether the (simulated) access prompt is answered with a grant.
    access_granted: bool,
    /// Events saved so far, in creation order.
    saved: Mutex<Vec<CalendarEvent>>,
}

impl LocalCalendarStore {
    /// Create a store whose access prompt resolves to `access_granted`.
    pub fn new(access_granted: bool) -> Self {
        Self {
            access_granted,
            saved: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every event saved so far.
    pub fn saved(&self) -> Vec<CalendarEvent> {
        self.saved.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl CalendarStore for LocalCalendarStore {
    async fn request_access(&self) -> bool {
        debug!(granted = self.access_granted, "calendar access requested");
        self.access_granted
    }

    async fn create_event(
        &self,
        title: &str,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<()> {
        let event = CalendarEvent {
            id: Uuid::now_v7().to_string(),
            title: title.to_string(),
            start,
            end,
        };

        debug!(id = %event.id, title, start = %start, end = %end, "calendar event saved");

        let mut saved = self.saved.lock().map_err(|e| {
            AdapterError::Internal(format!("failed to acquire lock on event registry: {e}"))
        })?;
        saved.push(event);

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
