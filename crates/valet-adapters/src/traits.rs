//! Collaborator capability traits.
//!
//! Every platform service the dispatcher touches (notifications, reminder
//! store, calendar store, URI opening, the wall clock) sits behind one of
//! these traits. The dispatcher receives trait objects at construction,
//! which is what makes the whole command pipeline testable with
//! deterministic stubs.
//!
//! Permission/access prompts are modeled as plain booleans: `false` means
//! the capability was denied and the caller must not attempt the mutating
//! operation.

use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDateTime};

use crate::error::Result;

/// One-shot alert scheduling behind a permission gate.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Ask the platform for permission to post notifications.
    async fn request_permission(&self) -> bool;

    /// Schedule a single, non-repeating alert at the exact local
    /// date/time components of `at`.
    async fn schedule_one_shot(&self, at: NaiveDateTime) -> Result<()>;
}

/// Reminder persistence behind an access gate.
#[async_trait]
pub trait ReminderStore: Send + Sync {
    /// Ask the platform for reminder access.
    async fn request_access(&self) -> bool;

    /// Save a reminder with the given title.
    async fn create(&self, title: &str) -> Result<()>;
}

/// Calendar persistence behind an access gate.
#[async_trait]
pub trait CalendarStore: Send + Sync {
    /// Ask the platform for calendar access.
    async fn request_access(&self) -> bool;

    /// Save an event spanning `start..end`.
    async fn create_event(
        &self,
        title: &str,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<()>;
}

/// Fire-and-forget URI opening (mail drafts, playlists).
///
/// Open failures are deliberately not surfaced: callers reply to the user
/// before the handoff completes and never observe the outcome.
#[async_trait]
pub trait UriOpener: Send + Sync {
    async fn open(&self, uri: &str);
}

/// The wall clock, injected so tests can pin "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}
