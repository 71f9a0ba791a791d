//! Valet platform adapters.
//!
//! The command dispatcher never talks to a platform service directly; it
//! goes through the capability traits defined in [`traits`]:
//!
//! - **[`traits::NotificationService`]** -- one-shot alert scheduling
//!   behind a permission gate.
//! - **[`traits::ReminderStore`]** / **[`traits::CalendarStore`]** --
//!   reminder and calendar persistence behind access gates.
//! - **[`traits::UriOpener`]** -- fire-and-forget URI opening.
//! - **[`traits::Clock`]** -- the wall clock, injected so tests can pin
//!   "now".
//!
//! Local implementations back each trait with an in-memory registry (or
//! the host system, for the URI opener and clock). Tests substitute
//! deterministic stubs.

pub mod calendar;
pub mod clock;
pub mod error;
pub mod notification;
pub mod opener;
pub mod reminders;
pub mod traits;

// Re-export the most commonly used types at the crate root for convenience.
pub use calendar::{CalendarEvent, LocalCalendarStore};
pub use clock::SystemClock;
pub use error::{AdapterError, Result};
pub use notification::{LocalNotificationService, ScheduledAlert};
pub use opener::SystemUriOpener;
pub use reminders::{LocalReminderStore, SavedReminder};
pub use traits::{CalendarStore, Clock, NotificationService, ReminderStore, UriOpener};
