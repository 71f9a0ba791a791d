//! Alarm scheduling on top of the notification collaborator.
//!
//! Combines a parsed clock time with "today" from the injected [`Clock`],
//! then asks the [`NotificationService`] for a one-shot alert at that
//! timestamp. Every outcome -- parse failure, permission denial,
//! scheduling error, success -- resolves to a [`CommandResult`] whose
//! message is ready to show the user.

use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use valet_adapters::{Clock, NotificationService};
use valet_kernel::parse_time;

/// The uniform outcome shape of an asynchronous action.
///
/// `message` is always user-facing prose, never a machine code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    pub success: bool,
    pub message: String,
}

impl CommandResult {
    /// A successful outcome carrying `message`.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed outcome carrying `message`.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Schedules one-shot alarms for "today at hh:mm".
pub struct AlarmScheduler {
    notifications: Arc<dyn NotificationService>,
    clock: Arc<dyn Clock>,
}

impl AlarmScheduler {
    pub fn new(notifications: Arc<dyn NotificationService>, clock: Arc<dyn Clock>) -> Self {
        Self {
            notifications,
            clock,
        }
    }

    /// Parse a flexible time string and schedule an alarm for that time
    /// today.
    ///
    /// No timezone math happens here: the parsed hour/minute is combined
    /// with today's local date as-is, even if that moment has already
    /// passed.
    pub async fn set_alarm(&self, time_text: &str) -> CommandResult {
        let Some(parsed) = parse_time(time_text) else {
            return CommandResult::failed(
                "Time format invalid. Please specify a valid time (e.g., '10pm', '07:00').",
            );
        };

        let today = self.clock.now().date_naive();
        let Some(fire_at) = today.and_hms_opt(parsed.hour, parsed.minute, 0) else {
            return CommandResult::failed("Could not construct the scheduled date.");
        };

        self.schedule(fire_at).await
    }

    /// Permission gate, then the one-shot alert request.
    async fn schedule(&self, fire_at: NaiveDateTime) -> CommandResult {
        if !self.notifications.request_permission().await {
            return CommandResult::failed("Notification permission was not granted.");
        }

        match self.notifications.schedule_one_shot(fire_at).await {
            Ok(()) => {
                debug!(fire_at = %fire_at, "alarm scheduled");
                CommandResult::ok(format!("Alarm set for {}.", fire_at.format("%I:%M %p")))
            }
            Err(e) => {
                warn!(error = %e, "alarm scheduling failed");
                CommandResult::failed(format!("Failed to set alarm: {e}"))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
