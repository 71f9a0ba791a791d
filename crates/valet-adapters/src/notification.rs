//! Local notification service -- in-memory one-shot alert registry.
//!
//! Stands in for the host platform's notification center. Alerts are
//! recorded in a `Mutex`-guarded registry rather than delivered; the
//! permission gate is a constructor flag so the denial path can be
//! exercised end-to-end.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AdapterError, Result};
use crate::traits::NotificationService;

/// Title used for every scheduled alarm alert.
const ALERT_TITLE: &str = "Alarm";
/// Body used for every scheduled alarm alert.
const ALERT_BODY: &str = "Your alarm is ringing!";

/// A one-shot alert waiting to fire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledAlert {
    /// Unique request identifier (UUID v7).
    pub id: String,
    /// Alert title.
    pub title: String,
    /// Alert body text.
    pub body: String,
    /// Local date/time components the alert fires at.
    pub fire_at: NaiveDateTime,
}

/// Notification service backed by an in-memory registry.
pub struct LocalNotificationService {
    /// Whether the (simulated) permission prompt is answered with a grant.
    permission_granted: bool,
    /// Alerts scheduled so far, in scheduling order.
    scheduled: Mutex<Vec<ScheduledAlert>>,
}

impl LocalNotificationService {
    /// Create a service whose permission prompt resolves to
    /// `permission_granted`.
    pub fn new(permission_granted: bool) -> Self {
        Self {
            permission_granted,
            scheduled: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every alert scheduled so far.
    pub fn scheduled(&self) -> Vec<ScheduledAlert> {
        self.scheduled
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl NotificationService for LocalNotificationService {
    async fn request_permission(&self) -> bool {
        debug!(granted = self.permission_granted, "notification permission requested");
        self.permission_granted
    }

    async fn schedule_one_shot(&self, at: NaiveDateTime) -> Result<()> {
        let alert = ScheduledAlert {
            id: Uuid::now_v7().to_string(),
            title: ALERT_TITLE.to_string(),
            body: ALERT_BODY.to_string(),
            fire_at: at,
        };

        debug!(id = %alert.id, fire_at = %at, "one-shot alert scheduled");

        let mut scheduled = self.scheduled.lock().map_err(|e| {
            AdapterError::Internal(format!("failed to acquire lock on alert registry: {e}"))
        })?;
        scheduled.push(alert);

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn schedules_alert_with_fixed_content() {
        let service = LocalNotificationService::new(true);
        assert!(service.request_permission().await);

        service.schedule_one_shot(at(22, 0)).await.unwrap();

        let alerts = service.scheduled();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title, "Alarm");
        assert_eq!(alerts[0].body, "Your alarm is ringing!");
        assert_eq!(alerts[0].fire_at, at(22, 0));
    }

    #[tokio::test]
    async fn denied_permission_is_reported() {
        let service = LocalNotificationService::new(false);
        assert!(!service.request_permission().await);
    }

    #[tokio::test]
    async fn alerts_keep_scheduling_order() {
        let service = LocalNotificationService::new(true);
        service.schedule_one_shot(at(8, 0)).await.unwrap();
        service.schedule_one_shot(at(7, 0)).await.unwrap();

        let alerts = service.scheduled();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].fire_at, at(8, 0));
        assert_eq!(alerts[1].fire_at, at(7, 0));
        assert_ne!(alerts[0].id, alerts[1].id);
    }
}
