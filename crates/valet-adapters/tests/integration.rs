//! Integration tests for the valet-adapters crate.
//!
//! These tests exercise the local collaborator implementations end-to-end
//! through their capability traits, the way the dispatch layer consumes
//! them.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};

use valet_adapters::{
    CalendarStore, Clock, LocalCalendarStore, LocalNotificationService, LocalReminderStore,
    NotificationService, ReminderStore, SystemClock,
};

// ═══════════════════════════════════════════════════════════════════════
//  Notification service
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn notification_service_through_trait_object() {
    let service = Arc::new(LocalNotificationService::new(true));
    let as_trait: Arc<dyn NotificationService> = service.clone();

    assert!(as_trait.request_permission().await);

    let fire_at = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(22, 0, 0)
        .unwrap();
    as_trait.schedule_one_shot(fire_at).await.unwrap();

    let alerts = service.scheduled();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].fire_at, fire_at);
}

#[tokio::test]
async fn notification_permission_gate_is_constructor_driven() {
    let denied: Arc<dyn NotificationService> = Arc::new(LocalNotificationService::new(false));
    assert!(!denied.request_permission().await);

    let granted: Arc<dyn NotificationService> = Arc::new(LocalNotificationService::new(true));
    assert!(granted.request_permission().await);
}

// ═══════════════════════════════════════════════════════════════════════
//  Reminder and calendar stores
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn reminder_store_saves_through_trait_object() {
    let store = Arc::new(LocalReminderStore::new(true));
    let as_trait: Arc<dyn ReminderStore> = store.clone();

    assert!(as_trait.request_access().await);
    as_trait.create("Call the dentist").await.unwrap();

    let saved = store.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].title, "Call the dentist");
}

#[tokio::test]
async fn calendar_store_saves_one_hour_event() {
    let store = Arc::new(LocalCalendarStore::new(true));
    let as_trait: Arc<dyn CalendarStore> = store.clone();

    assert!(as_trait.request_access().await);

    let start = Local::now() + Duration::hours(1);
    let end = start + Duration::hours(1);
    as_trait.create_event("Quarterly review", start, end).await.unwrap();

    let saved = store.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].title, "Quarterly review");
    assert_eq!(saved[0].start, start);
    assert_eq!(saved[0].end, end);
}

// ═══════════════════════════════════════════════════════════════════════
//  Clock
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn system_clock_tracks_local_time() {
    let clock = SystemClock::new();
    let before = Local::now();
    let observed = clock.now();
    let after = Local::now();

    assert!(observed >= before);
    assert!(observed <= after);
}
