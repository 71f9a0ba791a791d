//! The command executor -- classify, extract arguments, dispatch.
//!
//! One call to [`CommandExecutor::execute`] produces exactly one reply
//! string, whichever branch runs and however the collaborators behave.
//! Input-format problems, permission denials, and collaborator failures
//! all surface as specific user-facing messages; nothing is thrown past
//! this layer, and nothing is retried (the user simply reissues the
//! command).

use std::sync::Arc;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use tracing::debug;
use url::Url;

use valet_adapters::{CalendarStore, Clock, NotificationService, ReminderStore, UriOpener};
use valet_kernel::{Intent, IntentClassifier};

use crate::alarm::AlarmScheduler;
use crate::extract;

// ---------------------------------------------------------------------------
// Fixed tables
// ---------------------------------------------------------------------------

/// Mood keyword to playlist URI, checked in order; first hit wins and
/// "happy" is the fallback.
const MOOD_PLAYLISTS: &[(&str, &str)] = &[
    ("happy", "https://open.spotify.com/playlist/37i9dQZF1DXdPec7aLTmlC"),
    ("sad", "https://open.spotify.com/playlist/37i9dQZF1DWVrtsSlLKzro"),
    ("energetic", "https://open.spotify.com/playlist/37i9dQZF1DX0BcQWzuB7ZO"),
    ("calm", "https://open.spotify.com/playlist/37i9dQZF1DX4sWSpwq3LiO"),
];

/// Canned weather reply. There is no forecast collaborator.
const WEATHER_REPLY: &str = "Current weather: Sunny, 75°F with a light breeze.";

/// Characters percent-escaped in mailto query values. Escaping `&`, `+`,
/// and `%` keeps user text from being read as query structure.
const MAILTO_QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'?');

// ---------------------------------------------------------------------------
// CommandExecutor
// ---------------------------------------------------------------------------

/// Dispatches free-text commands against the injected collaborators.
pub struct CommandExecutor {
    classifier: IntentClassifier,
    alarms: AlarmScheduler,
    reminders: Arc<dyn ReminderStore>,
    calendar: Arc<dyn CalendarStore>,
    opener: Arc<dyn UriOpener>,
    clock: Arc<dyn Clock>,
}

impl CommandExecutor {
    pub fn new(
        classifier: IntentClassifier,
        notifications: Arc<dyn NotificationService>,
        reminders: Arc<dyn ReminderStore>,
        calendar: Arc<dyn CalendarStore>,
        opener: Arc<dyn UriOpener>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            classifier,
            alarms: AlarmScheduler::new(notifications, clock.clone()),
            reminders,
            calendar,
            opener,
            clock,
        }
    }

    /// Execute one command and produce its reply.
    ///
    /// Classification runs on a lower-cased copy; argument extraction
    /// slices the original-case input so recipients, titles, and bodies
    /// keep their casing.
    pub async fn execute(&self, command: &str) -> String {
        let intent = self.classifier.classify(command);
        debug!(%intent, "command classified");

        match intent {
            Intent::Alarm => self.run_alarm(command).await,
            Intent::Email => self.run_email(command).await,
            Intent::Reminder => self.run_reminder(command).await,
            Intent::ScheduleTask => self.run_schedule_task(command).await,
            Intent::Music => self.run_music(command).await,
            Intent::Weather => WEATHER_REPLY.to_string(),
            Intent::Tip => self.run_tip(command),
            Intent::Time => format!(
                "The current time is {}.",
                self.clock.now().format("%-I:%M:%S %p")
            ),
            Intent::Date => format!(
                "Today's date is {}.",
                self.clock.now().format("%A, %B %-d, %Y")
            ),
            Intent::Unknown => format!("I did not understand the command: {command}"),
        }
    }

    // -- Intent handlers ----------------------------------------------------

    async fn run_alarm(&self, command: &str) -> String {
        let Some(candidate) = extract::after_marker(command, "for ") else {
            return "Please specify a time for the alarm (e.g., 'set alarm for 10pm').".to_string();
        };

        self.alarms.set_alarm(candidate.trim()).await.message
    }

    async fn run_email(&self, command: &str) -> String {
        let Some(after_to) = extract::after_marker(command, "to ") else {
            return "Email command is missing the recipient.".to_string();
        };
        let Some(subject_idx) = extract::find_ignore_ascii_case(after_to, " subject:") else {
            return "Email command is missing the 'subject:' keyword.".to_string();
        };

        let recipient = after_to[..subject_idx].trim();
        let after_subject = &after_to[subject_idx + " subject:".len()..];

        let Some(body_idx) = extract::find_ignore_ascii_case(after_subject, " body:") else {
            return "Email command is missing the 'body:' keyword.".to_string();
        };

        let subject = after_subject[..body_idx].trim();
        let body = after_subject[body_idx + " body:".len()..].trim();

        let Some(uri) = build_mailto(recipient, subject, body) else {
            return "Failed to construct the email URL. Please check your command format."
                .to_string();
        };

        // Fire-and-forget: the reply does not depend on the open outcome.
        self.opener.open(uri.as_str()).await;
        format!("Opening email draft for {recipient}.")
    }

    async fn run_reminder(&self, command: &str) -> String {
        let title = match extract::after_marker(command, "reminder:") {
            Some(rest) => rest.trim().to_string(),
            None => extract::remove_phrase_ignore_case(command, "remind me")
                .trim()
                .to_string(),
        };
        let title = if title.is_empty() {
            "New Reminder".to_string()
        } else {
            title
        };

        if !self.reminders.request_access().await {
            return "Reminder access was not granted.".to_string();
        }

        match self.reminders.create(&title).await {
            Ok(()) => format!("Reminder set: {title}"),
            Err(e) => format!("Error setting reminder: {e}"),
        }
    }

    async fn run_schedule_task(&self, command: &str) -> String {
        let title = match extract::after_marker(command, "schedule task:") {
            Some(rest) => rest.trim().to_string(),
            None => "New Task".to_string(),
        };

        if !self.calendar.request_access().await {
            return "Calendar access was not granted.".to_string();
        }

        let start = self.clock.now() + chrono::Duration::hours(1);
        let end = start + chrono::Duration::hours(1);

        match self.calendar.create_event(&title, start, end).await {
            Ok(()) => format!("Task scheduled: {title}"),
            Err(e) => format!("Error scheduling task: {e}"),
        }
    }

    async fn run_music(&self, command: &str) -> String {
        let lowered = command.to_lowercase();
        let (mood, playlist) = MOOD_PLAYLISTS
            .iter()
            .copied()
            .find(|&(mood, _)| lowered.contains(mood))
            .unwrap_or(MOOD_PLAYLISTS[0]);

        self.opener.open(playlist).await;
        format!("Playing {mood} music.")
    }

    fn run_tip(&self, command: &str) -> String {
        let Some(after_for) = extract::after_marker(command, "for ") else {
            return "Command format not recognized for calculating tip.".to_string();
        };
        let Some(at_idx) = extract::find_ignore_ascii_case(after_for, " at ") else {
            return "Please specify the tip percentage using 'at'.".to_string();
        };

        let bill_text = after_for[..at_idx].trim().to_string();
        let percent_text = after_for[at_idx + " at ".len()..].replace('%', "");

        match (
            bill_text.parse::<f64>(),
            percent_text.trim().parse::<f64>(),
        ) {
            (Ok(bill), Ok(percentage)) => {
                let tip = bill * percentage / 100.0;
                let total = bill + tip;
                format!(
                    "For a bill of {bill} with a tip of {percentage}%, \
                     the tip is {tip} and the total is {total}."
                )
            }
            _ => "Could not parse the bill amount or tip percentage.".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Mailto construction
// ---------------------------------------------------------------------------

/// Build a `mailto:` URI with percent-encoded `subject`/`body` query
/// parameters, included only when non-empty.
fn build_mailto(recipient: &str, subject: &str, body: &str) -> Option<Url> {
    let mut uri = format!("mailto:{recipient}");

    let mut query = Vec::new();
    if !subject.is_empty() {
        query.push(format!("subject={}", utf8_percent_encode(subject, MAILTO_QUERY)));
    }
    if !body.is_empty() {
        query.push(format!("body={}", utf8_percent_encode(body, MAILTO_QUERY)));
    }
    if !query.is_empty() {
        uri.push('?');
        uri.push_str(&query.join("&"));
    }

    Url::parse(&uri).ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
