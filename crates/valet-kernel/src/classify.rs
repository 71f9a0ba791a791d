//! Keyword-set intent classifier.
//!
//! The classifier resolves free-text commands to an [`Intent`] using
//! substring containment over a lower-cased copy of the input. Keyword
//! rungs are checked in a fixed priority order and the first satisfied
//! rung wins; there is no scoring and no learned model.
//!
//! All keywords live in one [`AhoCorasick`] automaton built once at
//! construction time, so a single overlapping scan of the input answers
//! every rung at once.
//!
//! # Example
//!
//! ```rust
//! # use valet_kernel::classify::{Intent, IntentClassifier};
//! let classifier = IntentClassifier::new().unwrap();
//! assert_eq!(classifier.classify("set alarm for 10pm"), Intent::Alarm);
//! assert_eq!(classifier.classify("tell me a joke"), Intent::Unknown);
//! ```

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

use crate::error::{KernelError, Result};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The closed set of command categories Valet understands.
///
/// A classification result is transient: it drives dispatch and is never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Schedule a one-shot alarm notification.
    Alarm,
    /// Compose an email draft.
    Email,
    /// Create a reminder.
    Reminder,
    /// Put a task on the calendar.
    ScheduleTask,
    /// Open a mood playlist.
    Music,
    /// Canned weather report.
    Weather,
    /// Tip calculation.
    Tip,
    /// Current wall-clock time.
    Time,
    /// Today's date.
    Date,
    /// No rung matched.
    Unknown,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alarm => write!(f, "alarm"),
            Self::Email => write!(f, "email"),
            Self::Reminder => write!(f, "reminder"),
            Self::ScheduleTask => write!(f, "schedule_task"),
            Self::Music => write!(f, "music"),
            Self::Weather => write!(f, "weather"),
            Self::Tip => write!(f, "tip"),
            Self::Time => write!(f, "time"),
            Self::Date => write!(f, "date"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

// ---------------------------------------------------------------------------
// Priority ladder
// ---------------------------------------------------------------------------

/// How a rung's keywords must be satisfied.
enum Rule {
    /// At least one keyword present.
    Any(&'static [&'static str]),
    /// Every keyword present.
    All(&'static [&'static str]),
}

impl Rule {
    const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Rule::Any(kws) | Rule::All(kws) => kws,
        }
    }
}

/// The priority ladder, highest priority first. First satisfied rung wins.
const RULES: &[(Intent, Rule)] = &[
    (Intent::Alarm, Rule::Any(&["alarm", "wake me up"])),
    (Intent::Email, Rule::Any(&["email"])),
    (Intent::Reminder, Rule::Any(&["reminder", "remind me"])),
    (Intent::ScheduleTask, Rule::Any(&["schedule", "task", "meeting"])),
    (Intent::Music, Rule::Any(&["music"])),
    (Intent::Weather, Rule::Any(&["weather", "forecast", "temperature"])),
    (Intent::Tip, Rule::All(&["calculate", "tip"])),
    (Intent::Time, Rule::Any(&["time"])),
    (Intent::Date, Rule::Any(&["date"])),
];

// ---------------------------------------------------------------------------
// IntentClassifier
// ---------------------------------------------------------------------------

/// Fixed-priority keyword classifier.
///
/// The classifier is **not** `Clone` because it holds a compiled automaton
/// that is expensive to duplicate. Wrap in `Arc` if shared access is
/// needed.
pub struct IntentClassifier {
    /// One automaton over every keyword of every rung, in ladder order.
    automaton: AhoCorasick,
}

impl IntentClassifier {
    /// Build the classifier, compiling the keyword automaton.
    pub fn new() -> Result<Self> {
        let keywords: Vec<&'static str> = RULES
            .iter()
            .flat_map(|(_, rule)| rule.keywords().iter().copied())
            .collect();

        let automaton =
            AhoCorasick::new(&keywords).map_err(|e| KernelError::ClassifierBuild {
                reason: e.to_string(),
            })?;

        tracing::trace!(count = keywords.len(), "keyword automaton built");
        Ok(Self { automaton })
    }

    /// Classify free-text input into an [`Intent`].
    ///
    /// Matching is substring containment (not whole-word) over a
    /// lower-cased copy of the input, so `"alarming"` still triggers the
    /// alarm rung. Rungs are evaluated in ladder order and the first
    /// satisfied one wins; [`Intent::Unknown`] is the fallback.
    pub fn classify(&self, input: &str) -> Intent {
        let lowered = input.to_lowercase();

        // One overlapping scan marks every keyword the input contains.
        let mut hit = vec![false; self.automaton.patterns_len()];
        for mat in self.automaton.find_overlapping_iter(&lowered) {
            hit[mat.pattern().as_usize()] = true;
        }

        // Walk the ladder. Keywords were flattened in ladder order, so a
        // running offset recovers each rung's slice of the hit vector.
        let mut offset = 0;
        for (intent, rule) in RULES {
            let count = rule.keywords().len();
            let hits = &hit[offset..offset + count];
            offset += count;

            let satisfied = match rule {
                Rule::Any(_) => hits.iter().any(|h| *h),
                Rule::All(_) => hits.iter().all(|h| *h),
            };

            if satisfied {
                tracing::debug!(%intent, "intent classified");
                return *intent;
            }
        }

        tracing::debug!(input = %input, "no rung matched, falling back to unknown");
        Intent::Unknown
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new().expect("automaton builds")
    }

    #[test]
    fn alarm_keywords() {
        let c = classifier();
        assert_eq!(c.classify("set alarm for 10pm"), Intent::Alarm);
        assert_eq!(c.classify("wake me up at 7am"), Intent::Alarm);
    }

    #[test]
    fn classification_is_case_insensitive() {
        let c = classifier();
        assert_eq!(c.classify("Set ALARM for 10pm"), Intent::Alarm);
        assert_eq!(c.classify("Send EMAIL to bob subject: hi body: yo"), Intent::Email);
    }

    #[test]
    fn substring_containment_not_whole_word() {
        let c = classifier();
        // "alarming" contains "alarm".
        assert_eq!(c.classify("that is alarming"), Intent::Alarm);
    }

    #[test]
    fn tip_requires_both_keywords() {
        let c = classifier();
        assert_eq!(c.classify("calculate tip for 200 at 10%"), Intent::Tip);
        // "tip" alone is not enough, and neither is "calculate".
        assert_eq!(c.classify("a good tip"), Intent::Unknown);
        assert_eq!(c.classify("calculate something"), Intent::Unknown);
    }

    #[test]
    fn priority_order_first_match_wins() {
        let c = classifier();
        // Reminder (rung 3) outranks Time (rung 8).
        assert_eq!(c.classify("remind me to check the time"), Intent::Reminder);
        // Alarm (rung 1) outranks ScheduleTask (rung 4).
        assert_eq!(c.classify("schedule an alarm"), Intent::Alarm);
        // Email (rung 2) outranks Weather (rung 6).
        assert_eq!(c.classify("email me the weather"), Intent::Email);
    }

    #[test]
    fn schedule_task_keywords() {
        let c = classifier();
        assert_eq!(c.classify("schedule task: review PRs"), Intent::ScheduleTask);
        assert_eq!(c.classify("new task please"), Intent::ScheduleTask);
        assert_eq!(c.classify("book a meeting"), Intent::ScheduleTask);
    }

    #[test]
    fn remaining_rungs() {
        let c = classifier();
        assert_eq!(c.classify("play some music"), Intent::Music);
        assert_eq!(c.classify("what's the forecast"), Intent::Weather);
        assert_eq!(c.classify("what time is it"), Intent::Time);
        assert_eq!(c.classify("what's today's date"), Intent::Date);
    }

    #[test]
    fn unknown_fallback() {
        let c = classifier();
        assert_eq!(c.classify("tell me a joke"), Intent::Unknown);
        assert_eq!(c.classify(""), Intent::Unknown);
    }
}
