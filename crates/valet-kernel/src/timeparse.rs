//! Flexible wall-clock time parsing.
//!
//! Converts a free-form time string into an hour/minute pair by trying a
//! fixed, ordered list of [`chrono`] formats. The first format that
//! consumes the whole input wins. Parsing is invariant: ASCII digits and
//! English meridiem markers only, no locale data, no timezone handling.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Accepted formats, tried in order.
///
/// Covers 24-hour `"07:30"`, compact 12-hour `"10pm"` / `"9pm"`, and
/// minute-carrying 12-hour variants `"9:45AM"` / `"10:30PM"` / `"10:30 PM"`.
const TIME_FORMATS: &[&str] = &["%H:%M", "%I%p", "%l%p", "%l:%M%p", "%I:%M%p", "%l:%M %p"];

/// An hour/minute pair extracted from a time string.
///
/// Holds clock components only (`hour` 0-23, `minute` 0-59). The caller
/// combines it with "today" to build an absolute timestamp; it is never
/// stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTime {
    pub hour: u32,
    pub minute: u32,
}

/// Parse a flexible time string (e.g. `"10pm"`, `"10:30 PM"`, `"07:00"`).
///
/// Returns `None` when no accepted format matches the (trimmed) input in
/// full.
pub fn parse_time(text: &str) -> Option<ParsedTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, format) {
            tracing::trace!(input = %trimmed, format, "time string parsed");
            return Some(ParsedTime {
                hour: time.hour(),
                minute: time.minute(),
            });
        }
    }

    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_four_hour() {
        assert_eq!(parse_time("07:30"), Some(ParsedTime { hour: 7, minute: 30 }));
        assert_eq!(parse_time("23:59"), Some(ParsedTime { hour: 23, minute: 59 }));
        assert_eq!(parse_time("00:00"), Some(ParsedTime { hour: 0, minute: 0 }));
    }

    #[test]
    fn compact_twelve_hour() {
        assert_eq!(parse_time("10pm"), Some(ParsedTime { hour: 22, minute: 0 }));
        assert_eq!(parse_time("9pm"), Some(ParsedTime { hour: 21, minute: 0 }));
        assert_eq!(parse_time("12am"), Some(ParsedTime { hour: 0, minute: 0 }));
        assert_eq!(parse_time("12pm"), Some(ParsedTime { hour: 12, minute: 0 }));
    }

    #[test]
    fn twelve_hour_with_minutes() {
        assert_eq!(parse_time("9:45AM"), Some(ParsedTime { hour: 9, minute: 45 }));
        assert_eq!(parse_time("10:30PM"), Some(ParsedTime { hour: 22, minute: 30 }));
        assert_eq!(parse_time("10:30 PM"), Some(ParsedTime { hour: 22, minute: 30 }));
    }

    #[test]
    fn meridiem_case_does_not_matter() {
        assert_eq!(parse_time("10PM"), Some(ParsedTime { hour: 22, minute: 0 }));
        assert_eq!(parse_time("10pm"), parse_time("10Pm"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(parse_time("  10pm  "), Some(ParsedTime { hour: 22, minute: 0 }));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_time("not a time"), None);
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("   "), None);
        assert_eq!(parse_time("10pm sharp"), None);
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("10:75"), None);
        assert_eq!(parse_time("13pm"), None);
    }

    #[test]
    fn idempotent_over_accepted_formats() {
        for input in ["07:30", "10pm", "9:45AM"] {
            assert_eq!(parse_time(input), parse_time(input));
        }
    }
}
