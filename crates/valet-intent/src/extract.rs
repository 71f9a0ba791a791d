//! Marker-based argument extraction helpers.
//!
//! Commands carry their arguments as free text around literal markers
//! (`"for "`, `" subject:"`, `"reminder:"`, ...). Extraction slices the
//! original-case input around the first occurrence of each marker,
//! located case-insensitively. Searches are first-occurrence,
//! left-to-right; there is no escaping, and repeated markers are not
//! special. These exact semantics are a compatibility contract with the
//! command formats users already know -- keep them as they are.

/// Byte offset of the first ASCII case-insensitive occurrence of `needle`
/// in `haystack`, or `None`.
///
/// The needle must be ASCII (every marker is), which keeps the returned
/// offset valid for slicing the original string even when the haystack
/// contains multi-byte characters.
pub fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    debug_assert!(needle.is_ascii());
    if needle.is_empty() {
        return Some(0);
    }

    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.len() > h.len() {
        return None;
    }

    h.windows(n.len()).position(|w| w.eq_ignore_ascii_case(n))
}

/// The text after the first occurrence of `marker`, untrimmed.
pub fn after_marker<'a>(input: &'a str, marker: &str) -> Option<&'a str> {
    find_ignore_ascii_case(input, marker).map(|idx| &input[idx + marker.len()..])
}

/// Remove every case-insensitive occurrence of `phrase` from `input`.
pub fn remove_phrase_ignore_case(input: &str, phrase: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(idx) = find_ignore_ascii_case(rest, phrase) {
        out.push_str(&rest[..idx]);
        rest = &rest[idx + phrase.len()..];
    }
    out.push_str(rest);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_occurrence_case_insensitively() {
        assert_eq!(find_ignore_ascii_case("set alarm FOR 10pm", "for "), Some(10));
        assert_eq!(find_ignore_ascii_case("for x for y", "for "), Some(0));
        assert_eq!(find_ignore_ascii_case("no marker here", "subject:"), None);
    }

    #[test]
    fn offsets_stay_valid_with_multibyte_text() {
        let input = "café plans for 10pm";
        let idx = find_ignore_ascii_case(input, "for ").unwrap();
        assert_eq!(&input[idx..], "for 10pm");
    }

    #[test]
    fn after_marker_preserves_original_case() {
        assert_eq!(after_marker("email TO Bob@Example.com", "to "), Some("Bob@Example.com"));
        assert_eq!(after_marker("nothing", "to "), None);
    }

    #[test]
    fn removes_every_phrase_occurrence() {
        assert_eq!(remove_phrase_ignore_case("remind me to Remind Me", "remind me"), " to ");
        assert_eq!(remove_phrase_ignore_case("untouched", "remind me"), "untouched");
    }
}
