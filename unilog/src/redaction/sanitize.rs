//! Rewriting marked messages under a privacy mode.
//!
//! Sanitizing is a pure string transformation. It never fails: a message whose
//! markers do not pair up is replaced by [`UNSUPPORTED_MESSAGE`] as a whole, so
//! no partially redacted text is ever produced.

use std::{borrow::Cow, ops::Range};

use super::markers::{pair, Pairing, CLOSE_MARKER, OPEN_MARKER};
use crate::privacy::PrivacyMode;

/// Placeholder written in place of each marked span under [`PrivacyMode::Redact`].
pub const REDACTED_PLACEHOLDER: &str = "<redacted>";

/// Message emitted instead of a message with malformed markers.
pub const UNSUPPORTED_MESSAGE: &str = "<Unsupported characters found, message will not be logged>";

// A pair needs two 3-character markers; anything shorter than 4 characters is
// passed through untouched.
const MIN_MARKED_CHARS: usize = 4;

/// Sanitizes `message` for logging under `mode`.
///
/// - Messages shorter than four characters, or without an open marker, are
///   returned unchanged (borrowed).
/// - Messages whose markers do not pair up return [`UNSUPPORTED_MESSAGE`].
/// - Otherwise every span from an open marker through its paired close marker is
///   replaced: by [`REDACTED_PLACEHOLDER`] under [`PrivacyMode::Redact`], or by
///   nothing under [`PrivacyMode::Reveal`].
///
/// Spans that overlap because markers interleave are merged and replaced once.
/// The output of a successful rewrite never contains a marker token.
///
/// ```rust
/// use unilog::{sanitize, PrivacyMode};
///
/// assert_eq!(sanitize("a{<}secret{>}b", PrivacyMode::Redact), "a<redacted>b");
/// assert_eq!(sanitize("a{<}secret{>}b", PrivacyMode::Reveal), "ab");
/// ```
#[must_use]
pub fn sanitize(message: &str, mode: PrivacyMode) -> Cow<'_, str> {
    if message.chars().nth(MIN_MARKED_CHARS - 1).is_none() || !message.contains(OPEN_MARKER) {
        return Cow::Borrowed(message);
    }

    let spans = match pair(message) {
        Pairing::Balanced(spans) => spans,
        Pairing::Unbalanced { .. } | Pairing::Misordered { .. } => {
            return Cow::Borrowed(UNSUPPORTED_MESSAGE);
        }
    };
    if spans.is_empty() {
        return Cow::Borrowed(message);
    }

    let replacement = replacement(mode);
    let mut sanitized = String::with_capacity(message.len());
    let mut cursor = 0;
    for span in coalesce(spans) {
        sanitized.push_str(&message[cursor..span.start]);
        sanitized.push_str(replacement);
        cursor = span.end;
    }
    sanitized.push_str(&message[cursor..]);

    Cow::Owned(strip_markers(sanitized))
}

fn replacement(mode: PrivacyMode) -> &'static str {
    match mode {
        PrivacyMode::Redact => REDACTED_PLACEHOLDER,
        // Reveal drops the span together with its content.
        PrivacyMode::Reveal => "",
    }
}

/// Merges spans that overlap. Input spans are sorted by start.
fn coalesce(spans: Vec<Range<usize>>) -> Vec<Range<usize>> {
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start < last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

/// Removes stray marker tokens, including ones formed by joining the text around
/// an elided span.
///
/// Single pass: the output never holds a marker, so each pushed character can
/// only complete one at the very end.
fn strip_markers(text: String) -> String {
    let mut stripped = String::with_capacity(text.len());
    for ch in text.chars() {
        stripped.push(ch);
        if stripped.ends_with(OPEN_MARKER) || stripped.ends_with(CLOSE_MARKER) {
            stripped.truncate(stripped.len() - OPEN_MARKER.len());
        }
    }
    stripped
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{coalesce, sanitize, strip_markers, REDACTED_PLACEHOLDER, UNSUPPORTED_MESSAGE};
    use crate::privacy::PrivacyMode::{Redact, Reveal};

    #[test]
    fn empty_message_is_empty() {
        assert_eq!(sanitize("", Redact), "");
        assert_eq!(sanitize("", Reveal), "");
    }

    #[test]
    fn short_messages_pass_through() {
        for message in ["a", "{<", "{<}", "{>}"] {
            assert_eq!(sanitize(message, Redact), message);
            assert_eq!(sanitize(message, Reveal), message);
        }
    }

    #[test]
    fn unmarked_message_is_borrowed() {
        let message = "user logged in";
        assert!(matches!(sanitize(message, Redact), Cow::Borrowed(m) if m == message));
    }

    #[test]
    fn close_only_message_passes_through() {
        assert_eq!(sanitize("done {>} here", Redact), "done {>} here");
    }

    #[test]
    fn redact_replaces_span_with_placeholder() {
        assert_eq!(sanitize("a{<}secret{>}b", Redact), "a<redacted>b");
    }

    #[test]
    fn reveal_drops_span() {
        assert_eq!(sanitize("a{<}secret{>}b", Reveal), "ab");
    }

    #[test]
    fn independent_pairs_are_replaced_separately() {
        assert_eq!(
            sanitize("a{<}one{>}b{<}two{>}c", Redact),
            "a<redacted>b<redacted>c"
        );
        assert_eq!(sanitize("a{<}one{>}b{<}two{>}c", Reveal), "abc");
    }

    #[test]
    fn adjacent_pairs_keep_one_placeholder_each() {
        assert_eq!(
            sanitize("{<}x{>}{<}y{>}", Redact),
            format!("{REDACTED_PLACEHOLDER}{REDACTED_PLACEHOLDER}")
        );
    }

    #[test]
    fn interleaved_pairs_merge_into_one_span() {
        assert_eq!(sanitize("{<}a{<}b{>}c{>}d", Redact), "<redacted>d");
        assert_eq!(sanitize("{<}a{<}b{>}c{>}d", Reveal), "d");
    }

    #[test]
    fn unbalanced_markers_return_sentinel() {
        assert_eq!(sanitize("a{<}b{>}c{>}d", Redact), UNSUPPORTED_MESSAGE);
        assert_eq!(sanitize("a{<}b{<}c{>}d", Reveal), UNSUPPORTED_MESSAGE);
        assert_eq!(sanitize("open {<} only", Redact), UNSUPPORTED_MESSAGE);
    }

    #[test]
    fn close_before_open_returns_sentinel() {
        assert_eq!(sanitize("a{>}b{<}c", Redact), UNSUPPORTED_MESSAGE);
        assert_eq!(sanitize("a{>}b{<}c", Reveal), UNSUPPORTED_MESSAGE);
    }

    #[test]
    fn reveal_strips_markers_formed_by_joining() {
        // dropping the span joins "a{" and "<}b" into "a{<}b"
        assert_eq!(sanitize("a{{<}x{>}<}b", Reveal), "ab");
        assert_eq!(sanitize("a{{<}x{>}<}b", Redact), "a{<redacted><}b");
    }

    #[test]
    fn coalesce_merges_only_overlaps() {
        assert_eq!(coalesce(vec![0..3, 3..6]), vec![0..3, 3..6]);
        assert_eq!(coalesce(vec![0..11, 4..15]), vec![0..15]);
        assert_eq!(coalesce(vec![0..20, 4..9]), vec![0..20]);
    }

    #[test]
    fn strip_markers_removes_cascading_joins() {
        assert_eq!(strip_markers("{{<}<}}".to_string()), "}");
        assert_eq!(strip_markers("{{>}>}x".to_string()), "x");
        assert_eq!(strip_markers("a{<b>}c".to_string()), "a{<b>}c");
    }

    #[test]
    fn reveal_unwinds_deeply_nested_joins() {
        // each elided span joins "{" and "<}" into a new marker, k levels deep
        let depth = 50_000;
        let message = format!("{}{{<}}x{{>}}{}", "{".repeat(depth), "<}".repeat(depth));
        assert_eq!(sanitize(&message, Reveal), "");

        let redacted = sanitize(&message, Redact);
        assert_eq!(
            redacted,
            format!("{}<redacted>{}", "{".repeat(depth), "<}".repeat(depth))
        );
    }
}
