//! Edge-case coverage for `sanitize`.
//!
//! These tests focus on boundary inputs (empty, very short, marker-like text),
//! on multi-byte characters around markers, and on properties that must hold
//! for every input: idempotence, determinism, and marker-free output.

use unilog::{
    sanitize, PrivacyMode, CLOSE_MARKER, OPEN_MARKER, REDACTED_PLACEHOLDER, UNSUPPORTED_MESSAGE,
};

const MODES: [PrivacyMode; 2] = [PrivacyMode::Redact, PrivacyMode::Reveal];

// A mix of plain, marked, malformed, and awkward inputs.
const CORPUS: &[&str] = &[
    "",
    "a",
    "{<}",
    "{>}",
    "{<}}",
    "{<>}",
    "plain message",
    "{<}{>}",
    "a{<}secret{>}b",
    "a{<}one{>}b{<}two{>}c",
    "{<}a{<}b{>}c{>}d",
    "a{<}b{>}c{>}d",
    "a{>}b{<}c",
    "a{{<}x{>}<}b",
    "{{<}<}}{>}",
    "x{<}{{>}>}}y",
    "秘密{<}数据{>}🔒",
    "cafe\u{0301}{<}é{>}",
];

#[test]
fn test_empty_string() {
    for mode in MODES {
        assert_eq!(sanitize("", mode), "");
    }
}

#[test]
fn test_short_strings_are_unchanged() {
    for message in ["x", "ab", "{<}", "{>}", "{<", "秘密"] {
        for mode in MODES {
            assert_eq!(sanitize(message, mode), message);
        }
    }
}

#[test]
fn test_strings_without_open_marker_are_unchanged() {
    for message in ["no markers here", "only a close {>} marker", "{>}{>}{>}", "{ < }"] {
        for mode in MODES {
            assert_eq!(sanitize(message, mode), message);
        }
    }
}

#[test]
fn test_empty_span() {
    assert_eq!(sanitize("{<}{>}", PrivacyMode::Redact), REDACTED_PLACEHOLDER);
    assert_eq!(sanitize("{<}{>}", PrivacyMode::Reveal), "");
}

#[test]
fn test_unicode_around_markers() {
    assert_eq!(
        sanitize("秘密{<}数据{>}🔒", PrivacyMode::Redact),
        "秘密<redacted>🔒"
    );
    assert_eq!(sanitize("秘密{<}数据{>}🔒", PrivacyMode::Reveal), "秘密🔒");
}

#[test]
fn test_combining_characters_inside_span() {
    assert_eq!(
        sanitize("cafe\u{0301}{<}é{>}", PrivacyMode::Redact),
        "cafe\u{0301}<redacted>"
    );
}

#[test]
fn test_four_character_boundary() {
    // Four characters can hold an open marker but never a full pair.
    assert_eq!(sanitize("{<}x", PrivacyMode::Redact), UNSUPPORTED_MESSAGE);
    assert_eq!(sanitize("x{<}", PrivacyMode::Reveal), UNSUPPORTED_MESSAGE);
}

#[test]
fn test_marker_lookalikes_are_kept() {
    assert_eq!(sanitize("{<>} and {< }", PrivacyMode::Redact), "{<>} and {< }");
}

#[test]
fn test_output_never_contains_markers() {
    for message in CORPUS.iter().filter(|m| m.chars().count() >= 4) {
        for mode in MODES {
            let sanitized = sanitize(message, mode);
            if !message.contains(OPEN_MARKER) {
                continue;
            }
            assert!(
                !sanitized.contains(OPEN_MARKER) && !sanitized.contains(CLOSE_MARKER),
                "{message:?} under {mode:?} produced {sanitized:?}"
            );
        }
    }
}

#[test]
fn test_redact_is_idempotent() {
    for message in CORPUS {
        let once = sanitize(message, PrivacyMode::Redact).into_owned();
        let twice = sanitize(&once, PrivacyMode::Redact);
        assert_eq!(twice, once, "input {message:?}");
    }
}

#[test]
fn test_sanitize_is_deterministic() {
    for message in CORPUS {
        for mode in MODES {
            assert_eq!(sanitize(message, mode), sanitize(message, mode));
        }
    }
}

#[test]
fn test_sentinel_is_stable_under_sanitize() {
    for mode in MODES {
        assert_eq!(sanitize(UNSUPPORTED_MESSAGE, mode), UNSUPPORTED_MESSAGE);
    }
}

#[test]
fn test_long_message_with_many_pairs() {
    let message = "x{<}y{>}".repeat(1_000);
    let sanitized = sanitize(&message, PrivacyMode::Redact);
    assert_eq!(sanitized, format!("x{REDACTED_PLACEHOLDER}").repeat(1_000));
}
