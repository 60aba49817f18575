//! Marker tokens and positional pairing.
//!
//! Markers are pure ASCII, so byte offsets of a match always fall on character
//! boundaries and a byte-window scan finds exactly the character windows that
//! spell a marker.

use std::ops::Range;

/// Token that opens a private span.
pub const OPEN_MARKER: &str = "{<}";

/// Token that closes a private span.
pub const CLOSE_MARKER: &str = "{>}";

const MARKER_LEN: usize = 3;

/// Result of pairing the markers found in a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Pairing {
    /// Every open has a matching close after it. Spans are byte ranges covering
    /// both markers, in pair order.
    Balanced(Vec<Range<usize>>),
    /// Open and close counts differ.
    Unbalanced { opens: usize, closes: usize },
    /// The pair at this index has its close before its open.
    Misordered { pair: usize },
}

/// Records the byte offset of every open and close marker, left to right.
fn scan(message: &str) -> (Vec<usize>, Vec<usize>) {
    let mut opens = Vec::new();
    let mut closes = Vec::new();
    for (offset, window) in message.as_bytes().windows(MARKER_LEN).enumerate() {
        if window == OPEN_MARKER.as_bytes() {
            opens.push(offset);
        } else if window == CLOSE_MARKER.as_bytes() {
            closes.push(offset);
        }
    }
    (opens, closes)
}

/// Pairs the i-th open marker with the i-th close marker.
pub(crate) fn pair(message: &str) -> Pairing {
    let (opens, closes) = scan(message);
    if opens.len() != closes.len() {
        return Pairing::Unbalanced {
            opens: opens.len(),
            closes: closes.len(),
        };
    }

    if let Some(pair) = opens
        .iter()
        .zip(&closes)
        .position(|(open, close)| open > close)
    {
        return Pairing::Misordered { pair };
    }

    Pairing::Balanced(
        opens
            .into_iter()
            .zip(closes)
            .map(|(open, close)| open..close + MARKER_LEN)
            .collect(),
    )
}
