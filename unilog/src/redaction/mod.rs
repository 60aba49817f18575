//! Marker grammar, sanitizing, and interpolation.
//!
//! - **`markers`**: the marker tokens and the positional pairing scan
//! - **`sanitize`**: rewriting a message under a [`crate::PrivacyMode`]
//! - **`interpolate`**: modifiers that produce marked or pre-redacted fragments

mod interpolate;
mod markers;
mod sanitize;

pub use interpolate::{private, private_release, public, Interpolated, Modifier, MISSING_VALUE};
pub use markers::{CLOSE_MARKER, OPEN_MARKER};
pub use sanitize::{sanitize, REDACTED_PLACEHOLDER, UNSUPPORTED_MESSAGE};
