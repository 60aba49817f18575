//! Privacy-aware log messages.
//!
//! This crate separates:
//! - **Marking**: which parts of a message are private, written inline with the
//!   `{<}` and `{>}` markers.
//! - **Sanitizing**: what happens to marked spans, decided at runtime by a
//!   [`PrivacyMode`].
//!
//! The [`Logger`] facade sanitizes every message before it reaches a [`Sink`],
//! so a sink never sees marked content it is not allowed to see. Text that
//! cannot hold a marker pair (under four characters, or without any `{<}`)
//! reaches the sink unchanged, stray `{>}` included.
//!
//! Key rules:
//! - Markers pair positionally: the i-th `{<}` closes at the i-th `{>}`.
//! - A message whose markers do not pair up is never partially revealed; it is
//!   replaced by [`UNSUPPORTED_MESSAGE`].
//! - Under [`PrivacyMode::Redact`] each marked span becomes [`REDACTED_PLACEHOLDER`].
//! - Under [`PrivacyMode::Reveal`] each marked span is dropped from the output.
//!
//! What this crate does:
//! - defines the marker grammar and the [`sanitize`] entrypoint
//! - defines interpolation modifiers for building marked messages
//! - provides a caller-constructed logger facade and sinks
//! - provides integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - bind to platform logging APIs
//! - hold a process-wide default logger
//!
//! The `marked!` macro lives in `unilog-macros` and is re-exported here. It checks
//! a template's markers at compile time and expands to `format!`.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use unilog_macros::marked;

// Module declarations
mod config;
mod logger;
mod privacy;
mod redaction;
mod severity;
mod sink;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use config::{Label, LoggerConfig, DEFAULT_CATEGORY};
pub use logger::Logger;
pub use privacy::{BuildProfile, PrivacyMode};
pub use redaction::{
    private, private_release, public, sanitize, Interpolated, Modifier, CLOSE_MARKER,
    MISSING_VALUE, OPEN_MARKER, REDACTED_PLACEHOLDER, UNSUPPORTED_MESSAGE,
};
pub use severity::Severity;
pub use sink::{Sink, WriterSink};
