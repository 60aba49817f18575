//! Procedural macros for `unilog`.
//!
//! This crate provides `marked!`, which:
//! - checks the privacy markers in a message template at compile time
//! - escapes the markers so the template can be handed to `format!`
//!
//! It does **not** sanitize anything. Sanitizing happens at runtime in the main
//! `unilog` crate, which also guards against markers arriving through arguments.

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
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use syn::parse_macro_input;

mod template;
use template::MarkedTemplate;

/// Formats a message whose template contains privacy markers.
///
/// `marked!("user {<}{}{>} signed in", name)` expands to
/// `::std::format!("user {{<}}{}{{>}} signed in", name)`, producing
/// `"user {<}alice{>} signed in"`, ready for `unilog::sanitize` or a `Logger`.
///
/// The template is checked with the same rules the sanitizer applies at runtime:
/// - the number of `{<}` must equal the number of `{>}`
/// - the i-th `{<}` must come before the i-th `{>}`
///
/// A marker may not sit directly after a `{` or directly before a `}`, since it
/// would run into a `{{`/`}}` escape once escaped for `format!`.
///
/// A template that breaks any of these rules is a compile error pointing at the
/// literal.
#[proc_macro]
pub fn marked(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as MarkedTemplate);
    match input.expand() {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
