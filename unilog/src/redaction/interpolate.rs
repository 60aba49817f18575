//! Interpolation modifiers for building log messages.
//!
//! Each modifier decides how a value appears when formatted into a message:
//!
//! | Modifier | Present value | Absent value |
//! |----------|---------------|--------------|
//! | `Private` | `<redacted>` | `nil` |
//! | `PrivateRelease` | `{<}value{>}` | `nil` |
//! | `Public` | `value` | `nil` |
//!
//! `PrivateRelease` defers the decision to [`crate::sanitize`]: the value is
//! wrapped in markers and the logger's privacy mode handles it.

use std::fmt;

use super::{
    markers::{CLOSE_MARKER, OPEN_MARKER},
    sanitize::REDACTED_PLACEHOLDER,
};

/// Text written for an absent value.
pub const MISSING_VALUE: &str = "nil";

/// How a value is written into a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Always redacted, whatever the privacy mode.
    Private,
    /// Marked, so the privacy mode decides when the message is logged.
    PrivateRelease,
    /// Written as-is.
    #[default]
    Public,
}

impl Modifier {
    /// Wraps an optional value for formatting with this modifier.
    pub fn apply<T: fmt::Display + ?Sized>(self, value: Option<&T>) -> Interpolated<'_, T> {
        Interpolated {
            value,
            modifier: self,
        }
    }
}

/// A value paired with its [`Modifier`]. Formats according to the modifier.
///
/// ```rust
/// use unilog::{private, private_release, public, Modifier};
///
/// let user = "alice";
/// assert_eq!(format!("{}", private(user)), "<redacted>");
/// assert_eq!(format!("{}", private_release(user)), "{<}alice{>}");
/// assert_eq!(format!("{}", public(user)), "alice");
/// assert_eq!(format!("{}", Modifier::Public.apply::<str>(None)), "nil");
/// ```
#[derive(Debug)]
pub struct Interpolated<'a, T: ?Sized> {
    value: Option<&'a T>,
    modifier: Modifier,
}

impl<T: ?Sized> Clone for Interpolated<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Interpolated<'_, T> {}

impl<T: fmt::Display + ?Sized> fmt::Display for Interpolated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(value) = self.value else {
            return f.write_str(MISSING_VALUE);
        };
        match self.modifier {
            Modifier::Private => f.write_str(REDACTED_PLACEHOLDER),
            Modifier::PrivateRelease => write!(f, "{OPEN_MARKER}{value}{CLOSE_MARKER}"),
            Modifier::Public => fmt::Display::fmt(value, f),
        }
    }
}

/// Formats `value` as [`REDACTED_PLACEHOLDER`].
pub fn private<T: fmt::Display + ?Sized>(value: &T) -> Interpolated<'_, T> {
    Modifier::Private.apply(Some(value))
}

/// Formats `value` between privacy markers.
pub fn private_release<T: fmt::Display + ?Sized>(value: &T) -> Interpolated<'_, T> {
    Modifier::PrivateRelease.apply(Some(value))
}

/// Formats `value` unchanged.
pub fn public<T: fmt::Display + ?Sized>(value: &T) -> Interpolated<'_, T> {
    Modifier::Public.apply(Some(value))
}
