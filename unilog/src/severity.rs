use std::fmt;

/// Severity of a log call. Used for routing only; it has no effect on sanitizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Severity {
    Debug,
    Info,
    Notice,
    Error,
}

impl Severity {
    /// Four-letter tag used by line-oriented sinks.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Debug => "DEBU",
            Severity::Info => "INFO",
            Severity::Notice => "MESS",
            Severity::Error => "ERRO",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Notice => "notice",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
