//! A [`Sink`] that forwards sanitized records to `slog`.
//!
//! This module exists to route [`crate::Logger`] output into an application's
//! existing `slog` drain tree.
//!
//! It is responsible for:
//! - Mapping [`Severity`] onto `slog` levels.
//! - Attaching the record's [`Label`] as `subsystem` and `category` key-values.
//!
//! It does not configure `slog` or sanitize anything itself; the text it receives
//! has already been sanitized by the logger.

use slog::Logger as SlogLogger;

use crate::{config::Label, severity::Severity, sink::Sink};

/// Emits records through a `slog::Logger`.
///
/// | Severity | `slog` level |
/// |----------|--------------|
/// | `Debug` | `Debug` |
/// | `Info` | `Info` |
/// | `Notice` | `Warning` |
/// | `Error` | `Error` |
///
/// ## Example
/// ```ignore
/// use unilog::{slog::SlogSink, Logger, LoggerConfig};
///
/// let logger = Logger::new(LoggerConfig::new("com.example.app"), SlogSink::new(&root));
/// logger.notice("cache warmed");
/// ```
#[derive(Clone, Debug)]
pub struct SlogSink {
    logger: SlogLogger,
}

impl SlogSink {
    pub fn new(logger: &SlogLogger) -> Self {
        Self {
            logger: logger.clone(),
        }
    }
}

impl Sink for SlogSink {
    fn emit(&self, label: &Label, severity: Severity, text: &str) {
        let subsystem = label.subsystem();
        let category = label.category();
        match severity {
            Severity::Debug => {
                slog::debug!(self.logger, "{}", text; "subsystem" => subsystem, "category" => category);
            }
            Severity::Info => {
                slog::info!(self.logger, "{}", text; "subsystem" => subsystem, "category" => category);
            }
            Severity::Notice => {
                slog::warn!(self.logger, "{}", text; "subsystem" => subsystem, "category" => category);
            }
            Severity::Error => {
                slog::error!(self.logger, "{}", text; "subsystem" => subsystem, "category" => category);
            }
        }
    }
}
