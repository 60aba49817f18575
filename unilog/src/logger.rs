//! The logging facade.
//!
//! A [`Logger`] pairs a [`LoggerConfig`] with a [`Sink`]. Every call sanitizes
//! the message with the config's current [`crate::PrivacyMode`] before the sink
//! sees it; a malformed message reaches the sink as
//! [`crate::UNSUPPORTED_MESSAGE`] at the requested severity.

use crate::{config::LoggerConfig, redaction::sanitize, severity::Severity, sink::Sink};

/// Sanitizing logger.
///
/// ```rust
/// use unilog::{Logger, LoggerConfig, WriterSink};
///
/// let logger = Logger::new(LoggerConfig::new("com.example.app"), WriterSink::new(Vec::new()));
/// logger.info("user {<}alice{>} signed in");
///
/// let output = String::from_utf8(logger.into_sink().into_inner()).unwrap();
/// assert_eq!(output, "[INFO] user <redacted> signed in\n");
/// ```
#[derive(Debug)]
pub struct Logger<S> {
    config: LoggerConfig,
    sink: S,
}

impl<S: Sink> Logger<S> {
    pub fn new(config: LoggerConfig, sink: S) -> Self {
        Self { config, sink }
    }

    #[must_use]
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Switches category (and subsystem, when non-empty) for later records.
    ///
    /// An empty `category` is ignored.
    pub fn set_category(&mut self, category: &str, subsystem: &str) {
        self.config.label_mut().set_category(category, subsystem);
    }

    /// Toggles revealing private data. Only development builds honor it.
    pub fn set_allow_private_data(&mut self, allow: bool) {
        self.config.set_allow_private_data(allow);
    }

    /// Sanitizes `message` and emits it at `severity`.
    pub fn log(&self, severity: Severity, message: &str) {
        let text = sanitize(message, self.config.privacy_mode());
        self.sink.emit(self.config.label(), severity, &text);
    }

    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn notice(&self, message: &str) {
        self.log(Severity::Notice, message);
    }

    /// Same as [`Logger::notice`].
    pub fn message(&self, message: &str) {
        self.notice(message);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }
}
