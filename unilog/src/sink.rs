//! Destinations for sanitized records.
//!
//! A [`Sink`] only ever receives text that has already been through
//! [`crate::sanitize`]. Sinks do not return errors: a record that cannot be
//! written is dropped, so logging never fails the caller.

use std::{
    io::{self, Stderr, Write},
    sync::{Arc, Mutex, PoisonError},
};

use crate::{config::Label, severity::Severity};

/// Receives sanitized log records.
pub trait Sink {
    /// Writes one record.
    fn emit(&self, label: &Label, severity: Severity, text: &str);
}

impl<S: Sink + ?Sized> Sink for &S {
    fn emit(&self, label: &Label, severity: Severity, text: &str) {
        (**self).emit(label, severity, text);
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&self, label: &Label, severity: Severity, text: &str) {
        (**self).emit(label, severity, text);
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn emit(&self, label: &Label, severity: Severity, text: &str) {
        (**self).emit(label, severity, text);
    }
}

/// Writes one `[TAG] text` line per record.
///
/// The label is not written; line output has no place for it.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterSink<Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn emit(&self, _label: &Label, severity: Severity, text: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // Write failures drop the record.
        let _ = writeln!(writer, "[{}] {text}", severity.tag());
    }
}
