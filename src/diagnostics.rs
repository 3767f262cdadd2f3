//! Diagnostic sinks.
//!
//! Components receive a sink at construction instead of logging through
//! global state. The binary uses [`TracingDiagnostics`]; tests use
//! [`RecordingDiagnostics`] to inspect what was emitted.

use std::cell::RefCell;

/// Severity of a diagnostic entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// Receives messages tagged with the component that produced them.
pub trait Diagnostics {
    fn debug(&self, context: &str, message: &str);
    fn info(&self, context: &str, message: &str);
    fn warn(&self, context: &str, message: &str);
    fn error(&self, context: &str, message: &str);
}

/// Forwards every entry to `tracing`, with the component as a structured field.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn debug(&self, context: &str, message: &str) {
        tracing::debug!(context, "{message}");
    }

    fn info(&self, context: &str, message: &str) {
        tracing::info!(context, "{message}");
    }

    fn warn(&self, context: &str, message: &str) {
        tracing::warn!(context, "{message}");
    }

    fn error(&self, context: &str, message: &str) {
        tracing::error!(context, "{message}");
    }
}

/// A single recorded entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub context: String,
    pub message: String,
}

/// Keeps entries in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: RefCell<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    /// Entries of one severity.
    pub fn at_level(&self, level: Level) -> Vec<Diagnostic> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.level == level)
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    fn record(&self, level: Level, context: &str, message: &str) {
        self.entries.borrow_mut().push(Diagnostic {
            level,
            context: context.to_string(),
            message: message.to_string(),
        });
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn debug(&self, context: &str, message: &str) {
        self.record(Level::Debug, context, message);
    }

    fn info(&self, context: &str, message: &str) {
        self.record(Level::Info, context, message);
    }

    fn warn(&self, context: &str, message: &str) {
        self.record(Level::Warn, context, message);
    }

    fn error(&self, context: &str, message: &str) {
        self.record(Level::Error, context, message);
    }
}
