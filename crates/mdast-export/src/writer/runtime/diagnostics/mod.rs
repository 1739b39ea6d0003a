//! Diagnostics support for the serializer and the table rewriters.
//!
//! Degraded conversions (a grid table rendered without column styling, an
//! element textualized in lenient mode) are reported here, in addition to the
//! `log` facade, so that callers can inspect them after a rewrite.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use ecow::EcoString;

/// Severity of a diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    /// The output is still produced but lost some fidelity.
    Warning,
    /// Informational notes for downstream consumers.
    Info,
}

/// Diagnostic message emitted during a rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the diagnostic.
    pub severity: DiagnosticSeverity,
    /// Human-readable message.
    pub message: EcoString,
}

impl Diagnostic {
    /// Convenience constructor for warnings.
    pub fn warning<S: Into<EcoString>>(message: S) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            message: message.into(),
        }
    }

    /// Convenience constructor for informational diagnostics.
    pub fn info<S: Into<EcoString>>(message: S) -> Self {
        Self {
            severity: DiagnosticSeverity::Info,
            message: message.into(),
        }
    }

    /// Whether this is a warning.
    pub fn is_warning(&self) -> bool {
        self.severity == DiagnosticSeverity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Info => "info",
        };
        write!(f, "{severity}: {}", self.message)
    }
}

/// Receives non-fatal diagnostics.
pub trait DiagnosticSink {
    /// Emit a diagnostic message.
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// A no-op sink used as default when the caller does not provide a collector.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _: Diagnostic) {}
}

/// Shared sink that stores diagnostics in an `Rc<RefCell<Vec<Diagnostic>>>`.
///
/// Cloning the sink shares the storage, so a clone can be handed to a
/// rewriter while the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct SharedVecSink {
    target: Rc<RefCell<Vec<Diagnostic>>>,
}

impl SharedVecSink {
    /// Create a new shared sink backed by the supplied shared vector.
    pub fn new(target: Rc<RefCell<Vec<Diagnostic>>>) -> Self {
        Self { target }
    }

    /// Clone all collected diagnostics.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.target.borrow().clone()
    }
}

impl DiagnosticSink for SharedVecSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.target.borrow_mut().push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_sink_clones_share_storage() {
        let sink = SharedVecSink::default();
        let mut handle = sink.clone();
        handle.emit(Diagnostic::warning("no column styling"));
        handle.emit(Diagnostic::info("converted"));

        let collected = sink.snapshot();
        assert_eq!(collected.len(), 2);
        assert!(collected[0].is_warning());
        assert_eq!(collected[1].to_string(), "info: converted");
    }
}
