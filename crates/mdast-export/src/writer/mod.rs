//! HTML writer implementation.
//!
//! This module serializes presentational trees to HTML text.

pub mod runtime;

/// HTML specific modules are grouped under writer::html
pub mod html;
pub use self::html::{to_html, HtmlWriteError, HtmlWriteResult, HtmlWriter, HtmlWriterOptions};

pub use self::runtime::diagnostics::{
    Diagnostic, DiagnosticSeverity, DiagnosticSink, NullSink, SharedVecSink,
};
