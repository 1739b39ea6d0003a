//! Table rewriters.
//!
//! Markdown pipe tables cannot express everything the producer may attach to
//! a table. Two rewriters replace such tables in place with a raw HTML node
//! holding their rendered form:
//!
//! - [`TableRewriter::rewrite_invalid_tables`] renders tables the producer
//!   recorded as unrepresentable, substituting per-cell override content.
//! - [`TableRewriter::rewrite_grid_tables`] renders grid tables and carries
//!   their declared column widths over as a `<colgroup>`.

use std::fmt;

use ecow::EcoString;

use crate::ast::{InvalidTable, Node};
use crate::error::Result;
use crate::hast::HastNode;
use crate::options::RewriteOptions;
use crate::writer::runtime::diagnostics::{Diagnostic, DiagnosticSink, NullSink, SharedVecSink};
use crate::writer::HtmlWriter;

mod grid;
mod invalid;
mod widths;

#[cfg(test)]
mod tests;

pub use widths::{extract_column_widths, normalize_width, try_extract_column_widths, WidthMismatch};

/// Rewrites tables of a markdown tree into raw HTML nodes.
pub struct TableRewriter {
    options: RewriteOptions,
    diagnostics: Box<dyn DiagnosticSink + 'static>,
}

impl fmt::Debug for TableRewriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableRewriter")
            .field("options", &self.options)
            .finish()
    }
}

impl Default for TableRewriter {
    fn default() -> Self {
        Self::new(RewriteOptions::default())
    }
}

impl TableRewriter {
    /// Creates a rewriter with the given options.
    pub fn new(options: RewriteOptions) -> Self {
        Self {
            options,
            diagnostics: Box::new(NullSink),
        }
    }

    /// Replace the diagnostic sink used to capture degraded conversions.
    pub fn with_diagnostic_sink(mut self, sink: Box<dyn DiagnosticSink + 'static>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Gets a reference to the current options.
    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    fn emit_warning<S: Into<EcoString>>(&mut self, message: S) {
        let message = message.into();
        log::warn!("{message}");
        self.diagnostics.emit(Diagnostic::warning(message));
    }

    fn emit_info<S: Into<EcoString>>(&mut self, message: S) {
        let message = message.into();
        log::debug!("{message}");
        self.diagnostics.emit(Diagnostic::info(message));
    }

    /// Serializes presentational nodes, forwarding serializer diagnostics to
    /// this rewriter's sink.
    fn serialize(&mut self, nodes: &[HastNode]) -> Result<EcoString> {
        let collected = SharedVecSink::default();
        let mut writer = HtmlWriter::with_options(self.options.html_writer_options())
            .with_diagnostic_sink(Box::new(collected.clone()));
        writer.write_nodes(nodes)?;
        let html = writer.into_string()?;

        for diagnostic in collected.snapshot() {
            self.diagnostics.emit(diagnostic);
        }
        Ok(html)
    }
}

/// Rewrites the recorded invalid tables of `root` with a default rewriter.
///
/// Returns the number of tables replaced.
pub fn rewrite_invalid_tables(
    root: &mut Node,
    records: &[InvalidTable],
    options: &RewriteOptions,
) -> Result<usize> {
    TableRewriter::new(options.clone()).rewrite_invalid_tables(root, records)
}

/// Rewrites every grid table of `root` with a default rewriter.
///
/// Returns the number of tables replaced.
pub fn rewrite_grid_tables(root: &mut Node, options: &RewriteOptions) -> Result<usize> {
    TableRewriter::new(options.clone()).rewrite_grid_tables(root)
}
