#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

// AST related exports
pub use crate::ast::{
    ColumnWidth, InvalidTable, Node, NodeId, NodePath, PathStep, Table, TableAlignment,
    TableBuilder, TableCell, TableKind, TableMeta, TableRow,
};

// Error types
pub use crate::error::{Result, RewriteError};

// Options
pub use crate::options::{RewriteOptions, RewriteOptionsBuilder};

// Table rewriters
pub use crate::rewrite::{rewrite_grid_tables, rewrite_invalid_tables, TableRewriter};

// File naming
pub use crate::naming::{NameAllocator, TokenSource, UuidTokens};

// HTML writer related exports
pub use crate::writer::{
    to_html, Diagnostic, DiagnosticSeverity, DiagnosticSink, HtmlWriteError, HtmlWriteResult,
    HtmlWriter, HtmlWriterOptions, NullSink, SharedVecSink,
};

pub mod ast;
pub mod error;
pub mod hast;
pub mod naming;
pub mod options;
pub mod rewrite;
pub mod writer;
