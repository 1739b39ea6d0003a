//! Abstract syntax tree for markdown documents.
//!
//! This module defines the node types consumed by the table rewriters,
//! including typed tables with their producer metadata.

mod node;
mod path;
pub mod tables;

pub use self::node::Node;
pub use self::path::{InvalidTable, NodePath, PathStep};
pub use self::tables::{
    ColumnWidth, NodeId, Table, TableAlignment, TableBuilder, TableCell, TableKind, TableMeta,
    TableRow,
};
