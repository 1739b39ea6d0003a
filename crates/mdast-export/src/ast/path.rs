//! Addressing child lists inside an owned tree.

use super::tables::NodeId;

/// A single step of a [`NodePath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Enter the child at `index` of the current list
    Child(usize),
    /// Enter a cell of the table at `index` of the current list
    Cell {
        /// Position of the table in the current list
        index: usize,
        /// Row of the cell
        row: usize,
        /// Column of the cell
        column: usize,
    },
}

/// A path from the root to a list of children.
///
/// The empty path designates the children of the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<PathStep>);

impl NodePath {
    /// The path of the root's children.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extends the path with a child step.
    pub fn child(mut self, index: usize) -> Self {
        self.0.push(PathStep::Child(index));
        self
    }

    /// Extends the path with a table cell step.
    pub fn cell(mut self, index: usize, row: usize, column: usize) -> Self {
        self.0.push(PathStep::Cell { index, row, column });
        self
    }

    /// The steps of the path.
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    pub(crate) fn push(&mut self, step: PathStep) {
        self.0.push(step);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

/// A table that failed to render under normal rules, addressed by the list
/// that holds it and by its own identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTable {
    /// The child list that holds the table
    pub parent: NodePath,
    /// Identity of the table inside `parent`
    pub inner: NodeId,
}

impl InvalidTable {
    /// Create a new record.
    pub fn new(parent: NodePath, inner: NodeId) -> Self {
        Self { parent, inner }
    }
}
