//! Table support for the markdown syntax tree
//!
//! Tables keep typed rows and cells. The metadata that producers attach to a
//! table (grid flag, declared column widths) lives in [`TableMeta`].

use std::fmt;

use super::Node;
use ecow::EcoString;

/// Identity of a node, assigned by the producer of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Table column alignment options for GFM tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableAlignment {
    /// Left alignment
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// No specific alignment specified
    #[default]
    None,
}

impl TableAlignment {
    /// The value of the `align` property, if any.
    pub fn as_property(&self) -> Option<&'static str> {
        match self {
            TableAlignment::Left => Some("left"),
            TableAlignment::Center => Some("center"),
            TableAlignment::Right => Some("right"),
            TableAlignment::None => None,
        }
    }
}

/// Flavor of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableKind {
    /// A plain, auto-sized table
    #[default]
    Plain,
    /// A table with an explicit column-width layout
    Grid,
}

/// A declared column width, either numeric or already annotated with a unit.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnWidth {
    /// A bare number. Ratios (≤ 1) and pixel counts share this variant.
    Number(f64),
    /// A textual width such as `"50%"`, `"12em"` or `"0.25"`
    Text(EcoString),
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Very small and very large magnitudes use exponent form.
            ColumnWidth::Number(value)
                if *value != 0.0 && (value.abs() < 1e-6 || value.abs() >= 1e21) =>
            {
                write!(f, "{value:e}")
            }
            ColumnWidth::Number(value) => write!(f, "{value}"),
            ColumnWidth::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for ColumnWidth {
    fn from(value: f64) -> Self {
        ColumnWidth::Number(value)
    }
}

impl From<&str> for ColumnWidth {
    fn from(value: &str) -> Self {
        ColumnWidth::Text(value.into())
    }
}

/// Metadata attached to a table by its producer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableMeta {
    /// Flavor of the table
    pub kind: TableKind,
    /// Declared column widths, in column order
    pub col_widths: Option<Vec<ColumnWidth>>,
}

impl TableMeta {
    /// Metadata of a grid table with the given column widths.
    pub fn grid(col_widths: impl IntoIterator<Item = ColumnWidth>) -> Self {
        Self {
            kind: TableKind::Grid,
            col_widths: Some(col_widths.into_iter().collect()),
        }
    }
}

/// Represents a single table cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    /// Cell content
    pub children: Vec<Node>,
    /// Content to render instead of `children` when the table is invalid
    pub invalid_children: Option<Vec<Node>>,
}

impl TableCell {
    /// Create a cell with the given content.
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            invalid_children: None,
        }
    }

    /// Attach replacement content used when rendering an invalid table.
    pub fn with_invalid_children(mut self, children: Vec<Node>) -> Self {
        self.invalid_children = Some(children);
        self
    }

    /// The content to render for an invalid table.
    pub fn reachable_children(&self) -> &[Node] {
        self.invalid_children.as_deref().unwrap_or(&self.children)
    }
}

/// Represents a logical row inside a table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    /// Cells of the row
    pub cells: Vec<TableCell>,
}

/// Table block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Identity of the table, if the producer assigned one
    pub id: Option<NodeId>,
    /// Column alignments
    pub align: Vec<TableAlignment>,
    /// Table rows, the first being the header row
    pub rows: Vec<TableRow>,
    /// Producer metadata
    pub meta: Option<TableMeta>,
}

impl Table {
    /// Whether the table is flagged as a grid table.
    pub fn is_grid(&self) -> bool {
        self.meta
            .as_ref()
            .is_some_and(|meta| meta.kind == TableKind::Grid)
    }

    /// Number of columns of the first row, or zero for an empty table.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }

    /// Iterates over every cell of the table, row by row.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut TableCell> {
        self.rows.iter_mut().flat_map(|row| row.cells.iter_mut())
    }

    /// A copy of the table in which every cell renders its invalid-children
    /// override, if any.
    pub fn with_reachable_content(&self) -> Table {
        let rows = self
            .rows
            .iter()
            .map(|row| TableRow {
                cells: row
                    .cells
                    .iter()
                    .map(|cell| TableCell::new(cell.reachable_children().to_vec()))
                    .collect(),
            })
            .collect();

        Table {
            id: self.id,
            align: self.align.clone(),
            rows,
            meta: self.meta.clone(),
        }
    }
}

/// Table builder for creating tables with customized content
///
/// This builder provides a fluent API for creating tables with
/// headers and rows.
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    id: Option<NodeId>,
    headers: Vec<Vec<Node>>,
    rows: Vec<Vec<TableCell>>,
    alignments: Vec<TableAlignment>,
    meta: Option<TableMeta>,
}

impl TableBuilder {
    /// Creates a new table builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identity of the table
    pub fn id(mut self, id: NodeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the table headers, one node list per header cell
    pub fn headers(mut self, headers: Vec<Vec<Node>>) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a single row of plain text cells to the table
    pub fn add_text_row<S: AsRef<str>>(mut self, row: &[S]) -> Self {
        self.rows.push(
            row.iter()
                .map(|text| TableCell::new(vec![Node::text(text.as_ref())]))
                .collect(),
        );
        self
    }

    /// Adds a single row to the table
    pub fn add_row(mut self, row: Vec<TableCell>) -> Self {
        self.rows.push(row);
        self
    }

    /// Sets alignments for multiple columns
    pub fn alignments(mut self, alignments: Vec<TableAlignment>) -> Self {
        self.alignments = alignments;
        self
    }

    /// Flags the table as a grid table with the given column widths
    pub fn grid(mut self, col_widths: impl IntoIterator<Item = ColumnWidth>) -> Self {
        self.meta = Some(TableMeta::grid(col_widths));
        self
    }

    /// Sets the table metadata
    pub fn meta(mut self, meta: TableMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Builds the final table
    pub fn build(self) -> Table {
        let TableBuilder {
            id,
            headers,
            rows,
            alignments,
            meta,
        } = self;

        let mut table_rows = Vec::with_capacity(rows.len() + 1);
        if !headers.is_empty() {
            table_rows.push(TableRow {
                cells: headers.into_iter().map(TableCell::new).collect(),
            });
        }
        table_rows.extend(rows.into_iter().map(|cells| TableRow { cells }));

        Table {
            id,
            align: alignments,
            rows: table_rows,
            meta,
        }
    }

    /// Builds the final table wrapped in a node
    pub fn build_node(self) -> Node {
        Node::Table(self.build())
    }
}
