//! Node definitions for the markdown syntax tree.

use super::path::{InvalidTable, NodePath, PathStep};
use super::tables::{NodeId, Table};
use ecow::EcoString;

/// Main node type, representing an element in a markdown document
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Root document node, contains child nodes
    Root(Vec<Node>),

    // Container blocks
    /// Paragraph node, containing inline elements
    Paragraph(Vec<Node>),

    /// Heading, contains depth (1-6) and inline content
    Heading {
        /// Heading depth, 1-6
        depth: u8,
        /// Heading content, containing inline elements
        children: Vec<Node>,
    },

    /// Block quote, containing any block-level elements
    BlockQuote(Vec<Node>),

    /// List, containing list items
    List {
        /// Whether the list is ordered
        ordered: bool,
        /// Starting number of an ordered list
        start: Option<u32>,
        /// List items, usually [`Node::ListItem`]
        children: Vec<Node>,
    },

    /// List item, containing one or more block-level elements
    ListItem(Vec<Node>),

    /// Table (GFM extension), possibly flagged as a grid table
    Table(Table),

    // Inlines
    /// Emphasis (italic)
    Emphasis(Vec<Node>),

    /// Strong emphasis (bold)
    Strong(Vec<Node>),

    /// Strikethrough (GFM extension)
    Delete(Vec<Node>),

    /// Link
    Link {
        /// Link URL
        url: EcoString,
        /// Optional link title
        title: Option<EcoString>,
        /// Link text
        children: Vec<Node>,
    },

    // Leaves
    /// Image
    Image {
        /// Image URL
        url: EcoString,
        /// Optional image title
        title: Option<EcoString>,
        /// Alternative text
        alt: EcoString,
    },

    /// Code block, containing optional language identifier and content
    Code {
        /// Optional language identifier
        lang: Option<EcoString>,
        /// Code content
        value: EcoString,
    },

    /// Inline code
    InlineCode(EcoString),

    /// Literal HTML, either parsed from the source or produced by a rewrite
    Html(EcoString),

    /// Hard break
    Break,

    /// Thematic break (horizontal rule)
    ThematicBreak,

    /// Plain text
    Text(EcoString),
}

impl Default for Node {
    fn default() -> Self {
        Node::Root(vec![])
    }
}

impl Node {
    /// Create a text node
    pub fn text(value: impl Into<EcoString>) -> Self {
        Node::Text(value.into())
    }

    /// Create an HTML node
    pub fn html(value: impl Into<EcoString>) -> Self {
        Node::Html(value.into())
    }

    /// Create a heading node, clamping the depth into 1-6
    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading {
            depth: depth.clamp(1, 6),
            children,
        }
    }

    /// The name of the node kind, as used by mdast.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Paragraph(_) => "paragraph",
            Node::Heading { .. } => "heading",
            Node::BlockQuote(_) => "blockquote",
            Node::List { .. } => "list",
            Node::ListItem(_) => "listItem",
            Node::Table(_) => "table",
            Node::Emphasis(_) => "emphasis",
            Node::Strong(_) => "strong",
            Node::Delete(_) => "delete",
            Node::Link { .. } => "link",
            Node::Image { .. } => "image",
            Node::Code { .. } => "code",
            Node::InlineCode(_) => "inlineCode",
            Node::Html(_) => "html",
            Node::Break => "break",
            Node::ThematicBreak => "thematicBreak",
            Node::Text(_) => "text",
        }
    }

    /// Returns the direct children of a node that holds a plain child list.
    ///
    /// Tables return `None`: their children are typed rows and cells. See
    /// [`Table::cells_mut`].
    pub fn children(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Root(children)
            | Node::Paragraph(children)
            | Node::Heading { children, .. }
            | Node::BlockQuote(children)
            | Node::List { children, .. }
            | Node::ListItem(children)
            | Node::Emphasis(children)
            | Node::Strong(children)
            | Node::Delete(children)
            | Node::Link { children, .. } => Some(children),
            Node::Table(_)
            | Node::Image { .. }
            | Node::Code { .. }
            | Node::InlineCode(_)
            | Node::Html(_)
            | Node::Break
            | Node::ThematicBreak
            | Node::Text(_) => None,
        }
    }

    /// Mutable version of [`Node::children`].
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(children)
            | Node::Paragraph(children)
            | Node::Heading { children, .. }
            | Node::BlockQuote(children)
            | Node::List { children, .. }
            | Node::ListItem(children)
            | Node::Emphasis(children)
            | Node::Strong(children)
            | Node::Delete(children)
            | Node::Link { children, .. } => Some(children),
            Node::Table(_)
            | Node::Image { .. }
            | Node::Code { .. }
            | Node::InlineCode(_)
            | Node::Html(_)
            | Node::Break
            | Node::ThematicBreak
            | Node::Text(_) => None,
        }
    }

    /// Whether the node holds a plain child list.
    ///
    /// Tables hold typed rows instead, so a table is not a container here.
    pub fn is_container(&self) -> bool {
        self.children().is_some()
    }

    /// Resolves a path from this node to the child list it designates.
    ///
    /// Returns `None` when any step of the path does not exist.
    pub fn resolve_mut(&mut self, path: &NodePath) -> Option<&mut Vec<Node>> {
        let mut list = self.children_mut()?;
        for step in path.steps() {
            list = match *step {
                PathStep::Child(index) => list.get_mut(index)?.children_mut()?,
                PathStep::Cell { index, row, column } => {
                    let Node::Table(table) = list.get_mut(index)? else {
                        return None;
                    };
                    &mut table.rows.get_mut(row)?.cells.get_mut(column)?.children
                }
            };
        }
        Some(list)
    }

    /// Locates the table carrying `id` and builds a record pointing at it.
    ///
    /// The search is depth-first and the first match wins.
    pub fn find_table_path(&self, id: NodeId) -> Option<InvalidTable> {
        let children = self.children()?;
        let mut path = NodePath::root();
        find_in_list(children, id, &mut path).then(|| InvalidTable::new(path, id))
    }
}

fn find_in_list(children: &[Node], id: NodeId, path: &mut NodePath) -> bool {
    for (index, child) in children.iter().enumerate() {
        if let Node::Table(table) = child {
            if table.id == Some(id) {
                return true;
            }
            for (row_idx, row) in table.rows.iter().enumerate() {
                for (col_idx, cell) in row.cells.iter().enumerate() {
                    path.push(PathStep::Cell {
                        index,
                        row: row_idx,
                        column: col_idx,
                    });
                    if find_in_list(&cell.children, id, path) {
                        return true;
                    }
                    path.pop();
                }
            }
        } else if let Some(grand_children) = child.children() {
            path.push(PathStep::Child(index));
            if find_in_list(grand_children, id, path) {
                return true;
            }
            path.pop();
        }
    }
    false
}
