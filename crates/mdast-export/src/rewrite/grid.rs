use ecow::{eco_format, EcoString};

use super::widths::{try_extract_column_widths, WidthMismatch};
use super::TableRewriter;
use crate::ast::{Node, Table};
use crate::error::{Result, RewriteError};
use crate::hast::{find_element_mut, table_to_hast, Element, HastNode};

impl TableRewriter {
    /// Replaces every grid table under `root` with its HTML rendering.
    ///
    /// The whole tree is visited, including the cells of plain tables. A
    /// replaced table is not visited further, so grid tables nested inside
    /// it are rendered as part of its HTML. Returns the number of tables
    /// replaced.
    pub fn rewrite_grid_tables(&mut self, root: &mut Node) -> Result<usize> {
        if !root.is_container() {
            return Err(RewriteError::NotAContainer(root.kind()));
        }

        let mut converted = 0;
        self.visit_grid_node(root, &mut converted)?;
        log::debug!("converted {converted} grid table(s) to HTML");
        Ok(converted)
    }

    fn visit_grid_node(&mut self, node: &mut Node, converted: &mut usize) -> Result<()> {
        match node {
            Node::Table(table) => {
                for cell in table.cells_mut() {
                    self.visit_grid_list(&mut cell.children, converted)?;
                }
            }
            other => {
                if let Some(children) = other.children_mut() {
                    self.visit_grid_list(children, converted)?;
                }
            }
        }
        Ok(())
    }

    fn visit_grid_list(&mut self, children: &mut [Node], converted: &mut usize) -> Result<()> {
        for child in children.iter_mut() {
            let html = match child {
                Node::Table(table) if table.is_grid() => Some(self.grid_table_to_html(table)?),
                _ => None,
            };

            match html {
                Some(html) => {
                    *child = Node::Html(html);
                    *converted += 1;
                }
                None => self.visit_grid_node(child, converted)?,
            }
        }
        Ok(())
    }

    fn grid_table_to_html(&mut self, table: &Table) -> Result<EcoString> {
        let mut hast = vec![HastNode::from(table_to_hast(table, &self.options))];

        match try_extract_column_widths(table) {
            Ok(widths) => {
                if let Some(element) = find_element_mut(&mut hast, "table") {
                    element.children.insert(0, colgroup(&widths).into());
                }
            }
            Err(WidthMismatch::Count { declared, columns }) => self.emit_warning(eco_format!(
                "Grid table declares {declared} column width(s) but has {columns} column(s). Rendering without column styling."
            )),
            Err(reason) => log::debug!("grid table has no usable column widths: {reason:?}"),
        }

        self.serialize(&hast)
    }
}

fn colgroup(widths: &[EcoString]) -> Element {
    let cols: Vec<HastNode> = widths
        .iter()
        .map(|width| {
            Element::new("col")
                .with_property("style", eco_format!("width: {width}"))
                .into()
        })
        .collect();
    Element::new("colgroup").with_children(cols)
}
