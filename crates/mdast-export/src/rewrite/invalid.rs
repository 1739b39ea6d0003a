use ecow::eco_format;

use super::TableRewriter;
use crate::ast::{InvalidTable, Node};
use crate::error::{Result, RewriteError};
use crate::hast::{table_to_hast, HastNode};

impl TableRewriter {
    /// Replaces each recorded invalid table with its HTML rendering.
    ///
    /// Cells render their invalid-children override when one is present.
    /// Records whose parent path does not resolve, or whose table is no
    /// longer among the parent's children, are skipped with an info
    /// diagnostic. Returns the number of tables replaced.
    pub fn rewrite_invalid_tables(
        &mut self,
        root: &mut Node,
        records: &[InvalidTable],
    ) -> Result<usize> {
        if !root.is_container() {
            return Err(RewriteError::NotAContainer(root.kind()));
        }

        let mut replaced = 0;
        for record in records {
            let Some(parent) = root.resolve_mut(&record.parent) else {
                self.emit_info(eco_format!(
                    "Skipped invalid table {:?}: its parent was not found.",
                    record.inner
                ));
                continue;
            };

            let found = parent.iter().enumerate().find_map(|(index, child)| match child {
                Node::Table(table) if table.id == Some(record.inner) => {
                    Some((index, table.with_reachable_content()))
                }
                _ => None,
            });
            let Some((index, table)) = found else {
                self.emit_info(eco_format!(
                    "Skipped invalid table {:?}: it is not a child of its parent.",
                    record.inner
                ));
                continue;
            };

            let hast = [HastNode::from(table_to_hast(&table, &self.options))];
            parent[index] = Node::Html(self.serialize(&hast)?);
            replaced += 1;
        }

        log::debug!("converted {replaced} invalid table(s) to HTML");
        Ok(replaced)
    }
}
