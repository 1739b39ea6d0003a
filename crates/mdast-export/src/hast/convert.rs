use ecow::{eco_format, EcoString};

use super::{Element, HastNode};
use crate::ast::{Node, Table, TableCell};
use crate::options::RewriteOptions;

/// Converts a markdown node into its presentational tree.
///
/// A root yields its converted children; every other node yields the nodes
/// it stands for (usually one element, none for suppressed raw HTML).
pub fn to_hast(node: &Node, options: &RewriteOptions) -> Vec<HastNode> {
    let converter = HastConverter { options };
    let mut out = Vec::new();
    converter.node(node, &mut out);
    out
}

/// Converts a table into its `table` element.
pub fn table_to_hast(table: &Table, options: &RewriteOptions) -> Element {
    HastConverter { options }.table(table)
}

struct HastConverter<'a> {
    options: &'a RewriteOptions,
}

impl HastConverter<'_> {
    fn node(&self, node: &Node, out: &mut Vec<HastNode>) {
        match node {
            Node::Root(children) => out.extend(wrap(self.all(children), false)),
            Node::Paragraph(children) => out.push(self.element("p", children)),
            Node::Heading { depth, children } => {
                let tag_name = format!("h{}", (*depth).clamp(1, 6));
                out.push(self.element(&tag_name, children));
            }
            Node::BlockQuote(children) => {
                let children = wrap(self.all(children), true);
                out.push(Element::new("blockquote").with_children(children).into());
            }
            Node::List {
                ordered,
                start,
                children,
            } => {
                let mut element = Element::new(if *ordered { "ol" } else { "ul" });
                if let (true, Some(start)) = (*ordered, start) {
                    if *start != 1 {
                        element = element.with_property("start", eco_format!("{start}"));
                    }
                }
                out.push(element.with_children(wrap(self.all(children), true)).into());
            }
            Node::ListItem(children) => out.push(self.list_item(children).into()),
            Node::Table(table) => out.push(self.table(table).into()),
            Node::Emphasis(children) => out.push(self.element("em", children)),
            Node::Strong(children) => out.push(self.element("strong", children)),
            Node::Delete(children) => out.push(self.element("del", children)),
            Node::Link {
                url,
                title,
                children,
            } => {
                let mut element = Element::new("a").with_property("href", url.clone());
                if let Some(title) = title {
                    element = element.with_property("title", title.clone());
                }
                out.push(element.with_children(self.all(children)).into());
            }
            Node::Image { url, title, alt } => {
                let mut element = Element::new("img")
                    .with_property("src", url.clone())
                    .with_property("alt", alt.clone());
                if let Some(title) = title {
                    element = element.with_property("title", title.clone());
                }
                out.push(element.into());
            }
            Node::Code { lang, value } => {
                let mut code = Element::new("code");
                if let Some(lang) = lang.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
                    code = code.with_property("class", eco_format!("language-{lang}"));
                }
                let content: EcoString = if value.is_empty() {
                    EcoString::new()
                } else {
                    eco_format!("{value}\n")
                };
                let code = code.with_children(vec![HastNode::Text(content)]);
                out.push(Element::new("pre").with_children(vec![code.into()]).into());
            }
            Node::InlineCode(value) => out.push(
                Element::new("code")
                    .with_children(vec![HastNode::text(value.clone())])
                    .into(),
            ),
            Node::Html(value) => {
                if self.options.allow_dangerous_html {
                    out.push(HastNode::Raw(value.clone()));
                } else {
                    log::debug!("dropping raw HTML node while dangerous HTML is disallowed");
                }
            }
            Node::Break => {
                out.push(Element::new("br").into());
                out.push(HastNode::text("\n"));
            }
            Node::ThematicBreak => out.push(Element::new("hr").into()),
            Node::Text(value) => out.push(HastNode::Text(value.clone())),
        }
    }

    fn all(&self, children: &[Node]) -> Vec<HastNode> {
        let mut out = Vec::with_capacity(children.len());
        for child in children {
            self.node(child, &mut out);
        }
        out
    }

    fn element(&self, tag_name: &str, children: &[Node]) -> HastNode {
        Element::new(tag_name)
            .with_children(self.all(children))
            .into()
    }

    /// Tight list items render paragraphs without a `p` wrapper.
    fn list_item(&self, children: &[Node]) -> Element {
        let mut out = Vec::new();
        for (index, child) in children.iter().enumerate() {
            if index > 0 {
                out.push(HastNode::text("\n"));
            }
            match child {
                Node::Paragraph(inlines) => out.extend(self.all(inlines)),
                other => self.node(other, &mut out),
            }
        }
        if children
            .last()
            .is_some_and(|last| !matches!(last, Node::Paragraph(_)))
        {
            out.push(HastNode::text("\n"));
        }
        Element::new("li").with_children(out)
    }

    fn table(&self, table: &Table) -> Element {
        let mut sections: Vec<HastNode> = Vec::new();
        if let Some((head, body)) = table.rows.split_first() {
            let head_row = self.table_row(table, &head.cells, "th");
            sections.push(
                Element::new("thead")
                    .with_children(wrap(vec![head_row.into()], true))
                    .into(),
            );

            if !body.is_empty() {
                let rows: Vec<HastNode> = body
                    .iter()
                    .map(|row| self.table_row(table, &row.cells, "td").into())
                    .collect();
                sections.push(Element::new("tbody").with_children(wrap(rows, true)).into());
            }
        }

        Element::new("table").with_children(wrap(sections, true))
    }

    fn table_row(&self, table: &Table, cells: &[TableCell], cell_tag: &str) -> Element {
        let width = table.align.len().max(cells.len());
        let mut out: Vec<HastNode> = Vec::with_capacity(width);
        for column in 0..width {
            let mut cell = Element::new(cell_tag);
            if let Some(align) = table.align.get(column).and_then(|a| a.as_property()) {
                cell = cell.with_property("align", align);
            }
            if let Some(content) = cells.get(column) {
                cell = cell.with_children(self.all(&content.children));
            }
            out.push(cell.into());
        }
        Element::new("tr").with_children(wrap(out, true))
    }
}

/// Joins nodes with line endings, optionally surrounding them as well.
fn wrap(nodes: Vec<HastNode>, loose: bool) -> Vec<HastNode> {
    let mut out = Vec::with_capacity(nodes.len() * 2 + 1);
    if loose {
        out.push(HastNode::text("\n"));
    }
    let has_nodes = !nodes.is_empty();
    for (index, node) in nodes.into_iter().enumerate() {
        if index > 0 {
            out.push(HastNode::text("\n"));
        }
        out.push(node);
    }
    if loose && has_nodes {
        out.push(HastNode::text("\n"));
    }
    out
}
