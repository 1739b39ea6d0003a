use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::ast::{
    ColumnWidth, NodeId, NodePath, Table, TableAlignment, TableBuilder, TableCell, TableKind,
    TableMeta,
};
use crate::error::RewriteError;
use crate::options::RewriteOptionsBuilder;

fn root(children: Vec<Node>) -> Node {
    Node::Root(children)
}

fn html(node: &Node) -> String {
    match node {
        Node::Html(value) => value.to_string(),
        other => panic!("expected an html node, found {other:?}"),
    }
}

fn grid_table(widths: Vec<ColumnWidth>) -> Table {
    TableBuilder::new()
        .headers(vec![vec![Node::text("a")], vec![Node::text("b")]])
        .add_text_row(&["c", "d"])
        .grid(widths)
        .build()
}

fn grid_html(table: Table, options: RewriteOptions) -> String {
    let mut tree = root(vec![Node::Table(table)]);
    let converted = TableRewriter::new(options)
        .rewrite_grid_tables(&mut tree)
        .unwrap();
    assert_eq!(converted, 1);
    let Node::Root(children) = &tree else {
        unreachable!()
    };
    html(&children[0])
}

#[test]
fn grid_table_carries_column_widths() {
    let _ = env_logger::builder().is_test(true).try_init();

    let table = grid_table(vec![0.5.into(), 0.5.into()]);
    insta::assert_snapshot!(grid_html(table, RewriteOptions::default()), @r#"
    <table><colgroup><col style="width: 50%"><col style="width: 50%"></colgroup>
    <thead>
    <tr>
    <th>a</th>
    <th>b</th>
    </tr>
    </thead>
    <tbody>
    <tr>
    <td>c</td>
    <td>d</td>
    </tr>
    </tbody>
    </table>
    "#);
}

#[test]
fn grid_table_keeps_alignment_and_inline_content() {
    let table = TableBuilder::new()
        .alignments(vec![TableAlignment::Left, TableAlignment::Right])
        .headers(vec![vec![Node::text("a")], vec![Node::text("b")]])
        .add_row(vec![
            TableCell::new(vec![Node::Strong(vec![Node::text("c")])]),
            TableCell::new(vec![Node::InlineCode("d<e".into())]),
        ])
        .grid([0.5.into(), "auto".into()])
        .build();

    insta::assert_snapshot!(grid_html(table, RewriteOptions::default()), @r#"
    <table><colgroup><col style="width: 50%"><col style="width: auto"></colgroup>
    <thead>
    <tr>
    <th align="left">a</th>
    <th align="right">b</th>
    </tr>
    </thead>
    <tbody>
    <tr>
    <td align="left"><strong>c</strong></td>
    <td align="right"><code>d&lt;e</code></td>
    </tr>
    </tbody>
    </table>
    "#);
}

#[test]
fn grid_table_closes_void_columns_when_asked() {
    let table = TableBuilder::new()
        .add_text_row(&["a", "b"])
        .grid(["300".into(), "25%".into()])
        .build();
    let options = RewriteOptionsBuilder::new().close_self_closing(true).build();

    assert_eq!(
        grid_html(table, options),
        "<table><colgroup><col style=\"width: 300px\" /><col style=\"width: 25%\" /></colgroup>\n\
         <thead>\n<tr>\n<th>a</th>\n<th>b</th>\n</tr>\n</thead>\n</table>"
    );
}

#[test]
fn mismatched_widths_render_without_colgroup() {
    let diagnostics = Rc::new(RefCell::new(Vec::new()));
    let table = TableBuilder::new()
        .add_text_row(&["a", "b"])
        .grid([0.5.into(), 0.25.into(), 0.25.into()])
        .build();
    let mut tree = root(vec![Node::Table(table)]);

    let converted = TableRewriter::default()
        .with_diagnostic_sink(Box::new(SharedVecSink::new(diagnostics.clone())))
        .rewrite_grid_tables(&mut tree)
        .unwrap();

    assert_eq!(converted, 1);
    assert_eq!(
        tree,
        root(vec![Node::html(
            "<table>\n<thead>\n<tr>\n<th>a</th>\n<th>b</th>\n</tr>\n</thead>\n</table>"
        )])
    );
    let diagnostics = diagnostics.borrow();
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].is_warning());
}

#[test]
fn grid_table_without_widths_renders_plainly() {
    let table = TableBuilder::new()
        .add_text_row(&["a"])
        .meta(TableMeta {
            kind: TableKind::Grid,
            col_widths: None,
        })
        .build();

    assert_eq!(
        grid_html(table, RewriteOptions::default()),
        "<table>\n<thead>\n<tr>\n<th>a</th>\n</tr>\n</thead>\n</table>"
    );
}

#[test]
fn trees_without_grid_tables_are_left_alone() {
    let original = root(vec![
        Node::Paragraph(vec![Node::text("intro")]),
        TableBuilder::new().add_text_row(&["a", "b"]).build_node(),
        Node::BlockQuote(vec![Node::html("<br>")]),
    ]);
    let mut tree = original.clone();

    let converted = rewrite_grid_tables(&mut tree, &RewriteOptions::default()).unwrap();
    assert_eq!(converted, 0);
    assert_eq!(tree, original);
}

#[test]
fn grid_tables_nested_in_plain_tables_are_found() {
    let inner = TableBuilder::new()
        .add_text_row(&["x"])
        .grid([1.0.into()])
        .build_node();
    let outer = TableBuilder::new()
        .add_row(vec![TableCell::new(vec![inner]), TableCell::new(vec![])])
        .build_node();
    let mut tree = root(vec![Node::List {
        ordered: false,
        start: None,
        children: vec![Node::ListItem(vec![outer])],
    }]);

    let converted = rewrite_grid_tables(&mut tree, &RewriteOptions::default()).unwrap();
    assert_eq!(converted, 1);

    let items = tree.resolve_mut(&NodePath::root().child(0).child(0)).unwrap();
    let Node::Table(outer) = &items[0] else {
        panic!("the plain table must stay a table");
    };
    assert_eq!(
        html(&outer.rows[0].cells[0].children[0]),
        "<table><colgroup><col style=\"width: 100%\"></colgroup>\n\
         <thead>\n<tr>\n<th>x</th>\n</tr>\n</thead>\n</table>"
    );
}

#[test]
fn grid_tables_inside_grid_tables_render_with_the_outer_table() {
    let inner = TableBuilder::new()
        .add_text_row(&["x"])
        .grid([1.0.into()])
        .build_node();
    let outer = TableBuilder::new()
        .add_row(vec![TableCell::new(vec![inner])])
        .grid([0.5.into()])
        .build_node();
    let mut tree = root(vec![outer]);

    let converted = rewrite_grid_tables(&mut tree, &RewriteOptions::default()).unwrap();
    assert_eq!(converted, 1);
}

#[test]
fn rewriting_requires_a_container() {
    let mut leaf = Node::text("plain");

    let err = rewrite_grid_tables(&mut leaf, &RewriteOptions::default()).unwrap_err();
    assert_eq!(err, RewriteError::NotAContainer("text"));

    let err = rewrite_invalid_tables(&mut leaf, &[], &RewriteOptions::default()).unwrap_err();
    assert_eq!(err, RewriteError::NotAContainer("text"));
}

#[test]
fn table_roots_are_rejected() {
    let grid = TableBuilder::new()
        .id(NodeId(1))
        .add_text_row(&["a"])
        .grid([0.5.into()])
        .build_node();
    let mut tree = grid.clone();

    let err = rewrite_grid_tables(&mut tree, &RewriteOptions::default()).unwrap_err();
    assert_eq!(err, RewriteError::NotAContainer("table"));

    let record = InvalidTable::new(NodePath::root(), NodeId(1));
    let err = rewrite_invalid_tables(&mut tree, &[record], &RewriteOptions::default()).unwrap_err();
    assert_eq!(err, RewriteError::NotAContainer("table"));
    assert_eq!(tree, grid);
}

fn invalid_table(id: u64) -> Node {
    TableBuilder::new()
        .id(NodeId(id))
        .add_row(vec![
            TableCell::new(vec![Node::text("a")]).with_invalid_children(vec![
                Node::text("line one"),
                Node::Break,
                Node::text("two"),
            ]),
            TableCell::new(vec![Node::text("b")]),
        ])
        .build_node()
}

#[test]
fn invalid_table_renders_override_content() {
    let mut tree = root(vec![Node::Paragraph(vec![Node::text("x")]), invalid_table(7)]);
    let record = tree.find_table_path(NodeId(7)).unwrap();

    let options = RewriteOptions::default();
    let replaced = rewrite_invalid_tables(&mut tree, &[record], &options).unwrap();
    assert_eq!(replaced, 1);

    let Node::Root(children) = &tree else {
        unreachable!()
    };
    assert_eq!(children[0], Node::Paragraph(vec![Node::text("x")]));
    insta::assert_snapshot!(html(&children[1]), @r#"
    <table>
    <thead>
    <tr>
    <th>line one<br>
    two</th>
    <th>b</th>
    </tr>
    </thead>
    </table>
    "#);
}

#[test]
fn invalid_tables_are_found_in_nested_containers_and_cells() {
    let holder = TableBuilder::new()
        .add_row(vec![TableCell::new(vec![invalid_table(2)])])
        .build_node();
    let mut tree = root(vec![Node::BlockQuote(vec![invalid_table(1)]), holder]);
    let records = vec![
        tree.find_table_path(NodeId(1)).unwrap(),
        tree.find_table_path(NodeId(2)).unwrap(),
    ];
    assert_eq!(records[0].parent, NodePath::root().child(0));
    assert_eq!(records[1].parent, NodePath::root().cell(1, 0, 0));

    let replaced = rewrite_invalid_tables(&mut tree, &records, &RewriteOptions::default()).unwrap();
    assert_eq!(replaced, 2);

    let quote = tree.resolve_mut(&records[0].parent).unwrap();
    assert!(matches!(quote[0], Node::Html(_)));
    let cell = tree.resolve_mut(&records[1].parent).unwrap();
    assert!(matches!(cell[0], Node::Html(_)));
}

#[test]
fn unresolvable_records_are_skipped() {
    let original = root(vec![invalid_table(1)]);
    let mut tree = original.clone();
    let records = [
        InvalidTable::new(NodePath::root().child(4), NodeId(1)),
        InvalidTable::new(NodePath::root(), NodeId(9)),
        InvalidTable::new(NodePath::root().cell(0, 3, 0), NodeId(1)),
    ];

    let diagnostics = SharedVecSink::default();
    let replaced = TableRewriter::default()
        .with_diagnostic_sink(Box::new(diagnostics.clone()))
        .rewrite_invalid_tables(&mut tree, &records)
        .unwrap();
    assert_eq!(replaced, 0);
    assert_eq!(tree, original);

    let skipped = diagnostics.snapshot();
    assert_eq!(skipped.len(), 3);
    assert!(skipped.iter().all(|diagnostic| !diagnostic.is_warning()));
    assert_eq!(
        skipped[1].to_string(),
        "info: Skipped invalid table NodeId(9): it is not a child of its parent."
    );
}

#[test]
fn repeated_records_replace_a_table_once() {
    let mut tree = root(vec![invalid_table(3)]);
    let record = tree.find_table_path(NodeId(3)).unwrap();

    let replaced = rewrite_invalid_tables(
        &mut tree,
        &[record.clone(), record],
        &RewriteOptions::default(),
    )
    .unwrap();
    assert_eq!(replaced, 1);
}

#[test]
fn raw_html_in_cells_follows_dangerous_html_option() {
    let table = || {
        TableBuilder::new()
            .id(NodeId(1))
            .add_row(vec![TableCell::new(vec![Node::html("<b>x</b>")])])
            .build_node()
    };
    let record = InvalidTable::new(NodePath::root(), NodeId(1));

    let mut tree = root(vec![table()]);
    rewrite_invalid_tables(
        &mut tree,
        std::slice::from_ref(&record),
        &RewriteOptions::default(),
    )
    .unwrap();
    assert_eq!(
        tree,
        root(vec![Node::html(
            "<table>\n<thead>\n<tr>\n<th></th>\n</tr>\n</thead>\n</table>"
        )])
    );

    let mut tree = root(vec![table()]);
    let options = RewriteOptionsBuilder::new().allow_dangerous_html(true).build();
    rewrite_invalid_tables(&mut tree, &[record], &options).unwrap();
    assert_eq!(
        tree,
        root(vec![Node::html(
            "<table>\n<thead>\n<tr>\n<th><b>x</b></th>\n</tr>\n</thead>\n</table>"
        )])
    );
}
