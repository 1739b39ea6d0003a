use std::cell::RefCell;
use std::rc::Rc;

use crate::hast::{Element, HastNode};
use crate::writer::SharedVecSink;
use crate::{to_html, HtmlWriteError, HtmlWriter, HtmlWriterOptions};

#[test]
fn write_trusted_html_keeps_fragment_verbatim() {
    let mut writer = HtmlWriter::new();
    writer.start_tag("div").unwrap();
    writer.finish_tag().unwrap();
    writer.write_trusted_html("<span>").unwrap();
    writer.write_trusted_html("&ok").unwrap();
    writer.end_tag("div").unwrap();

    let output = writer.into_string().unwrap();
    assert_eq!(output, "<div><span>&ok</div>");
}

#[test]
fn attribute_escaping_handles_quotes_and_special_chars() {
    let mut writer = HtmlWriter::new();
    writer.start_tag("td").unwrap();
    writer
        .attribute("title", "He said \"<Hello>\" & more")
        .unwrap();
    writer.finish_tag().unwrap();
    writer.end_tag("td").unwrap();

    let output = writer.into_string().unwrap();
    assert_eq!(
        output,
        "<td title=\"He said &quot;&lt;Hello&gt;&quot; &amp; more\"></td>"
    );
}

#[test]
fn attribute_without_open_tag_is_an_error() {
    let mut writer = HtmlWriter::new();
    let err = writer.attribute("style", "width: 1px").unwrap_err();
    assert!(matches!(err, HtmlWriteError::InvalidStructure(_)));
}

#[test]
fn void_elements_follow_close_self_closing() {
    let col = HastNode::Element(Element::new("col").with_property("style", "width: 50%"));

    let open = to_html(std::slice::from_ref(&col), &HtmlWriterOptions::default()).unwrap();
    assert_eq!(open, "<col style=\"width: 50%\">");

    let options = HtmlWriterOptions::default().with_close_self_closing(true);
    let closed = to_html(&[col], &options).unwrap();
    assert_eq!(closed, "<col style=\"width: 50%\" />");
}

#[test]
fn raw_nodes_are_escaped_unless_dangerous_html_is_allowed() {
    let nodes = [HastNode::Raw("<b>bold</b>".into())];

    let escaped = to_html(&nodes, &HtmlWriterOptions::default()).unwrap();
    assert_eq!(escaped, "&lt;b&gt;bold&lt;/b&gt;");

    let options = HtmlWriterOptions::default().with_dangerous_html(true);
    let verbatim = to_html(&nodes, &options).unwrap();
    assert_eq!(verbatim, "<b>bold</b>");
}

#[test]
fn nested_elements_render_in_order() {
    let table = Element::new("table").with_children(vec![
        HastNode::text("\n"),
        Element::new("tr")
            .with_children(vec![Element::new("td")
                .with_children(vec![HastNode::text("a & b")])
                .into()])
            .into(),
        HastNode::text("\n"),
    ]);

    let output = to_html(&[table.into()], &HtmlWriterOptions::default()).unwrap();
    assert_eq!(output, "<table>\n<tr><td>a &amp; b</td></tr>\n</table>");
}

#[test]
fn guarded_writer_textualizes_invalid_tag_in_non_strict_mode() {
    let diagnostics = Rc::new(RefCell::new(Vec::new()));
    let mut writer = HtmlWriter::with_options(HtmlWriterOptions {
        strict: false,
        ..Default::default()
    })
    .with_diagnostic_sink(Box::new(SharedVecSink::new(diagnostics.clone())));
    let element = Element::new("div!")
        .with_property("class", "unsafe")
        .with_children(vec![HastNode::text("oops")]);

    writer.write_element(&element).unwrap();

    let output = writer.into_string().unwrap();
    assert_eq!(output, "&lt;div! class=\"unsafe\"&gt;oops&lt;/div!&gt;");
    assert_eq!(diagnostics.borrow().len(), 1);
}

#[test]
fn guarded_writer_errors_on_invalid_tag_in_strict_mode() {
    let mut writer = HtmlWriter::new();
    let element = Element::new("div!");

    let err = writer.write_element(&element).unwrap_err();
    assert!(matches!(err, HtmlWriteError::InvalidHtmlTag(tag) if tag == "div!"));
}

#[test]
fn guarded_writer_errors_on_invalid_attribute_in_strict_mode() {
    let mut writer = HtmlWriter::new();
    let element = Element::new("col").with_property("onload!", "evil");

    let err = writer.write_element(&element).unwrap_err();
    assert!(matches!(err, HtmlWriteError::InvalidHtmlAttribute(name) if name == "onload!"));
}
