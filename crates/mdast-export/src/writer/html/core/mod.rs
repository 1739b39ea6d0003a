use super::{utils, HtmlWriteError, HtmlWriteResult, HtmlWriterOptions};
use crate::hast::{Element, HastNode};
use crate::writer::runtime::diagnostics::{Diagnostic, DiagnosticSink, NullSink};
use ecow::EcoString;
use std::fmt;

mod guard;

use guard::{GuardedHtmlElement, GuardedTagWriter};

/// Serializes presentational nodes to an HTML string.
pub fn to_html(nodes: &[HastNode], options: &HtmlWriterOptions) -> HtmlWriteResult<EcoString> {
    let mut writer = HtmlWriter::with_options(options.clone());
    writer.write_nodes(nodes)?;
    writer.into_string()
}

/// HTML writer for serializing presentational trees.
///
/// `HtmlWriter` can serialize [`HastNode`]s directly, or build HTML
/// programmatically through the tag and attribute methods.
///
/// # Examples
///
/// ## Basic usage
///
/// ```rust
/// use mdast_export::hast::{Element, HastNode};
/// use mdast_export::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// let col = Element::new("col").with_property("style", "width: 50%");
/// writer.write_node(&HastNode::Element(col)).unwrap();
///
/// let output = writer.into_string().unwrap();
/// assert_eq!(output, "<col style=\"width: 50%\">");
/// ```
///
/// ## Building HTML elements manually
///
/// ```rust
/// use mdast_export::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
///
/// writer.start_tag("td").unwrap();
/// writer.attribute("align", "center").unwrap();
/// writer.finish_tag().unwrap();
/// writer.text("a < b").unwrap();
/// writer.end_tag("td").unwrap();
///
/// let output = writer.into_string().unwrap();
/// assert_eq!(output, "<td align=\"center\">a &lt; b</td>");
/// ```
pub struct HtmlWriter {
    /// Writer options
    pub options: HtmlWriterOptions,
    /// Buffer for storing the output text
    buffer: EcoString,
    /// Whether a tag is currently opened
    tag_opened: bool,
    /// Sink for reporting non-fatal diagnostics.
    diagnostics: Box<dyn DiagnosticSink + 'static>,
}

impl fmt::Debug for HtmlWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlWriter")
            .field("options", &self.options)
            .field("buffer", &self.buffer)
            .field("tag_opened", &self.tag_opened)
            .finish()
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlWriter {
    /// Creates a new HTML writer with default options.
    pub fn new() -> Self {
        Self::with_options(HtmlWriterOptions::default())
    }

    /// Creates a new HTML writer with the specified options.
    pub fn with_options(options: HtmlWriterOptions) -> Self {
        HtmlWriter {
            options,
            buffer: EcoString::new(),
            tag_opened: false,
            diagnostics: Box::new(NullSink),
        }
    }

    /// Replace the diagnostic sink used to capture non-fatal issues.
    pub fn with_diagnostic_sink(mut self, sink: Box<dyn DiagnosticSink + 'static>) -> Self {
        self.diagnostics = sink;
        self
    }

    pub(crate) fn emit_warning<S: Into<EcoString>>(&mut self, message: S) {
        let message = message.into();
        self.diagnostics.emit(Diagnostic::warning(message.clone()));
        log::warn!("{message}");
    }

    /// Gets a reference to the current options.
    pub fn options(&self) -> &HtmlWriterOptions {
        &self.options
    }

    /// Consumes the writer and returns the generated HTML string.
    pub fn into_string(mut self) -> HtmlWriteResult<EcoString> {
        self.ensure_tag_closed()?;
        Ok(self.buffer)
    }

    fn ensure_tag_closed(&mut self) -> HtmlWriteResult<()> {
        if self.tag_opened {
            self.buffer.push('>');
            self.tag_opened = false;
        }
        Ok(())
    }

    /// Starts an HTML tag with the given name.
    pub fn start_tag(&mut self, tag_name: &str) -> HtmlWriteResult<()> {
        self.ensure_tag_closed()?;
        self.buffer.push('<');
        self.buffer.push_str(tag_name);
        self.tag_opened = true;
        Ok(())
    }

    /// Adds an attribute to the currently open tag.
    pub fn attribute(&mut self, key: &str, value: &str) -> HtmlWriteResult<()> {
        if !self.tag_opened {
            return Err(HtmlWriteError::InvalidStructure(
                "Cannot write attribute: no tag is currently open.".to_string(),
            ));
        }
        self.buffer.push(' ');
        self.buffer.push_str(key);
        self.buffer.push_str("=\"");
        self.buffer.push_str(html_escape::encode_double_quoted_attribute(value).as_ref());
        self.buffer.push('"');
        Ok(())
    }

    /// Finishes the current open tag.
    pub fn finish_tag(&mut self) -> HtmlWriteResult<()> {
        if self.tag_opened {
            self.buffer.push('>');
            self.tag_opened = false;
        }
        Ok(())
    }

    /// Finishes the current open tag as a void element.
    pub fn finish_void_tag(&mut self) -> HtmlWriteResult<()> {
        if !self.tag_opened {
            return Err(HtmlWriteError::InvalidStructure(
                "Cannot finish void tag: no tag is currently open.".to_string(),
            ));
        }
        if self.options.close_self_closing {
            self.buffer.push_str(" />");
        } else {
            self.buffer.push('>');
        }
        self.tag_opened = false;
        Ok(())
    }

    /// Closes an HTML tag with the given name.
    pub fn end_tag(&mut self, tag_name: &str) -> HtmlWriteResult<()> {
        self.ensure_tag_closed()?;
        self.buffer.push_str("</");
        self.buffer.push_str(tag_name);
        self.buffer.push('>');
        Ok(())
    }

    /// Writes text content, escaping HTML special characters.
    pub fn text(&mut self, text: &str) -> HtmlWriteResult<()> {
        self.ensure_tag_closed()?;
        self.buffer.push_str(html_escape::encode_text(text).as_ref());
        Ok(())
    }

    /// Writes HTML content that is trusted to be well-formed and safe.
    ///
    /// External or user-provided content should go through
    /// [`Self::write_untrusted_html`] to ensure escaping.
    pub fn write_trusted_html(&mut self, html: &str) -> HtmlWriteResult<()> {
        self.ensure_tag_closed()?;
        self.buffer.push_str(html);
        Ok(())
    }

    /// Writes HTML content that may contain characters requiring escaping.
    ///
    /// This is a semantic alias for [`Self::text`].
    pub fn write_untrusted_html(&mut self, html: &str) -> HtmlWriteResult<()> {
        self.text(html)
    }

    fn guard_element<'a>(
        &'a mut self,
        element: &Element,
    ) -> HtmlWriteResult<GuardedHtmlElement<'a>> {
        if !utils::is_safe_tag_name(&element.tag_name) {
            if self.options.strict {
                return Err(HtmlWriteError::InvalidHtmlTag(element.tag_name.to_string()));
            }

            self.emit_warning(format!(
                "Invalid HTML tag name '{}' encountered. Textualizing in non-strict mode.",
                element.tag_name
            ));
            return Ok(GuardedHtmlElement::Textualize);
        }

        for name in element.properties.keys() {
            if !utils::is_safe_attribute_name(name) {
                if self.options.strict {
                    return Err(HtmlWriteError::InvalidHtmlAttribute(name.to_string()));
                }

                self.emit_warning(format!(
                    "Invalid attribute name '{name}' encountered. Textualizing element in non-strict mode."
                ));
                return Ok(GuardedHtmlElement::Textualize);
            }
        }

        self.start_tag(&element.tag_name)?;
        Ok(GuardedHtmlElement::Render(GuardedTagWriter::new(
            self,
            element.tag_name.clone(),
        )))
    }

    /// Writes a single presentational node.
    pub fn write_node(&mut self, node: &HastNode) -> HtmlWriteResult<()> {
        match node {
            HastNode::Element(element) => self.write_element(element),
            HastNode::Text(text) => self.text(text),
            HastNode::Raw(html) => {
                if self.options.allow_dangerous_html {
                    self.write_trusted_html(html)
                } else {
                    self.write_untrusted_html(html)
                }
            }
        }
    }

    /// Writes a sequence of presentational nodes.
    pub fn write_nodes(&mut self, nodes: &[HastNode]) -> HtmlWriteResult<()> {
        for node in nodes {
            self.write_node(node)?;
        }
        Ok(())
    }

    /// Writes an element with its properties and children.
    pub fn write_element(&mut self, element: &Element) -> HtmlWriteResult<()> {
        match self.guard_element(element)? {
            GuardedHtmlElement::Textualize => self.textualize_element(element),
            GuardedHtmlElement::Render(mut guard) => {
                guard.write_properties(&element.properties)?;
                if utils::is_void_element(&element.tag_name) {
                    let writer = guard.finish_void()?;
                    if !element.children.is_empty() {
                        writer.emit_warning(format!(
                            "Dropping children of void element <{}>.",
                            element.tag_name
                        ));
                    }
                    return Ok(());
                }

                let mut body = guard.finish()?;
                body.writer().write_nodes(&element.children)?;
                body.end()?;
                Ok(())
            }
        }
    }

    fn textualize_element(&mut self, element: &Element) -> HtmlWriteResult<()> {
        self.text("<")?;
        self.text(&element.tag_name)?;
        for (name, value) in &element.properties {
            self.text(" ")?;
            self.text(name)?;
            self.text("=\"")?;
            self.text(value)?;
            self.text("\"")?;
        }
        self.text(">")?;
        if utils::is_void_element(&element.tag_name) {
            return Ok(());
        }

        self.write_nodes(&element.children)?;
        self.text("</")?;
        self.text(&element.tag_name)?;
        self.text(">")?;
        Ok(())
    }
}
