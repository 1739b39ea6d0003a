/// Options for configuring the HTML serialization process.
///
/// `HtmlWriterOptions` is usually derived from
/// [`RewriteOptions`](crate::RewriteOptions), but can be used directly with an
/// `HtmlWriter`.
///
/// # Example
///
/// ```rust
/// use mdast_export::{HtmlWriter, HtmlWriterOptions};
///
/// let options = HtmlWriterOptions {
///     allow_dangerous_html: false,
///     close_self_closing: true,
///     strict: true,
/// };
///
/// let writer = HtmlWriter::with_options(options);
/// assert!(writer.options().close_self_closing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlWriterOptions {
    /// Whether raw HTML nodes are written verbatim. When false they are escaped.
    pub allow_dangerous_html: bool,

    /// Whether void elements are finished with ` />` rather than `>`.
    pub close_self_closing: bool,

    /// Determines if unsafe tag/attribute names are errors (strict) or are
    /// textualized with a warning (lenient).
    pub strict: bool,
}

impl Default for HtmlWriterOptions {
    fn default() -> Self {
        Self {
            allow_dangerous_html: false,
            close_self_closing: false,
            strict: true,
        }
    }
}

impl HtmlWriterOptions {
    /// Sets whether raw HTML is written verbatim.
    pub fn with_dangerous_html(mut self, allow: bool) -> Self {
        self.allow_dangerous_html = allow;
        self
    }

    /// Sets whether void elements are closed with ` />`.
    pub fn with_close_self_closing(mut self, close: bool) -> Self {
        self.close_self_closing = close;
        self
    }
}
