//! Rewrite options.
//!
//! This module provides configuration options for the table rewriters.

use crate::writer::html::HtmlWriterOptions;

/// Options shared by both table conversion paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Whether raw HTML inside converted tables is passed through unescaped.
    ///
    /// When false, raw HTML nodes are dropped from the presentational tree and
    /// any raw fragment reaching the serializer is escaped.
    pub allow_dangerous_html: bool,
    /// Whether void elements are written as `<col />` instead of `<col>`
    pub close_self_closing: bool,
    /// Whether unsafe tag or attribute names are errors (true) or are
    /// textualized with a warning (false)
    pub strict: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            allow_dangerous_html: false,
            close_self_closing: false,
            strict: true,
        }
    }
}

impl RewriteOptions {
    /// Derive the serializer options from the rewrite options
    pub fn html_writer_options(&self) -> HtmlWriterOptions {
        HtmlWriterOptions {
            allow_dangerous_html: self.allow_dangerous_html,
            close_self_closing: self.close_self_closing,
            strict: self.strict,
        }
    }
}

/// Builder for RewriteOptions
#[derive(Debug, Default)]
pub struct RewriteOptionsBuilder {
    options: RewriteOptions,
}

impl RewriteOptionsBuilder {
    /// Create a new RewriteOptionsBuilder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether raw HTML is passed through unescaped
    pub fn allow_dangerous_html(mut self, allow: bool) -> Self {
        self.options.allow_dangerous_html = allow;
        self
    }

    /// Set whether void elements are closed with ` />`
    pub fn close_self_closing(mut self, close: bool) -> Self {
        self.options.close_self_closing = close;
        self
    }

    /// Set strict mode
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Build the RewriteOptions
    pub fn build(self) -> RewriteOptions {
        self.options
    }
}
