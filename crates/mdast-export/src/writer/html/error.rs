use std::fmt::{self, Display};

/// Errors that can occur while serializing a presentational tree to HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlWriteError {
    /// An underlying formatting error occurred.
    Fmt(String),
    /// Invalid structure or content encountered during HTML conversion.
    InvalidStructure(String),
    /// An invalid HTML tag name was encountered.
    InvalidHtmlTag(String),
    /// An invalid HTML attribute name was encountered.
    InvalidHtmlAttribute(String),
}

impl Display for HtmlWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlWriteError::Fmt(msg) => write!(f, "HTML formatting error: {msg}"),
            HtmlWriteError::InvalidStructure(msg) => {
                write!(f, "Invalid structure for HTML conversion: {msg}")
            }
            HtmlWriteError::InvalidHtmlTag(tag_name) => {
                write!(f, "Invalid HTML tag name: {tag_name}")
            }
            HtmlWriteError::InvalidHtmlAttribute(attr_name) => {
                write!(f, "Invalid HTML attribute name: {attr_name}")
            }
        }
    }
}

impl std::error::Error for HtmlWriteError {}

impl From<fmt::Error> for HtmlWriteError {
    fn from(err: fmt::Error) -> Self {
        HtmlWriteError::Fmt(err.to_string())
    }
}

/// Result type alias for HTML serialization.
pub type HtmlWriteResult<T> = Result<T, HtmlWriteError>;
