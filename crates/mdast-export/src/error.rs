//! Error handling for the table rewriters.
//!
//! Malformed-but-well-typed input never produces an error: unresolvable
//! records are skipped and width problems degrade to unstyled output. Errors
//! are reserved for structural precondition violations and serializer
//! failures.

use crate::writer::html::error::HtmlWriteError;
use std::error::Error;
use std::fmt::{self, Display};

/// Errors that can occur while rewriting a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// The node handed to a rewriter cannot hold children.
    NotAContainer(&'static str),
    /// Serializing a converted table failed.
    Html(HtmlWriteError),
}

impl Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::NotAContainer(kind) => write!(
                f,
                "Expected a container node to rewrite, found a `{kind}` node."
            ),
            RewriteError::Html(err) => write!(f, "Failed to serialize table: {err}"),
        }
    }
}

impl Error for RewriteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RewriteError::Html(err) => Some(err),
            RewriteError::NotAContainer(_) => None,
        }
    }
}

impl From<HtmlWriteError> for RewriteError {
    fn from(err: HtmlWriteError) -> Self {
        RewriteError::Html(err)
    }
}

/// Result type alias for rewrite operations.
pub type Result<T, E = RewriteError> = std::result::Result<T, E>;
