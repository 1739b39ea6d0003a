//! HTML-shaped intermediate tree.
//!
//! A presentational tree is produced from a markdown node right before
//! serialization, adjusted in place (e.g. a `colgroup` is injected), then
//! written out by the [`HtmlWriter`](crate::HtmlWriter) and dropped.

mod convert;

pub use self::convert::{table_to_hast, to_hast};

use ecow::EcoString;
use indexmap::IndexMap;

/// Node of the presentational tree
#[derive(Debug, Clone, PartialEq)]
pub enum HastNode {
    /// An HTML element
    Element(Element),
    /// Text content, escaped on output
    Text(EcoString),
    /// Raw HTML, only written verbatim when dangerous HTML is allowed
    Raw(EcoString),
}

impl HastNode {
    /// Create a text node
    pub fn text(value: impl Into<EcoString>) -> Self {
        HastNode::Text(value.into())
    }

    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            HastNode::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for HastNode {
    fn from(element: Element) -> Self {
        HastNode::Element(element)
    }
}

/// HTML element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// HTML tag name
    pub tag_name: EcoString,
    /// Attributes and inline style, in insertion order
    pub properties: IndexMap<EcoString, EcoString>,
    /// Child nodes
    pub children: Vec<HastNode>,
}

impl Element {
    /// Create a new HTML element
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Add a property to the HTML element
    pub fn with_property(mut self, name: &str, value: impl Into<EcoString>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Add child nodes to the HTML element
    pub fn with_children(mut self, children: Vec<HastNode>) -> Self {
        self.children = children;
        self
    }

    /// Check if this element's tag matches (case-insensitive)
    pub fn is(&self, tag_name: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag_name)
    }

    /// Value of a property, if set.
    pub fn property(&self, name: &str) -> Option<&EcoString> {
        self.properties.get(name)
    }
}

/// Finds the first element with the given tag, depth-first in document order.
pub fn find_element_mut<'a>(nodes: &'a mut [HastNode], tag_name: &str) -> Option<&'a mut Element> {
    for node in nodes {
        let HastNode::Element(element) = node else {
            continue;
        };
        if element.is(tag_name) {
            return Some(element);
        }
        if let Some(found) = find_element_mut(&mut element.children, tag_name) {
            return Some(found);
        }
    }
    None
}
