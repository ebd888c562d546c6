//! The document type.
use crate::element::Element;

#[derive(Clone, Debug, PartialEq)]
/// A parsed document, owning its single root element.
///
/// Nodes outside of the root element, such as the xml declaration, doctypes, or
/// comments before the root, are dropped while parsing.
pub struct Document {
    /// The root element of the document
    pub root: Element,
}

impl Document {
    /// Creates a document from it's root element
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}
