//! XML node types.
use crate::element::Element;

#[derive(Clone, Debug, PartialEq)]
/// A node within the tree of a document.
///
/// Processing instructions and doctypes are not represented, since they are never
/// written back out.
pub enum Node {
    /// An [Element] node like `<g>` or `<path>`
    Element(Element),
    /// The actual text inside an element
    Text(String),
    /// A `Comment` node, such as `<!-- ... -->`
    Comment(String),
}

impl Node {
    /// Upcasts self as an element
    pub fn element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}
