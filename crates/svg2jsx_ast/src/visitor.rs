//! Visitors for transforming the tree of a document.
use crate::{document::Document, element::Element, node::Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Whether a visitor should walk the document after preparing.
pub enum PrepareOutcome {
    #[default]
    /// Visit every node of the document
    None,
    /// Skip visiting the document
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Whether a node should stay in the document after being visited.
pub enum Outcome {
    #[default]
    /// Keep the node in its parent
    Keep,
    /// Remove the node from its parent
    Remove,
}

/// A trait for visiting or transforming the tree of a document.
///
/// Nodes are visited depth-first in document order.
#[allow(unused_variables)]
pub trait Visitor {
    /// The error type returned while visiting
    type Error;

    /// Prepares the visitor before walking the document.
    fn prepare(&mut self, document: &Document) -> PrepareOutcome {
        PrepareOutcome::None
    }

    /// Visits an element before it's children.
    ///
    /// The root element is never removed, regardless of the returned outcome.
    ///
    /// # Errors
    /// Whether the visitor fails
    fn element(&mut self, element: &mut Element) -> Result<Outcome, Self::Error> {
        Ok(Outcome::Keep)
    }

    /// Exits an element after visiting it's children
    ///
    /// # Errors
    /// Whether the visitor fails
    fn exit_element(&mut self, element: &mut Element) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Visits a text node
    ///
    /// # Errors
    /// Whether the visitor fails
    fn text(&mut self, text: &mut String) -> Result<Outcome, Self::Error> {
        Ok(Outcome::Keep)
    }

    /// Visits a comment
    ///
    /// # Errors
    /// Whether the visitor fails
    fn comment(&mut self, comment: &mut String) -> Result<Outcome, Self::Error> {
        Ok(Outcome::Keep)
    }

    /// Prepares and walks the document
    ///
    /// # Errors
    /// If any of the visitor's methods fail
    fn start(&mut self, document: &mut Document) -> Result<PrepareOutcome, Self::Error> {
        let outcome = self.prepare(document);
        if outcome == PrepareOutcome::Skip {
            return Ok(outcome);
        }

        if visit_element(self, &mut document.root)? == Outcome::Remove {
            log::debug!("Visitor::start: ignoring removal of root element");
        }
        Ok(outcome)
    }
}

fn visit_element<V: Visitor + ?Sized>(
    visitor: &mut V,
    element: &mut Element,
) -> Result<Outcome, V::Error> {
    if visitor.element(element)? == Outcome::Remove {
        return Ok(Outcome::Remove);
    }

    let children = std::mem::take(&mut element.children);
    let mut kept = Vec::with_capacity(children.len());
    for mut child in children {
        let outcome = match &mut child {
            Node::Element(element) => visit_element(visitor, element)?,
            Node::Text(text) => visitor.text(text)?,
            Node::Comment(comment) => visitor.comment(comment)?,
        };
        if outcome == Outcome::Keep {
            kept.push(child);
        }
    }
    element.children = kept;

    visitor.exit_element(element)?;
    Ok(Outcome::Keep)
}

#[cfg(test)]
mod test {
    use super::{Outcome, PrepareOutcome, Visitor};
    use crate::{document::Document, element::Element, node::Node};

    #[derive(Default)]
    struct Recorder {
        entered: Vec<String>,
        exited: Vec<String>,
        skip: bool,
    }

    impl Visitor for Recorder {
        type Error = String;

        fn prepare(&mut self, _document: &Document) -> PrepareOutcome {
            if self.skip {
                PrepareOutcome::Skip
            } else {
                PrepareOutcome::None
            }
        }

        fn element(&mut self, element: &mut Element) -> Result<Outcome, Self::Error> {
            self.entered.push(element.name.to_string());
            if element.name.is("metadata") {
                return Ok(Outcome::Remove);
            }
            Ok(Outcome::Keep)
        }

        fn exit_element(&mut self, element: &mut Element) -> Result<(), Self::Error> {
            self.exited.push(element.name.to_string());
            Ok(())
        }

        fn comment(&mut self, _comment: &mut String) -> Result<Outcome, Self::Error> {
            Ok(Outcome::Remove)
        }
    }

    fn document() -> Document {
        let mut g = Element::new("g");
        g.children.push(Element::new("path").into());
        g.children.push(Node::Comment("remove me".into()));
        let mut svg = Element::new("svg");
        svg.children.push(Element::new("metadata").into());
        svg.children.push(g.into());
        Document::new(svg)
    }

    #[test]
    fn visit_order() {
        let mut document = document();
        let mut recorder = Recorder::default();
        assert_eq!(recorder.start(&mut document), Ok(PrepareOutcome::None));
        assert_eq!(recorder.entered, ["svg", "metadata", "g", "path"]);
        assert_eq!(recorder.exited, ["path", "g", "svg"]);

        let g = document.root.first_element_child().unwrap();
        assert!(g.name.is("g"), "metadata should be removed");
        assert_eq!(g.children, vec![Node::Element(Element::new("path"))]);
    }

    #[test]
    fn skip() {
        let mut document = document();
        let mut recorder = Recorder {
            skip: true,
            ..Recorder::default()
        };
        assert_eq!(recorder.start(&mut document), Ok(PrepareOutcome::Skip));
        assert!(recorder.entered.is_empty());
        assert_eq!(document, self::document());
    }
}
