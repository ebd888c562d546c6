//! XML element types.
use crate::{name::QualName, node::Node};

#[derive(Clone, Debug, PartialEq, Eq)]
/// An attribute of an [Element]
pub struct Attribute {
    /// The qualified name of the attribute
    pub name: QualName,
    /// The unescaped value of the attribute
    pub value: String,
}

impl Attribute {
    /// Creates an attribute with an unprefixed name
    pub fn new(local: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: QualName::local(local),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
/// An element, such as `<svg>` or `<path>`, with its attributes and child nodes.
pub struct Element {
    /// The qualified name of the element
    pub name: QualName,
    /// The attributes of the element, in document order.
    ///
    /// Namespace declarations introduced by this element are included as `xmlns` attributes.
    pub attributes: Vec<Attribute>,
    /// The child nodes of the element
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an empty element with an unprefixed name
    pub fn new(local: impl Into<String>) -> Self {
        Self {
            name: QualName::local(local),
            ..Self::default()
        }
    }

    /// Returns the value of the unprefixed attribute with the given local name
    pub fn get_attribute_local(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.is(local))
            .map(|attr| attr.value.as_str())
    }

    /// Sets the value of an unprefixed attribute, appending it if it doesn't exist.
    ///
    /// Returns the previous value.
    pub fn set_attribute_local(&mut self, local: &str, value: String) -> Option<String> {
        match self.attributes.iter_mut().find(|attr| attr.name.is(local)) {
            Some(attr) => Some(std::mem::replace(&mut attr.value, value)),
            None => {
                self.attributes.push(Attribute::new(local, value));
                None
            }
        }
    }

    /// Removes every unprefixed attribute with the given local name, returning the last
    /// value removed.
    pub fn remove_attribute_local(&mut self, local: &str) -> Option<String> {
        let mut removed = None;
        self.attributes.retain_mut(|attr| {
            if attr.name.is(local) {
                removed = Some(std::mem::take(&mut attr.value));
                false
            } else {
                true
            }
        });
        removed
    }

    /// Iterates over the child nodes which are elements
    pub fn child_elements_iter(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::element)
    }

    /// Returns the first child element
    pub fn first_element_child(&self) -> Option<&Element> {
        self.child_elements_iter().next()
    }

    /// Calls `f` for this element and each descendant element, depth-first in document order
    pub fn for_each_element<F>(&self, f: &mut F)
    where
        F: FnMut(&Element),
    {
        f(self);
        for child in self.child_elements_iter() {
            child.for_each_element(f);
        }
    }

    /// Returns whether this element or any descendant matches the predicate
    pub fn any_element<F>(&self, f: &F) -> bool
    where
        F: Fn(&Element) -> bool,
    {
        f(self) || self.child_elements_iter().any(|child| child.any_element(f))
    }
}

#[cfg(test)]
mod test {
    use super::{Attribute, Element};
    use crate::node::Node;

    fn icon() -> Element {
        let mut path = Element::new("path");
        path.attributes.push(Attribute::new("d", "M0 0"));
        let mut g = Element::new("g");
        g.children.push(Node::Text("label".into()));
        g.children.push(path.into());
        let mut svg = Element::new("svg");
        svg.attributes.push(Attribute::new("class", "icon"));
        svg.children.push(g.into());
        svg
    }

    #[test]
    fn attributes() {
        let mut svg = icon();
        assert_eq!(svg.get_attribute_local("class"), Some("icon"));
        assert_eq!(svg.set_attribute_local("width", "24".into()), None);
        assert_eq!(
            svg.set_attribute_local("width", "32".into()),
            Some("24".to_string())
        );
        assert_eq!(svg.remove_attribute_local("class"), Some("icon".to_string()));
        assert_eq!(svg.get_attribute_local("class"), None);
        assert_eq!(svg.attributes, vec![Attribute::new("width", "32")]);
    }

    #[test]
    fn traversal() {
        let svg = icon();
        let mut names = vec![];
        svg.for_each_element(&mut |element| names.push(element.name.local.clone()));
        assert_eq!(names, ["svg", "g", "path"]);
        assert!(svg.any_element(&|element| element.get_attribute_local("d").is_some()));
        assert!(!svg.any_element(&|element| element.name.is("text")));
        assert_eq!(
            svg.first_element_child().map(|g| g.name.local.as_str()),
            Some("g")
        );
    }
}
