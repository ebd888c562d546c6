//! XML qualified name types.
use std::fmt::Display;

/// The namespace uri bound to the `xml` prefix.
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";
/// The namespace uri of SVG elements.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
/// The prefix used for namespace declarations.
pub const XMLNS: &str = "xmlns";

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
/// A qualified name used for the names of tags and attributes.
pub struct QualName {
    /// The prefix (e.g. `xlink` of `xlink:href`) of a qualified name.
    pub prefix: Option<String>,
    /// The local name (e.g. the `href` of `xlink:href`) of a qualified name.
    pub local: String,
    /// The resolved uri of the name, if it belongs to a namespace.
    pub ns: Option<String>,
}

impl QualName {
    /// Creates a name without a prefix or namespace
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local: local.into(),
            ns: None,
        }
    }

    /// Creates a name with the given prefix and namespace
    pub fn new(prefix: Option<String>, local: impl Into<String>, ns: Option<String>) -> Self {
        Self {
            prefix,
            local: local.into(),
            ns,
        }
    }

    /// Creates the name of a namespace declaration, such as `xmlns` or `xmlns:xlink`
    pub fn xmlns(prefix: Option<&str>) -> Self {
        match prefix {
            Some(prefix) => Self::new(Some(XMLNS.to_string()), prefix, None),
            None => Self::local(XMLNS),
        }
    }

    /// Returns whether the name is a namespace declaration
    pub fn is_xmlns(&self) -> bool {
        match &self.prefix {
            Some(prefix) => prefix == XMLNS,
            None => self.local == XMLNS,
        }
    }

    /// Returns whether the name has no prefix and the given local name
    pub fn is(&self, local: &str) -> bool {
        self.prefix.is_none() && self.local == local
    }

    /// Returns the length of joining the prefix and local part of a name with a `:`
    pub fn len(&self) -> usize {
        match &self.prefix {
            Some(p) => p.len() + 1 + self.local.len(),
            None => self.local.len(),
        }
    }

    /// Returns whether the name is equivalent to an empty string
    pub fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.local.is_empty()
    }
}

impl Display for QualName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.prefix {
            Some(p) => f.write_fmt(format_args!("{p}:{}", self.local)),
            None => f.write_str(&self.local),
        }
    }
}

#[test]
fn display() {
    assert_eq!(QualName::local("path").to_string(), "path");
    assert_eq!(
        QualName::new(
            Some("xlink".to_string()),
            "href",
            Some("http://www.w3.org/1999/xlink".to_string())
        )
        .to_string(),
        "xlink:href"
    );
    assert_eq!(QualName::xmlns(Some("xlink")).to_string(), "xmlns:xlink");
    assert!(QualName::xmlns(None).is_xmlns());
    assert!(QualName::xmlns(Some("xlink")).is_xmlns());
    assert!(!QualName::local("class").is_xmlns());
}
