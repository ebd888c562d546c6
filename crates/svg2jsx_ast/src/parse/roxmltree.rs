//! Parsing methods using roxmltree
//!
//! # Quirks
//!
//! Roxmltree has some notable quirks
//!
//! - CDATA sections are merged into text
//! - Processing instructions and doctypes are skipped
//! - Documents with more than one root element are rejected
use std::fmt::Display;

use roxmltree::{NodeType, ParsingOptions};

use crate::{
    document::Document,
    element::{Attribute, Element},
    name::{QualName, XML_NS},
    node::Node,
};

/// The maximum depth of elements allowed in a document
pub const MAX_DEPTH: u32 = 1024;

#[derive(Debug)]
/// The errors which may occur while parsing a document with roxmltree.
pub enum ParseError {
    /// The document parsed had a depth greater than [`MAX_DEPTH`] elements
    NodesLimitReached,
    /// The document couldn't be parsed by roxmltree
    ROXML(roxmltree::Error),
}

type Scope<'a> = Vec<(Option<&'a str>, &'a str)>;

/// Parses a document from source text
///
/// # Errors
///
/// If the source is not well-formed xml, or if the depth of the tree is too deep
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let xml = roxmltree::Document::parse_with_options(
        source,
        ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        },
    )
    .map_err(ParseError::ROXML)?;
    parse_document(&xml)
}

/// Parses a document already in roxmltree representation
///
/// # Errors
///
/// If the depth of the tree is too deep
pub fn parse_document(xml: &roxmltree::Document) -> Result<Document, ParseError> {
    let root = xml.root_element();
    let scope = vec![(Some("xml"), XML_NS)];
    let root = parse_element(root, &scope, 0)?;
    Ok(Document::new(root))
}

fn parse_element<'a>(
    node: roxmltree::Node<'a, '_>,
    parent_scope: &Scope<'a>,
    depth: u32,
) -> Result<Element, ParseError> {
    if depth > MAX_DEPTH {
        return Err(ParseError::NodesLimitReached);
    }

    let scope: Scope<'a> = node
        .namespaces()
        .map(|ns| (ns.name(), ns.uri()))
        .collect();
    let mut attributes = Vec::with_capacity(node.attributes().len());
    attributes.extend(
        scope
            .iter()
            .filter(|declared| !parent_scope.contains(*declared))
            .filter(|(_, uri)| *uri != XML_NS)
            .map(|(prefix, uri)| Attribute {
                name: QualName::xmlns(*prefix),
                value: (*uri).to_string(),
            }),
    );
    attributes.extend(node.attributes().map(|attr| Attribute {
        name: parse_attr_name(&scope, attr.namespace(), attr.name()),
        value: attr.value().to_string(),
    }));

    let tag_name = node.tag_name();
    let name = parse_element_name(&scope, tag_name.namespace(), tag_name.name());

    let mut children = Vec::new();
    for child in node.children() {
        match child.node_type() {
            NodeType::Element => {
                children.push(Node::Element(parse_element(child, &scope, depth + 1)?));
            }
            NodeType::Text => {
                let text = child.text().unwrap_or_default();
                // Adjacent text, such as text split by a skipped node, is joined
                if let Some(Node::Text(previous)) = children.last_mut() {
                    previous.push_str(text);
                } else {
                    children.push(Node::Text(text.to_string()));
                }
            }
            NodeType::Comment => {
                children.push(Node::Comment(child.text().unwrap_or_default().to_string()));
            }
            NodeType::PI | NodeType::Root => {
                log::trace!("parse_element: skipping {:?}", child.node_type());
            }
        }
    }

    Ok(Element {
        name,
        attributes,
        children,
    })
}

fn parse_element_name(scope: &Scope, ns: Option<&str>, local: &str) -> QualName {
    let Some(uri) = ns else {
        return QualName::local(local);
    };
    let is_default = scope
        .iter()
        .any(|(prefix, default_uri)| prefix.is_none() && *default_uri == uri);
    let prefix = if is_default {
        None
    } else {
        find_prefix(scope, uri)
    };
    QualName::new(prefix, local, Some(uri.to_string()))
}

fn parse_attr_name(scope: &Scope, ns: Option<&str>, local: &str) -> QualName {
    match ns {
        // Unprefixed attributes never take the default namespace
        None => QualName::local(local),
        Some(uri) => QualName::new(find_prefix(scope, uri), local, Some(uri.to_string())),
    }
}

fn find_prefix(scope: &Scope, uri: &str) -> Option<String> {
    if uri == XML_NS {
        return Some("xml".to_string());
    }
    scope
        .iter()
        .find_map(|(prefix, ns_uri)| if *ns_uri == uri { *prefix } else { None })
        .map(ToString::to_string)
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NodesLimitReached => f.write_str("The depth of the document parsed was too deep"),
            Self::ROXML(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {}
