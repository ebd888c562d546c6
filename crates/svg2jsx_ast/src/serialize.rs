//! Functions for serializing documents
use std::io::Write;

use crate::{
    document::Document,
    element::Element,
    node::Node,
    xmlwriter::{Error, Options, XmlWriter},
};

impl Document {
    /// Serializes the document with the default [`Options`]
    ///
    /// # Errors
    /// If the underlying serialization fails
    pub fn serialize(&self) -> Result<String, Error> {
        self.serialize_with_options(Options::default())
    }

    /// Serializes the document to a string
    ///
    /// # Errors
    /// If the underlying serialization fails
    pub fn serialize_with_options(&self, options: Options) -> Result<String, Error> {
        let buffer = self.serialize_into(Vec::new(), options)?;
        String::from_utf8(buffer).map_err(Error::UTF8)
    }

    /// Serializes the document into the given writer
    ///
    /// # Errors
    /// If the underlying serialization fails
    pub fn serialize_into<W: Write>(&self, wr: W, options: Options) -> Result<W, Error> {
        let mut xml = XmlWriter::new(wr, options);
        serialize_element(&self.root, &mut xml)?;
        xml.end_document()
    }
}

fn serialize_element<W: Write>(element: &Element, xml: &mut XmlWriter<W>) -> Result<(), Error> {
    xml.start_element(&element.name)?;
    for attr in &element.attributes {
        xml.write_attribute(&attr.name, &attr.value)?;
    }

    for child in &element.children {
        match child {
            Node::Element(element) => serialize_element(element, xml)?,
            Node::Text(text) => xml.write_text(text)?,
            Node::Comment(comment) => xml.write_comment(comment)?,
        }
    }

    xml.end_element()
}

#[cfg(all(test, feature = "roxmltree"))]
mod test {
    use crate::{
        parse::roxmltree::parse,
        xmlwriter::{Indent, Options},
    };

    #[test]
    fn serialize_round_trip() {
        let source = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><g><use xlink:href="#a"/><text>1 &lt; 2</text></g></svg>"##;
        let document = parse(source).unwrap();
        assert_eq!(
            document
                .serialize_with_options(Options {
                    indent: Indent::None,
                })
                .unwrap(),
            source
        );
    }

    #[test]
    fn serialize_pretty() {
        let document = parse(r#"<svg><g><path d="M0 0"/></g></svg>"#).unwrap();
        assert_eq!(
            document.serialize().unwrap(),
            "<svg>\n    <g>\n        <path d=\"M0 0\"/>\n    </g>\n</svg>\n"
        );
    }
}
