/*!
A streaming XML writer for the owned document tree.

Documents are either written compactly on a single line, or pretty-printed with each
node on it's own line.

### Example

```rust
use svg2jsx_ast::{name::QualName, xmlwriter::*};

fn main() -> Result {
    let mut w = XmlWriter::new(Vec::<u8>::new(), Options::default());
    w.start_element(&QualName::local("svg"))?;
    w.write_attribute(&QualName::local("viewBox"), "0 0 128 128")?;
    w.start_element(&QualName::local("text"))?;
    w.write_attribute(&QualName::local("x"), "10")?;
    w.write_text("length < 5")?;

    assert_eq!(
        String::from_utf8(w.end_document()?).map_err(Error::UTF8)?,
        r#"<svg viewBox="0 0 128 128">
    <text x="10">
        length &lt; 5
    </text>
</svg>
"#
    );
    Ok(())
}
```
*/
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::result;

use crate::name::QualName;

/// A result from serializing a document.
pub type Result = result::Result<(), Error>;

/// An error while serializing a document.
#[derive(Debug)]
pub enum Error {
    /// An error while running an io operation.
    IO(io::Error),
    /// An error after writing to string.
    UTF8(std::string::FromUtf8Error),
    /// Attempted to write attribute before `start_element()` or after `end_element()`.
    AttributeWrittenBeforeElement,
    /// Attempts to write text before `start_element()`.
    TextBeforeElement,
}

/// How nodes are indented.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Indent {
    /// Write the document on a single line, e.g. `<svg><rect fill="red"/></svg>`
    None,
    /// Write each node on a new line, indented by this many spaces per level
    Spaces(u8),
}

/// Options for writing a document.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    /// How nodes are indented.
    ///
    /// Default: 4 spaces
    pub indent: Indent,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            indent: Indent::Spaces(4),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Escape {
    AttributeValue,
    Text,
}

/// An XML writer.
#[derive(Debug)]
pub struct XmlWriter<W: Write> {
    writer: W,
    /// The names of open elements, and whether each has written a child
    open_elements: Vec<(QualName, bool)>,
    /// Whether the start tag of the innermost element is still open for attributes
    in_start_tag: bool,
    written: bool,
    options: Options,
}

impl<W: Write> XmlWriter<W> {
    /// Creates a new `XmlWriter`, writing data in the writer.
    pub fn new(writer: W, options: Options) -> Self {
        XmlWriter {
            writer,
            open_elements: Vec::new(),
            in_start_tag: false,
            written: false,
            options,
        }
    }

    /// Writes a comment, unescaped.
    ///
    /// # Errors
    ///
    /// When io fails.
    pub fn write_comment(&mut self, text: &str) -> Result {
        self.begin_node()?;
        self.write_raw(b"<!--")?;
        self.write_raw(text.as_bytes())?;
        self.write_raw(b"-->")
    }

    /// Starts writing a new element.
    ///
    /// This method writes only the `<tag-name` part.
    ///
    /// # Errors
    ///
    /// When io fails.
    pub fn start_element(&mut self, name: &QualName) -> Result {
        self.begin_node()?;
        write!(self.writer, "<{name}").map_err(Error::IO)?;
        self.open_elements.push((name.clone(), false));
        self.in_start_tag = true;
        Ok(())
    }

    /// Writes an attribute, escaping `&<>"` in the value.
    ///
    /// # Errors
    ///
    /// - When called before `start_element()`.
    /// - When called after `end_element()`.
    pub fn write_attribute(&mut self, name: &QualName, value: &str) -> Result {
        if !self.in_start_tag {
            return Err(Error::AttributeWrittenBeforeElement);
        }
        write!(self.writer, " {name}=\"").map_err(Error::IO)?;
        self.write_escaped(value, Escape::AttributeValue)?;
        self.write_raw(b"\"")
    }

    /// Writes a text node, escaping `&<>`.
    ///
    /// # Errors
    ///
    /// - When called not after `start_element()`.
    pub fn write_text(&mut self, text: &str) -> Result {
        if self.open_elements.is_empty() {
            return Err(Error::TextBeforeElement);
        }
        self.begin_node()?;
        self.write_escaped(text, Escape::Text)
    }

    /// Closes an open element.
    ///
    /// # Errors
    ///
    /// When io fails.
    pub fn end_element(&mut self) -> Result {
        let Some((name, has_children)) = self.open_elements.pop() else {
            return Ok(());
        };
        self.in_start_tag = false;
        if !has_children {
            return self.write_raw(b"/>");
        }
        self.write_new_line()?;
        self.write_indent()?;
        write!(self.writer, "</{name}>").map_err(Error::IO)
    }

    /// Closes all open elements and returns back the writer.
    ///
    /// # Errors
    ///
    /// When io fails.
    pub fn end_document(mut self) -> result::Result<W, Error> {
        while !self.open_elements.is_empty() {
            self.end_element()?;
        }
        self.write_new_line()?;
        Ok(self.writer)
    }

    /// Closes the parent's start tag if needed, then moves to where the next node starts
    fn begin_node(&mut self) -> Result {
        if let Some((_, has_children)) = self.open_elements.last_mut() {
            *has_children = true;
        }
        if self.in_start_tag {
            self.in_start_tag = false;
            self.write_raw(b">")?;
        }
        if self.written {
            self.write_new_line()?;
        }
        self.written = true;
        self.write_indent()
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result {
        self.writer.write_all(bytes).map_err(Error::IO)
    }

    fn write_escaped(&mut self, s: &str, escape: Escape) -> Result {
        let mut start = 0;
        for (index, byte) in s.bytes().enumerate() {
            let entity: &[u8] = match byte {
                b'&' => b"&amp;",
                b'<' => b"&lt;",
                b'>' => b"&gt;",
                b'"' if escape == Escape::AttributeValue => b"&quot;",
                _ => continue,
            };
            self.write_raw(&s.as_bytes()[start..index])?;
            self.write_raw(entity)?;
            start = index + 1;
        }
        self.write_raw(&s.as_bytes()[start..])
    }

    fn write_indent(&mut self) -> Result {
        if let Indent::Spaces(n) = self.options.indent {
            let width = self.open_elements.len() * usize::from(n);
            write!(self.writer, "{:width$}", "").map_err(Error::IO)?;
        }
        Ok(())
    }

    fn write_new_line(&mut self) -> Result {
        if self.options.indent == Indent::None {
            return Ok(());
        }
        self.write_raw(b"\n")
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IO(err) => err.fmt(f),
            Self::UTF8(err) => err.fmt(f),
            Self::AttributeWrittenBeforeElement => {
                "Attempted to write attribute before `start_element()` or after `end_element()`."
                    .fmt(f)
            }
            Self::TextBeforeElement => "Attempts to write text before `start_element()`.".fmt(f),
        }
    }
}
impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::{Error, Indent, Options, XmlWriter};
    use crate::name::QualName;

    fn write(options: Options) -> Result<String, Error> {
        let mut w = XmlWriter::new(Vec::new(), options);
        w.start_element(&QualName::local("svg"))?;
        w.write_attribute(&QualName::local("fill"), "url(\"#a\")")?;
        w.write_comment("note")?;
        w.start_element(&QualName::local("g"))?;
        w.start_element(&QualName::local("path"))?;
        w.write_attribute(&QualName::local("d"), "M0 0")?;
        w.end_element()?;
        w.end_element()?;
        String::from_utf8(w.end_document()?).map_err(Error::UTF8)
    }

    #[test]
    fn no_indent() {
        assert_eq!(
            write(Options {
                indent: Indent::None,
            })
            .unwrap(),
            r#"<svg fill="url(&quot;#a&quot;)"><!--note--><g><path d="M0 0"/></g></svg>"#
        );
    }

    #[test]
    fn spaces_indent() {
        assert_eq!(
            write(Options {
                indent: Indent::Spaces(2),
            })
            .unwrap(),
            r#"<svg fill="url(&quot;#a&quot;)">
  <!--note-->
  <g>
    <path d="M0 0"/>
  </g>
</svg>
"#
        );
    }

    #[test]
    fn attribute_before_element() {
        let mut w = XmlWriter::new(Vec::new(), Options::default());
        assert!(matches!(
            w.write_attribute(&QualName::local("d"), ""),
            Err(Error::AttributeWrittenBeforeElement)
        ));
        assert!(matches!(w.write_text(""), Err(Error::TextBeforeElement)));

        w.start_element(&QualName::local("svg")).unwrap();
        w.start_element(&QualName::local("g")).unwrap();
        w.end_element().unwrap();
        assert!(matches!(
            w.write_attribute(&QualName::local("d"), ""),
            Err(Error::AttributeWrittenBeforeElement)
        ));
    }
}
