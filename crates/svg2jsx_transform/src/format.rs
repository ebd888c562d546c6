//! Formatting a document into the markup of a component.
//!
//! The root `<svg>` is opened over multiple lines, with `className={className}` followed
//! by each of it's attributes on their own line. Every other tag starts on a new line
//! at the same indent, including the closing tags of nested elements.
//!
//! ```text
//! <svg
//!         className={className}
//!         viewBox="0 0 24 24">
//!         <g fill="none">
//!         <path d="M0 0h24v24H0z"/>
//!         </g>
//!     </svg>
//! ```
use std::{
    fmt::{self, Write},
    sync::LazyLock,
};

use regex::Regex;
use svg2jsx_ast::{element::Element, name::QualName, node::Node};

use crate::wrap::wrap_path_data;

/// The indent of the root closing tag
pub const ROOT_INDENT: usize = 4;
/// The indent of the root's attributes and of every tag within the root
pub const BODY_INDENT: usize = 8;
/// The indent of the continuation lines of wrapped attribute values
pub const WRAP_INDENT: usize = 12;

/// The attribute given to the root, binding the component's `className` prop
const CLASS_NAME_PROP: &str = "className={className}";

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Formats the root element and it's descendants as the markup of a component.
///
/// Any `class` attribute of the root is replaced by `className={className}`, and
/// `class` attributes of other elements are renamed to `className`.
///
/// # Errors
///
/// If writing to the output fails
pub fn format_markup(root: &Element) -> Result<String, fmt::Error> {
    let mut markup = String::new();
    let mut formatter = Formatter {
        output: &mut markup,
    };
    formatter.root(root)?;

    let markup = BLANK_LINES.replace_all(&markup, "\n");
    Ok(markup.trim().to_string())
}

struct Formatter<'o> {
    output: &'o mut String,
}

impl Formatter<'_> {
    fn root(&mut self, root: &Element) -> fmt::Result {
        write!(self.output, "<{}", root.name)?;
        self.new_line(BODY_INDENT)?;
        self.output.write_str(CLASS_NAME_PROP)?;
        for attr in &root.attributes {
            if attr.name.is("class") || attr.name.is("className") {
                log::debug!("Formatter::root: replacing class: {}", attr.value);
                continue;
            }
            self.new_line(BODY_INDENT)?;
            self.attribute(&attr.name, &attr.value)?;
        }
        self.output.write_char('>')?;

        self.children(root)?;

        self.new_line(ROOT_INDENT)?;
        write!(self.output, "</{}>", root.name)
    }

    fn children(&mut self, element: &Element) -> fmt::Result {
        for child in &element.children {
            match child {
                Node::Element(element) => self.element(element)?,
                Node::Text(text) => write_escaped_text(self.output, text)?,
                Node::Comment(comment) => self.comment(comment)?,
            }
        }
        Ok(())
    }

    fn element(&mut self, element: &Element) -> fmt::Result {
        self.new_line(BODY_INDENT)?;
        write!(self.output, "<{}", element.name)?;
        for attr in &element.attributes {
            self.output.write_char(' ')?;
            self.attribute(&attr.name, &attr.value)?;
        }

        if element.children.is_empty() {
            return self.output.write_str("/>");
        }
        self.output.write_char('>')?;
        self.children(element)?;
        self.new_line(BODY_INDENT)?;
        write!(self.output, "</{}>", element.name)
    }

    fn attribute(&mut self, name: &QualName, value: &str) -> fmt::Result {
        if name.is("class") {
            self.output.write_str("className")?;
        } else {
            write!(self.output, "{name}")?;
        }
        self.output.write_str("=\"")?;
        write_escaped_attribute(self.output, &wrap_path_data(value, WRAP_INDENT))?;
        self.output.write_char('"')
    }

    fn comment(&mut self, comment: &str) -> fmt::Result {
        self.new_line(BODY_INDENT)?;
        // `*/` would end the expression's comment early
        write!(self.output, "{{/*{}*/}}", comment.replace("*/", "* /"))
    }

    fn new_line(&mut self, indent: usize) -> fmt::Result {
        write!(self.output, "\n{:indent$}", "")
    }
}

/// Writes text with the characters which are significant in JSX as entities
fn write_escaped_text(output: &mut String, text: &str) -> fmt::Result {
    write_escaped(output, text, |char| match char {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '{' => Some("&#123;"),
        '}' => Some("&#125;"),
        _ => None,
    })
}

fn write_escaped_attribute(output: &mut String, value: &str) -> fmt::Result {
    write_escaped(output, value, |char| match char {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        _ => None,
    })
}

fn write_escaped(
    output: &mut String,
    value: &str,
    escape: impl Fn(char) -> Option<&'static str>,
) -> fmt::Result {
    let mut part_start = 0;
    for (index, char) in value.char_indices() {
        if let Some(escaped) = escape(char) {
            output.write_str(&value[part_start..index])?;
            output.write_str(escaped)?;
            part_start = index + char.len_utf8();
        }
    }
    output.write_str(&value[part_start..])
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use svg2jsx_ast::parse::roxmltree::parse;

    use super::format_markup;

    fn format(svg: &str) -> String {
        format_markup(&parse(svg).unwrap().root).unwrap()
    }

    #[test]
    fn format_root() {
        assert_eq!(
            format(
                r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon"   width="24"
                    viewBox="0 0 24 24"/>"#
            ),
            r#"<svg
        className={className}
        xmlns="http://www.w3.org/2000/svg"
        width="24"
        viewBox="0 0 24 24">
    </svg>"#
        );
    }

    #[test]
    fn format_root_class_name() {
        assert_eq!(
            format(r#"<svg className="x" class="y" width="24"/>"#),
            r#"<svg
        className={className}
        width="24">
    </svg>"#
        );
    }

    #[test]
    fn format_body() {
        assert_eq!(
            format(
                r#"<svg viewBox="0 0 24 24"><g class="layer" fill="none"><path d="M0 0h24v24H0z"/><circle cx="12" cy="12" r="4"/></g><rect width="1" height="1"/></svg>"#
            ),
            r#"<svg
        className={className}
        viewBox="0 0 24 24">
        <g className="layer" fill="none">
        <path d="M0 0h24v24H0z"/>
        <circle cx="12" cy="12" r="4"/>
        </g>
        <rect width="1" height="1"/>
    </svg>"#
        );
    }

    #[test]
    fn format_text_and_comments() {
        assert_eq!(
            format(
                r#"<svg><!--! MIT licensed */ --><text x="0">{a} &lt; b &amp; "c"<tspan>d</tspan></text></svg>"#
            ),
            r#"<svg
        className={className}>
        {/*! MIT licensed * / */}
        <text x="0">&#123;a&#125; &lt; b &amp; "c"
        <tspan>d
        </tspan>
        </text>
    </svg>"#
        );
    }

    #[test]
    fn format_blank_lines() {
        assert_eq!(
            format("<svg><text>a\n\n   \nb</text></svg>"),
            "<svg\n        className={className}>\n        <text>a\nb\n        </text>\n    </svg>"
        );
    }

    #[test]
    fn format_attribute_values() {
        let d = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.41 0-8-3.59-8-8z";
        assert_eq!(
            format(&format!(
                r#"<svg xmlns:xlink="http://www.w3.org/1999/xlink" data-title="a &quot;b&quot; &amp; c"><path d="{d}"/><use xlink:href="&lt;x&gt;"/></svg>"#
            )),
            r#"<svg
        className={className}
        xmlns:xlink="http://www.w3.org/1999/xlink"
        data-title="a &quot;b&quot; &amp; c">
        <path d="M12 2
            C6.48 2 2 6.48 2 12
            s4.48 10 10 10 10-4.48 10-10
            S17.52 2 12 2
            z
            m0 18
            c-4.41 0-8-3.59-8-8
            z"/>
        <use xlink:href="&lt;x&gt;"/>
    </svg>"#
        );
    }
}
