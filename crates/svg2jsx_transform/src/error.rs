//! Error types.
use std::fmt::Display;

use svg2jsx_ast::parse::roxmltree::{parse, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An input required for conversion
pub enum Input {
    /// The SVG markup
    Svg,
    /// The name of the file the markup came from, used to name the component
    Filename,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A way in which a document doesn't have the shape of an SVG image
pub enum Structure {
    /// The root element is some other element, such as `<html>`
    RootNotSvg(String),
    /// More than one element sits at the top level of the document
    MultipleRoots,
}

#[derive(Debug)]
/// The cause of a failed conversion
pub enum Reason {
    /// The markup or filename was empty
    MissingInput(Input),
    /// The optimiser couldn't process the markup, usually because it isn't well-formed
    OptimisationFailed(svg2jsx_optimiser::Error),
    /// The document isn't rooted by a single `<svg>` element
    StructuralAssumptionViolated(Structure),
    /// The component's source couldn't be written
    Write(std::fmt::Error),
}

#[derive(Debug)]
/// The error returned when a document can't be converted into a component.
///
/// Whatever stage failed, no partial output is produced.
pub struct ConversionFailed {
    /// Why conversion failed
    pub reason: Reason,
}

impl Reason {
    /// Classifies an error raised while optimising `source`.
    ///
    /// A parse failure at an element following a complete root element is reported as
    /// [`Structure::MultipleRoots`].
    pub fn from_optimiser(source: &str, error: svg2jsx_optimiser::Error) -> Self {
        if let svg2jsx_optimiser::Error::Parse(ParseError::ROXML(parse_error)) = &error {
            let pos = parse_error.pos();
            if follows_root(source, pos.row, pos.col) {
                return Self::StructuralAssumptionViolated(Structure::MultipleRoots);
            }
        }
        Self::OptimisationFailed(error)
    }
}

/// Whether an element starts at `row`:`col` of `source`, after a complete document.
fn follows_root(source: &str, row: u32, col: u32) -> bool {
    let Some(offset) = byte_offset(source, row, col) else {
        return false;
    };
    let (Some(document), Some(rest)) = (source.get(..offset), source.get(offset..)) else {
        return false;
    };
    let mut rest = rest.trim_start().chars();
    rest.next() == Some('<')
        && rest
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == ':')
        && parse(document).is_ok()
}

/// Converts a 1-based text position into a byte offset of `source`
fn byte_offset(source: &str, row: u32, col: u32) -> Option<usize> {
    let mut offset = 0;
    for (index, line) in source.split_inclusive('\n').enumerate() {
        if index + 1 == row as usize {
            let col = (col as usize).saturating_sub(1);
            return Some(
                offset
                    + line
                        .char_indices()
                        .nth(col)
                        .map_or(line.len(), |(index, _)| index),
            );
        }
        offset += line.len();
    }
    None
}

impl From<Reason> for ConversionFailed {
    fn from(reason: Reason) -> Self {
        Self { reason }
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Svg => f.write_str("SVG content is required"),
            Self::Filename => f.write_str("Filename is required"),
        }
    }
}

impl Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootNotSvg(name) => {
                f.write_fmt(format_args!("Expected a root <svg> element, found <{name}>"))
            }
            Self::MultipleRoots => {
                f.write_str("Expected a single root <svg> element, found several root elements")
            }
        }
    }
}

impl Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput(input) => input.fmt(f),
            Self::OptimisationFailed(err) => err.fmt(f),
            Self::StructuralAssumptionViolated(structure) => structure.fmt(f),
            Self::Write(err) => err.fmt(f),
        }
    }
}

impl Display for ConversionFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Failed to convert SVG to React component: {}",
            self.reason
        ))
    }
}

impl std::error::Error for ConversionFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.reason {
            Reason::OptimisationFailed(err) => Some(err),
            Reason::Write(err) => Some(err),
            Reason::MissingInput(_) | Reason::StructuralAssumptionViolated(_) => None,
        }
    }
}

#[test]
fn display() {
    let error = ConversionFailed::from(Reason::MissingInput(Input::Filename));
    assert_eq!(
        error.to_string(),
        "Failed to convert SVG to React component: Filename is required"
    );

    let error = ConversionFailed::from(Reason::StructuralAssumptionViolated(
        Structure::RootNotSvg("html".to_string()),
    ));
    assert_eq!(
        error.to_string(),
        "Failed to convert SVG to React component: Expected a root <svg> element, found <html>"
    );
}

#[test]
fn element_after_root() {
    assert_eq!(byte_offset("<svg/><svg/>", 1, 7), Some(6));
    assert_eq!(byte_offset("<svg/>\n  <g/>", 2, 3), Some(9));
    assert_eq!(byte_offset("<svg/>", 3, 1), None);

    assert!(follows_root("<svg/><svg/>", 1, 7));
    assert!(follows_root("<svg/>\n  <g/>", 2, 1));
    assert!(!follows_root("<svg/>text", 1, 7));
    assert!(!follows_root("<svg><path></svg>", 1, 12));
    assert!(!follows_root("<svg/>", 1, 1));
}
