//! Error types.
use std::fmt::Display;

use svg2jsx_ast::{parse::roxmltree::ParseError, xmlwriter};

#[derive(Debug)]
/// Errors which may be generated when running optimisation jobs
pub enum JobsError {
    /// There was an issue with a regex string in the configuration
    InvalidUserRegex(regex::Error),
}
impl Display for JobsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUserRegex(e) => {
                f.write_fmt(format_args!("Invalid regex in configuration: {e}"))
            }
        }
    }
}
impl std::error::Error for JobsError {}

#[derive(Debug)]
/// Errors which may occur while optimising a document
pub enum Error {
    /// The document could not be parsed
    Parse(ParseError),
    /// A job failed while processing the document
    Jobs(JobsError),
    /// The optimised document could not be written
    Write(xmlwriter::Error),
}
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Jobs(e) => e.fmt(f),
            Self::Write(e) => e.fmt(f),
        }
    }
}
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Jobs(e) => Some(e),
            Self::Write(e) => Some(e),
        }
    }
}
