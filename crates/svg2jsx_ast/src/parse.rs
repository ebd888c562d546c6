//! Parsers which build a [`crate::document::Document`] from source text.
pub mod roxmltree;
