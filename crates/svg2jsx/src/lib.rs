//! The command line interface of svg2jsx, converting SVG documents into React components
//! from files, standard input, or an HTTP API.
pub mod args;
pub mod commands;
pub mod config;
pub mod walk;
