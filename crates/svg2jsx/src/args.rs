//! Types for parsing the command line arguments of svg2jsx
use clap::{Parser, Subcommand};

use crate::{
    commands::{Convert, Serve},
    config::Config,
};

/// A command which can be run from the command line
pub trait RunCommand {
    /// # Errors
    ///
    /// If any part of the lifecycle fails
    /// * Fails to read or parse any files
    /// * Fails to convert or write any files
    /// * Fails to bind or serve over HTTP
    fn run(self, config: Config) -> anyhow::Result<()>;
}

#[derive(Parser)]
#[clap(
    bin_name = "svg2jsx",
    name = "svg2jsx",
    author,
    version,
    about = "Turn SVG documents into React components",
    long_about = None
)]
/// The arguments of svg2jsx
pub struct Args {
    #[clap(subcommand)]
    /// The command to run
    pub command: Command,
}

#[derive(Subcommand)]
/// The commands available to svg2jsx
pub enum Command {
    /// Convert SVG documents into React components
    Convert(Convert),
    /// Serve the conversion API over HTTP
    Serve(Serve),
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::{Args, Command};

    #[test]
    fn parse_convert() {
        let args = Args::parse_from([
            "svg2jsx",
            "convert",
            "icons",
            "-o",
            "components",
            "-r",
            "--typescript",
            "--cleanup-ids",
        ]);
        let Command::Convert(convert) = args.command else {
            panic!("expected convert");
        };
        assert_eq!(convert.paths, [std::path::PathBuf::from("icons")]);
        assert_eq!(convert.output, Some("components".into()));
        assert!(convert.recursive);
        assert!(convert.typescript);
        assert!(convert.cleanup_ids);
        assert!(convert.config.is_none());
    }

    #[test]
    fn parse_config_without_value() {
        let args = Args::parse_from(["svg2jsx", "convert", "--config"]);
        let Command::Convert(convert) = args.command else {
            panic!("expected convert");
        };
        assert_eq!(convert.config, Some(vec![]));
    }

    #[test]
    fn parse_serve() {
        let args = Args::parse_from(["svg2jsx", "serve", "--address", "0.0.0.0:8080"]);
        let Command::Serve(serve) = args.command else {
            panic!("expected serve");
        };
        assert_eq!(serve.address.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(serve.threads, None);
    }
}
