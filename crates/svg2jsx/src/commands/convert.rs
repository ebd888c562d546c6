use std::{io::Write, path::PathBuf};

use anyhow::anyhow;
use svg2jsx_transform::{convert_batch, BatchResult, Options, SourceFile};

use crate::{args::RunCommand, config::Config, walk::Walk};

#[derive(clap::Args, Debug)]
/// Converts the given SVG documents into React components.
pub struct Convert {
    /// The target paths to convert
    #[clap(value_parser)]
    pub paths: Vec<PathBuf>,
    /// The directory to write components to, reproducing the structure of the input.
    /// Defaults to standard output.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
    /// A path to the specified config.
    /// If no config is specified the current config will be printed instead.
    #[clap(long, short, num_args(0..=1))]
    pub config: Option<Vec<PathBuf>>,
    /// If the path is a directory, whether to walk through and convert its subdirectories
    #[clap(long, short, default_value = "false")]
    pub recursive: bool,
    /// Search through hidden files and directories
    #[clap(long, short = '.', default_value = "false")]
    pub hidden: bool,
    /// Disregard `.gitignore` and `.ignore` files
    #[clap(long, default_value = "false")]
    pub no_ignore: bool,
    /// Annotate the props of each component, writing `.tsx` files
    #[clap(long, short, default_value = "false")]
    pub typescript: bool,
    /// Remove unused ids and minify the referenced ones
    #[clap(long, default_value = "false")]
    pub cleanup_ids: bool,
    /// The file name of a document read from standard input, which names the component
    #[clap(long, default_value = "SvgIcon.svg")]
    pub filename: String,
}

impl RunCommand for Convert {
    fn run(self, config: Config) -> anyhow::Result<()> {
        let Some(config) = self.handle_config(config)? else {
            return Ok(());
        };
        let options = self.options(&config);

        let files = Walk {
            paths: &self.paths,
            recursive: self.recursive,
            hidden: self.hidden,
            no_ignore: self.no_ignore,
            stdin_name: &self.filename,
        }
        .collect()?;
        let result = convert_batch(files, options);

        if let Some(output) = &self.output {
            write_files(output, &result.files)?;
        } else {
            print_files(std::io::stdout().lock(), &result.files)?;
        }
        report(std::io::stderr().lock(), &result)?;

        if result.errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!(
                "{} of {} files failed to convert",
                result.errors.len(),
                result.errors.len() + result.processed_count
            ))
        }
    }
}

impl Convert {
    /// Returns the configured options, with any flags applied over them.
    pub fn options(&self, config: &Config) -> Options {
        let mut options = config.options();
        if self.typescript {
            options.typescript = true;
        }
        if self.cleanup_ids {
            options.cleanup_ids = true;
        }
        options
    }

    fn handle_config(&self, config: Config) -> anyhow::Result<Option<Config>> {
        if let Some(config_paths) = &self.config {
            if let Some(config_path) = config_paths.first() {
                log::debug!("using specified config");
                let file = std::fs::read_to_string(config_path)?;
                Config::parse(&file).map_err(|e| anyhow!(e)).map(Some)
            } else {
                log::debug!("printing config");
                serde_json::to_writer(std::io::stdout(), &config.resolved())?;
                Ok(None)
            }
        } else {
            log::debug!("using inferred config");
            Ok(Some(config))
        }
    }
}

/// Writes each component into `output`, creating directories as needed.
fn write_files(output: &std::path::Path, files: &[SourceFile]) -> anyhow::Result<()> {
    for file in files {
        let path = output.join(&file.name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &file.content)?;
        log::info!("wrote {}", path.to_string_lossy());
    }
    Ok(())
}

/// Prints each component, headed by it's name when there's more than one.
fn print_files<W: Write>(mut writer: W, files: &[SourceFile]) -> std::io::Result<()> {
    if let [file] = files {
        return writeln!(writer, "{}", file.content);
    }
    for file in files {
        writeln!(writer, "// {}\n{}\n", file.name, file.content)?;
    }
    Ok(())
}

fn report<W: Write>(mut writer: W, result: &BatchResult) -> std::io::Result<()> {
    writeln!(writer, "Processed {} files", result.processed_count)?;
    for error in &result.errors {
        writeln!(writer, "  {}: {}", error.file, error.error)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use svg2jsx_transform::{BatchError, BatchResult, Options, SourceFile};

    use super::{print_files, report, write_files, Convert};
    use crate::config::Config;

    fn file(name: &str, content: &str) -> SourceFile {
        SourceFile {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    fn command() -> Convert {
        Convert {
            paths: vec![],
            output: None,
            config: None,
            recursive: false,
            hidden: false,
            no_ignore: false,
            typescript: false,
            cleanup_ids: false,
            filename: "SvgIcon.svg".to_string(),
        }
    }

    #[test]
    fn options_override_config() {
        let config = Config {
            options: Some(Options {
                cleanup_ids: true,
                ..Options::default()
            }),
            serve: None,
        };
        assert_eq!(
            command().options(&config),
            Options {
                cleanup_ids: true,
                ..Options::default()
            }
        );

        let convert = Convert {
            typescript: true,
            ..command()
        };
        assert_eq!(
            convert.options(&Config::default()),
            Options {
                typescript: true,
                ..Options::default()
            }
        );
    }

    #[test]
    fn print_single_file() -> anyhow::Result<()> {
        let mut out = vec![];
        print_files(&mut out, &[file("a.jsx", "const A = 1")])?;
        assert_eq!(String::from_utf8(out)?, "const A = 1\n");
        Ok(())
    }

    #[test]
    fn print_many_files() -> anyhow::Result<()> {
        let mut out = vec![];
        print_files(&mut out, &[file("a.jsx", "const A = 1"), file("b.jsx", "const B = 2")])?;
        assert_eq!(
            String::from_utf8(out)?,
            "// a.jsx\nconst A = 1\n\n// b.jsx\nconst B = 2\n\n"
        );
        Ok(())
    }

    #[test]
    fn report_errors() -> anyhow::Result<()> {
        let mut out = vec![];
        report(
            &mut out,
            &BatchResult {
                processed_count: 2,
                errors: vec![BatchError {
                    file: "notes.txt".to_string(),
                    error: "Not an SVG file".to_string(),
                }],
                files: vec![],
            },
        )?;
        assert_eq!(
            String::from_utf8(out)?,
            "Processed 2 files\n  notes.txt: Not an SVG file\n"
        );
        Ok(())
    }

    #[test]
    fn write_nested_files() -> anyhow::Result<()> {
        let output = std::env::temp_dir().join(format!("svg2jsx-convert-{}", std::process::id()));
        write_files(
            &output,
            &[file("nav/arrow.tsx", "const Arrow = 1"), file("logo.tsx", "const Logo = 2")],
        )?;
        assert_eq!(
            std::fs::read_to_string(output.join("nav/arrow.tsx"))?,
            "const Arrow = 1"
        );
        assert_eq!(std::fs::read_to_string(output.join("logo.tsx"))?, "const Logo = 2");
        std::fs::remove_dir_all(output)?;
        Ok(())
    }
}
