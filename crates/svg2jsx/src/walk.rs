//! Provides a walker capable of iterating over directories and collecting the SVG documents
//! within them.
use std::{
    ffi::OsStr,
    io::{IsTerminal, Read},
    path::{Path, PathBuf},
};

use anyhow::anyhow;
use ignore::WalkBuilder;
use svg2jsx_transform::SourceFile;

/// This will iterate over a set of paths.
pub struct Walk<'a> {
    /// The set of paths to visit
    pub paths: &'a [PathBuf],
    /// If the path is a directory, whether to walk through its subdirectories
    pub recursive: bool,
    /// Whether to search through hidden files and directories
    pub hidden: bool,
    /// Whether to disregard ignore patterns
    pub no_ignore: bool,
    /// The name given to a document read from standard input
    pub stdin_name: &'a str,
}

impl Walk<'_> {
    /// Collects the documents of each path, or of standard input when it's piped and
    /// no paths are given.
    ///
    /// Each file is named by it's path relative to the visited path, so that the
    /// directory structure can be reproduced in an output directory.
    ///
    /// # Errors
    ///
    /// When no paths are given, or standard input can't be read.
    pub fn collect(&self) -> anyhow::Result<Vec<SourceFile>> {
        if !std::io::stdin().is_terminal()
            && self.paths.len() <= 1
            && self
                .paths
                .first()
                .is_none_or(|path| path.as_os_str() == OsStr::new("."))
        {
            return self.handle_stdin();
        }
        if self.paths.is_empty() {
            return Err(anyhow!("This command requires at least one path to convert"));
        }

        let mut files = vec![];
        for path in self.paths {
            self.handle_path(path, &mut files);
        }
        Ok(files)
    }

    fn handle_stdin(&self) -> anyhow::Result<Vec<SourceFile>> {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(vec![SourceFile {
            name: self.stdin_name.to_string(),
            content,
        }])
    }

    fn handle_path(&self, path: &Path, files: &mut Vec<SourceFile>) {
        let walker = WalkBuilder::new(path)
            .max_depth(if self.recursive { None } else { Some(1) })
            .hidden(!self.hidden)
            .git_ignore(!self.no_ignore)
            .ignore(!self.no_ignore)
            .follow_links(true)
            .build();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("skipping entry: {err}");
                    continue;
                }
            };
            if entry.file_type().is_none_or(|f| !f.is_file()) {
                continue;
            }
            // Paths given explicitly are read whatever their extension
            if entry.depth() > 0 && !has_svg_extension(entry.path()) {
                continue;
            }
            let Some(name) = relative_name(path, entry.path()) else {
                continue;
            };
            match std::fs::read_to_string(entry.path()) {
                Ok(content) => files.push(SourceFile { name, content }),
                Err(err) => log::warn!("skipping {}: {err}", entry.path().to_string_lossy()),
            }
        }
    }
}

fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|extension| extension.eq_ignore_ascii_case("svg"))
}

/// Returns the path of `file` relative to the visited `root`, or the file's name
/// when `root` is the file itself.
fn relative_name(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    let relative = if relative.as_os_str().is_empty() {
        Path::new(file.file_name()?)
    } else {
        relative
    };
    Some(relative.to_string_lossy().replace('\\', "/"))
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::{has_svg_extension, relative_name};

    #[test]
    fn svg_extension() {
        assert!(has_svg_extension(Path::new("icons/arrow.svg")));
        assert!(has_svg_extension(Path::new("icons/ARROW.SVG")));
        assert!(!has_svg_extension(Path::new("icons/arrow.png")));
        assert!(!has_svg_extension(Path::new("icons/svg")));
    }

    #[test]
    fn relative_names() {
        assert_eq!(
            relative_name(Path::new("icons"), Path::new("icons/nav/arrow.svg")).as_deref(),
            Some("nav/arrow.svg")
        );
        assert_eq!(
            relative_name(Path::new("icons/arrow.svg"), Path::new("icons/arrow.svg")).as_deref(),
            Some("arrow.svg")
        );
        assert_eq!(
            relative_name(Path::new("icons"), Path::new("other/arrow.svg")),
            None
        );
    }
}
