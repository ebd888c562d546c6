//! Converting many documents at once.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use svg2jsx_optimiser::{Jobs, Optimiser};

#[cfg(feature = "wasm")]
use tsify::Tsify;

use crate::{convert_with, options::Options};

/// The error reported for files which don't have an `.svg` extension
pub const NOT_AN_SVG_FILE: &str = "Not an SVG file";

#[cfg_attr(feature = "wasm", derive(Tsify))]
#[cfg_attr(feature = "wasm", tsify(from_wasm_abi, into_wasm_abi))]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
/// A named file and it's content
pub struct SourceFile {
    /// The name of the file, such as `arrow-left.svg`
    pub name: String,
    /// The text content of the file
    pub content: String,
}

#[cfg_attr(feature = "wasm", derive(Tsify))]
#[cfg_attr(feature = "wasm", tsify(into_wasm_abi))]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
/// A file which couldn't be converted
pub struct BatchError {
    /// The name of the file
    pub file: String,
    /// Why the file couldn't be converted
    pub error: String,
}

#[cfg_attr(feature = "wasm", derive(Tsify))]
#[cfg_attr(feature = "wasm", tsify(into_wasm_abi))]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// The outcome of converting a batch of files.
///
/// Both lists are in the order of the files' names.
pub struct BatchResult {
    /// The number of files converted
    pub processed_count: usize,
    /// The files which couldn't be converted
    pub errors: Vec<BatchError>,
    /// The converted components, named after their source file
    pub files: Vec<SourceFile>,
}

/// Converts each file into a component with the default optimiser.
///
/// See [`convert_batch_with`]
pub fn convert_batch(files: Vec<SourceFile>, options: Options) -> BatchResult {
    convert_batch_with(&Jobs::default(), files, options)
}

/// Converts each file into a component, in parallel.
///
/// Files are processed in the order of their names, and a failure of one file never
/// affects another. Files without an `.svg` extension are reported as errors.
pub fn convert_batch_with<O: Optimiser + Sync>(
    optimiser: &O,
    mut files: Vec<SourceFile>,
    options: Options,
) -> BatchResult {
    files.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("convert_batch: converting {} files", files.len());

    let results: Vec<Result<SourceFile, BatchError>> = files
        .into_par_iter()
        .map(|file| convert_file(optimiser, file, options))
        .collect();

    let mut batch = BatchResult::default();
    for result in results {
        match result {
            Ok(file) => batch.files.push(file),
            Err(error) => batch.errors.push(error),
        }
    }
    batch.processed_count = batch.files.len();
    batch
}

fn convert_file<O: Optimiser>(
    optimiser: &O,
    file: SourceFile,
    options: Options,
) -> Result<SourceFile, BatchError> {
    let Some(stem) = svg_stem(&file.name) else {
        log::debug!("convert_batch: skipping {}", file.name);
        return Err(BatchError {
            file: file.name,
            error: NOT_AN_SVG_FILE.to_string(),
        });
    };

    match convert_with(optimiser, &file.content, &file.name, options) {
        Ok(content) => Ok(SourceFile {
            name: format!("{stem}.{}", options.extension()),
            content,
        }),
        Err(error) => {
            log::debug!("convert_batch: failed {}: {error}", file.name);
            Err(BatchError {
                file: file.name,
                error: error.to_string(),
            })
        }
    }
}

/// Returns the name of an svg file without it's extension, or `None` if the file
/// isn't an svg.
pub fn svg_stem(name: &str) -> Option<&str> {
    let split = name.len().checked_sub(".svg".len())?;
    let (stem, extension) = (name.get(..split)?, name.get(split..)?);
    extension.eq_ignore_ascii_case(".svg").then_some(stem)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{convert_batch, svg_stem, BatchError, SourceFile, NOT_AN_SVG_FILE};
    use crate::options::Options;

    fn file(name: &str, content: &str) -> SourceFile {
        SourceFile {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn svg_stems() {
        assert_eq!(svg_stem("icon.svg"), Some("icon"));
        assert_eq!(svg_stem("ICON.SVG"), Some("ICON"));
        assert_eq!(svg_stem(".svg"), Some(""));
        assert_eq!(svg_stem("icon.svg.txt"), None);
        assert_eq!(svg_stem("svg"), None);
        assert_eq!(svg_stem("é.svg"), Some("é"));
        assert_eq!(svg_stem("éé"), None);
    }

    #[test]
    fn batch_order_and_errors() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#;
        let result = convert_batch(
            vec![
                file("b.svg", svg),
                file("a.svg", svg),
                file("c.txt", "hello"),
                file("broken.svg", "<svg>"),
            ],
            Options::default(),
        );

        assert_eq!(result.processed_count, 2);
        let names: Vec<_> = result.files.iter().map(|file| file.name.as_str()).collect();
        assert_eq!(names, ["a.jsx", "b.jsx"]);
        assert!(result.files[0].content.starts_with("const A = "));
        assert!(result.files[1].content.ends_with("export default B"));

        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].file, "broken.svg");
        assert!(result.errors[0]
            .error
            .starts_with("Failed to convert SVG to React component: "));
        assert_eq!(
            result.errors[1],
            BatchError {
                file: "c.txt".to_string(),
                error: NOT_AN_SVG_FILE.to_string(),
            }
        );
    }

    #[test]
    fn batch_typescript() {
        let result = convert_batch(
            vec![file("Icon.SVG", "<svg/>")],
            Options {
                typescript: true,
                ..Options::default()
            },
        );
        assert_eq!(result.files[0].name, "Icon.tsx");
        assert!(result.files[0]
            .content
            .contains("({ className = '' }: { className?: string })"));
    }

    #[test]
    fn batch_result_json() {
        let result = convert_batch(vec![file("c.txt", "")], Options::default());
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"processedCount":0,"errors":[{"file":"c.txt","error":"Not an SVG file"}],"files":[]}"#
        );
    }
}
