//! WASM bindings for svg2jsx
extern crate console_error_panic_hook;
use svg2jsx_transform::{BatchResult, Options, SourceFile};

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[allow(clippy::needless_pass_by_value)]
/// Convert an SVG document into the source of a React component
///
/// # Errors
/// - If the svg or filename is empty
/// - If the document fails to parse
/// - If the document isn't rooted by an `<svg>` element
///
/// # Examples
///
/// Convert with the default options
///
/// ```js
/// import { convert } from "@svg2jsx/wasm";
///
/// const jsx = convert(`<svg />`, "my-icon.svg");
/// ```
///
/// Or, write typescript
///
/// ```js
/// import { convert } from "@svg2jsx/wasm";
///
/// const tsx = convert(`<svg />`, "my-icon.svg", { typescript: true });
/// ```
pub fn convert(svg: &str, filename: &str, options: Option<Options>) -> Result<String, String> {
    console_error_panic_hook::set_once();

    svg2jsx_transform::convert(svg, filename, options.unwrap_or_default())
        .map_err(|err| err.to_string())
}

#[wasm_bindgen(js_name = convertBatch)]
#[allow(clippy::needless_pass_by_value)]
/// Convert a list of `{ name, content }` files into components
///
/// Files which can't be converted are listed in the result's `errors`.
///
/// # Errors
/// If `files` isn't a list of `{ name, content }` objects
///
/// # Examples
///
/// ```js
/// import { convertBatch } from "@svg2jsx/wasm";
///
/// const { processedCount, errors, files } = convertBatch(
///     [{ name: "arrow.svg", content: `<svg />` }],
///     { typescript: true },
/// );
/// ```
pub fn convert_batch(files: JsValue, options: Option<Options>) -> Result<BatchResult, String> {
    console_error_panic_hook::set_once();

    let files: Vec<SourceFile> =
        serde_wasm_bindgen::from_value(files).map_err(|err| err.to_string())?;
    Ok(svg2jsx_transform::convert_batch(
        files,
        options.unwrap_or_default(),
    ))
}
