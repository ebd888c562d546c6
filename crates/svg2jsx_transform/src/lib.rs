/*!
Converts SVG documents into the source code of React components.

A document is optimised, then formatted so the root `<svg>` takes a `className` prop,
and finally wrapped in an arrow-function component named after the file it came from.

# Example

```
use svg2jsx_transform::{convert, Options};

let source = convert(
    r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon" viewBox="0 0 24 24">
    <path d="M0 0h24v24H0z"/>
</svg>"#,
    "my-icon.svg",
    Options {
        typescript: true,
        ..Options::default()
    },
)
.unwrap();

assert_eq!(
    source,
    r#"const MyIcon = ({ className = '' }: { className?: string }) => (
    <svg
        className={className}
        xmlns="http://www.w3.org/2000/svg"
        viewBox="0 0 24 24">
        <path d="M0 0h24v24H0z"/>
    </svg>
)

export default MyIcon"#
);
```
*/
pub mod batch;
pub mod emit;
pub mod error;
pub mod format;
pub mod naming;
pub mod options;
pub mod wrap;

use svg2jsx_ast::parse::roxmltree::parse;
use svg2jsx_optimiser::{Error as OptimiserError, Jobs, Optimiser};

pub use crate::batch::{convert_batch, convert_batch_with, BatchError, BatchResult, SourceFile};
pub use crate::error::{ConversionFailed, Input, Reason, Structure};
pub use crate::options::Options;

/// Converts SVG markup into the source of a React component, using the default
/// optimiser.
///
/// See [`convert_with`]
///
/// # Errors
///
/// See [`convert_with`]
pub fn convert(svg: &str, filename: &str, options: Options) -> Result<String, ConversionFailed> {
    convert_with(&Jobs::default(), svg, filename, options)
}

/// Converts SVG markup into the source of a React component.
///
/// The component is named after `filename`, and the markup is optimised by `optimiser`,
/// cleaning up ids when `options.cleanup_ids` is set.
///
/// # Errors
///
/// - If the markup or filename is empty
/// - If the optimiser fails, such as when the markup isn't well-formed
/// - If the root of the document isn't an `<svg>` element, or isn't the only root
pub fn convert_with<O: Optimiser + ?Sized>(
    optimiser: &O,
    svg: &str,
    filename: &str,
    options: Options,
) -> Result<String, ConversionFailed> {
    if svg.trim().is_empty() {
        return Err(Reason::MissingInput(Input::Svg).into());
    }
    if filename.trim().is_empty() {
        return Err(Reason::MissingInput(Input::Filename).into());
    }

    let name = naming::component_name(filename);
    log::debug!("convert: converting {filename} to {name}");

    let optimised = optimiser
        .optimise(svg, options.cleanup_ids)
        .map_err(|err| Reason::from_optimiser(svg, err))?;
    let document = parse(&optimised)
        .map_err(|err| Reason::from_optimiser(&optimised, OptimiserError::Parse(err)))?;
    if !document.root.name.is("svg") {
        return Err(Reason::StructuralAssumptionViolated(Structure::RootNotSvg(
            document.root.name.to_string(),
        ))
        .into());
    }

    let markup = format::format_markup(&document.root).map_err(Reason::Write)?;
    log::trace!("convert: formatted markup:\n{markup}");
    emit::emit_component(&name, &markup, options.typescript)
        .map_err(|err| Reason::Write(err).into())
}

#[cfg(test)]
#[ctor::ctor]
fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}
