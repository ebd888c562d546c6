//! Emitting the source code of a component.
use std::fmt::{self, Write};

use crate::naming::FALLBACK_NAME;

/// The type annotation of the component's props
const PROPS_ANNOTATION: &str = ": { className?: string }";

/// Wraps formatted markup in an arrow-function component, exported by default.
///
/// An empty name is replaced by [`FALLBACK_NAME`]. The props are only annotated with
/// `typescript`.
///
/// # Errors
///
/// If writing to the output fails
///
/// ```
/// use svg2jsx_transform::emit::emit_component;
///
/// assert_eq!(
///     emit_component("Dot", "<svg/>", false).unwrap(),
///     "const Dot = ({ className = '' }) => (\n    <svg/>\n)\n\nexport default Dot"
/// );
/// ```
pub fn emit_component(name: &str, markup: &str, typescript: bool) -> Result<String, fmt::Error> {
    let name = if name.is_empty() { FALLBACK_NAME } else { name };
    let annotation = if typescript { PROPS_ANNOTATION } else { "" };

    let mut source = String::with_capacity(markup.len() + 128);
    writeln!(
        source,
        "const {name} = ({{ className = '' }}{annotation}) => ("
    )?;
    writeln!(source, "    {markup}")?;
    source.write_str(")\n\n")?;
    write!(source, "export default {name}")?;
    Ok(source)
}

#[cfg(test)]
mod test {
    use super::emit_component;

    #[test]
    fn emit_typescript() {
        insta::assert_snapshot!(
            emit_component("MyIcon", "<svg/>", true).unwrap(),
            @r"
        const MyIcon = ({ className = '' }: { className?: string }) => (
            <svg/>
        )

        export default MyIcon
        "
        );
    }

    #[test]
    fn emit_fallback_name() {
        let source = emit_component("", "<svg/>", false).unwrap();
        assert!(source.starts_with("const SvgIcon = ({ className = '' }) => ("));
        assert!(source.ends_with("export default SvgIcon"));
        assert!(!source.ends_with('\n'));
    }
}
