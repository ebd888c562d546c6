//! Deriving component names from filenames.

/// The name given to components when one can't be derived from the filename
pub const FALLBACK_NAME: &str = "SvgIcon";

/// Derives a `PascalCase` component name from the name of a file.
///
/// Any directories and the trailing extension are stripped, the rest is split on runs
/// of `-`, `_` or whitespace, and each segment is capitalised and joined. Characters
/// which can't appear in an identifier are dropped, and names starting with a digit
/// are prefixed with `Svg`.
///
/// The result is empty when nothing usable is left, such as for `.svg`.
///
/// ```
/// use svg2jsx_transform::naming::component_name;
///
/// assert_eq!(component_name("arrow-left_icon.svg"), "ArrowLeftIcon");
/// assert_eq!(component_name(".svg"), "");
/// ```
pub fn component_name(filename: &str) -> String {
    let basename = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    let stem = match basename.rfind('.') {
        Some(index) => &basename[..index],
        None => basename,
    };

    let mut name: String = stem
        .split(|char: char| char == '-' || char == '_' || char.is_whitespace())
        .map(capitalise)
        .collect();
    if name.starts_with(|char: char| char.is_ascii_digit()) {
        name.insert_str(0, "Svg");
    }
    name
}

/// Uppercases the first character and lowercases the rest, dropping characters which
/// aren't alphanumeric
fn capitalise(segment: &str) -> String {
    let mut chars = segment.chars().filter(|char| char.is_alphanumeric());
    let Some(first) = chars.next() else {
        return String::new();
    };
    first
        .to_uppercase()
        .chain(chars.flat_map(char::to_lowercase))
        .collect()
}

#[cfg(test)]
mod test {
    use super::component_name;

    #[test]
    fn names() {
        assert_eq!(component_name("arrow-left_icon.svg"), "ArrowLeftIcon");
        assert_eq!(component_name("my-icon.svg"), "MyIcon");
        assert_eq!(component_name("HOME.SVG"), "Home");
        assert_eq!(component_name("chevronDown.svg"), "Chevrondown");
        assert_eq!(component_name("two  words\tand--dashes.svg"), "TwoWordsAndDashes");
        assert_eq!(component_name("no-extension"), "NoExtension");
        assert_eq!(component_name("icon.v2.svg"), "Iconv2");
    }

    #[test]
    fn names_edge_cases() {
        assert_eq!(component_name(".svg"), "");
        assert_eq!(component_name(""), "");
        assert_eq!(component_name("---.svg"), "");
        assert_eq!(component_name("icons/nested/close.svg"), "Close");
        assert_eq!(component_name("C:\\icons\\close.svg"), "Close");
        assert_eq!(component_name("24px-grid.svg"), "Svg24pxGrid");
        assert_eq!(component_name("icon (1).svg"), "Icon1");
        assert_eq!(component_name("étoile.svg"), "Étoile");
    }

    #[test]
    fn names_are_deterministic() {
        assert_eq!(
            component_name("arrow-left_icon.svg"),
            component_name("arrow-left_icon.svg")
        );
    }
}
