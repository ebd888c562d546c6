//! Wrapping long attribute values, such as path data, over multiple lines.
use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// Values longer than this many characters are wrapped
pub const MAX_VALUE_LENGTH: usize = 80;

/// A path command letter followed by everything up to the next command letter
static PATH_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[MLHVCSQTAZmlhvcsqtaz][^MLHVCSQTAZmlhvcsqtaz]*").unwrap());

/// Splits a value longer than [`MAX_VALUE_LENGTH`] characters at path command
/// boundaries, joining each command with a newline and `indent` spaces.
///
/// Shorter values are returned unchanged. Removing the inserted separators from a
/// wrapped value gives back the original.
///
/// ```
/// use svg2jsx_transform::wrap::wrap_path_data;
///
/// assert_eq!(wrap_path_data("M0 0L10 10", 4), "M0 0L10 10");
///
/// let long = "M0 0L10 10".repeat(9);
/// let wrapped = wrap_path_data(&long, 4);
/// assert!(wrapped.starts_with("M0 0\n    L10 10\n    M0 0"));
/// assert_eq!(wrapped.replace("\n    ", ""), long);
/// ```
pub fn wrap_path_data(value: &str, indent: usize) -> Cow<'_, str> {
    if value.chars().count() <= MAX_VALUE_LENGTH {
        return Cow::Borrowed(value);
    }

    let mut segments = Vec::new();
    let mut commands = PATH_COMMAND.find_iter(value).peekable();
    // Anything before the first command stays as it's own segment
    let first_start = commands.peek().map_or(value.len(), regex::Match::start);
    if first_start > 0 {
        segments.push(&value[..first_start]);
    }
    segments.extend(commands.map(|command| command.as_str()));

    let separator = format!("\n{}", " ".repeat(indent));
    Cow::Owned(segments.join(&separator))
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{wrap_path_data, MAX_VALUE_LENGTH};

    #[test]
    fn wrap_short_values() {
        let exact = "M".repeat(MAX_VALUE_LENGTH);
        assert_eq!(wrap_path_data(&exact, 12), exact);
        assert_eq!(wrap_path_data("", 12), "");
        // Length is counted in characters, not bytes
        let wide = "é".repeat(MAX_VALUE_LENGTH);
        assert_eq!(wrap_path_data(&wide, 12), wide);
    }

    #[test]
    fn wrap_long_values() {
        let value = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.41 0-8-3.59-8-8z";
        assert!(value.len() > MAX_VALUE_LENGTH);
        assert_eq!(
            wrap_path_data(value, 4),
            "M12 2
    C6.48 2 2 6.48 2 12
    s4.48 10 10 10 10-4.48 10-10
    S17.52 2 12 2
    z
    m0 18
    c-4.41 0-8-3.59-8-8
    z"
        );
    }

    #[test]
    fn wrap_is_lossless() {
        let values = [
            "M0 0 L10 10 ".repeat(10),
            format!("  0 0 {}", "h1v1".repeat(30)),
            "1234567890".repeat(10),
        ];
        for value in values {
            let wrapped = wrap_path_data(&value, 12);
            let separator = format!("\n{}", " ".repeat(12));
            assert_eq!(wrapped.replace(&separator, ""), value);
        }
    }
}
