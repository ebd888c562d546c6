//! Options for converting a document.
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use tsify::Tsify;

#[cfg_attr(feature = "wasm", derive(Tsify))]
#[cfg_attr(feature = "wasm", tsify(from_wasm_abi, into_wasm_abi))]
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
/// How a document is turned into a component.
///
/// Options are passed by value into each conversion and never outlive it.
pub struct Options {
    /// Whether to annotate the component's props with `{ className?: string }`.
    ///
    /// This has no other effect on the output.
    pub typescript: bool,
    /// Whether the optimiser removes unused ids and minifies referenced ones.
    pub cleanup_ids: bool,
    /// Accepted for compatibility with saved settings; has no effect.
    pub memo: bool,
    /// Accepted for compatibility with saved settings; has no effect.
    #[serde(alias = "singleQuoteStrings")]
    pub jsx_single_quote: bool,
}

impl Options {
    /// Returns the extension of the component's source file, without a leading `.`
    pub fn extension(&self) -> &'static str {
        if self.typescript {
            "tsx"
        } else {
            "jsx"
        }
    }
}

#[cfg(test)]
mod test {
    use super::Options;

    #[test]
    fn options_from_json() {
        let options: Options =
            serde_json::from_str(r#"{ "typescript": true, "cleanupIds": true }"#).unwrap();
        assert_eq!(
            options,
            Options {
                typescript: true,
                cleanup_ids: true,
                ..Options::default()
            }
        );

        let options: Options =
            serde_json::from_str(r#"{ "memo": true, "singleQuoteStrings": true }"#).unwrap();
        assert!(options.memo);
        assert!(options.jsx_single_quote);
        assert!(!options.typescript);

        let options: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.extension(), "jsx");
    }

    #[test]
    fn options_to_json() {
        let json = serde_json::to_string(&Options {
            typescript: true,
            ..Options::default()
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"typescript":true,"cleanupIds":false,"memo":false,"jsxSingleQuote":false}"#
        );
    }
}
