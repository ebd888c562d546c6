/*!
The optimiser cleans up SVG documents before they are formatted into components.

Optimisation is structure-preserving: the same elements are written back out, minus
comments, metadata, editor data and insignificant whitespace. Ids are only cleaned up
when requested.

# Example

```
use svg2jsx_optimiser::{Jobs, Optimiser as _};

let optimised = Jobs::default()
    .optimise(
        r#"<svg xmlns="http://www.w3.org/2000/svg">
    <!-- drawn by hand -->
    <path d="M0 0"/>
</svg>"#,
        false,
    )
    .unwrap();
assert_eq!(optimised, r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#);
```
*/
pub mod error;
mod jobs;

use svg2jsx_ast::{
    parse::roxmltree::parse,
    xmlwriter::{Indent, Options},
};

pub use crate::error::{Error, JobsError};
pub use crate::jobs::*;

/// Transforms SVG markup into structurally equivalent SVG markup.
pub trait Optimiser {
    /// Optimises the given markup, cleaning up ids only when `cleanup_ids` is set.
    ///
    /// # Errors
    ///
    /// - If the markup cannot be parsed
    /// - If a job fails
    /// - If the result cannot be serialized
    fn optimise(&self, svg: &str, cleanup_ids: bool) -> Result<String, Error>;
}

impl Optimiser for Jobs {
    fn optimise(&self, svg: &str, cleanup_ids: bool) -> Result<String, Error> {
        let mut document = parse(svg).map_err(Error::Parse)?;

        let mut jobs = self.clone();
        if cleanup_ids {
            jobs.cleanup_ids.get_or_insert_with(CleanupIds::default);
        } else {
            jobs.cleanup_ids = None;
        }
        jobs.run(&mut document).map_err(Error::Jobs)?;

        document
            .serialize_with_options(Options {
                indent: Indent::None,
            })
            .map_err(Error::Write)
    }
}

#[cfg(test)]
/// Runs the jobs of the given json config against the svg
pub(crate) fn test_config(config_json: &str, svg: &str) -> anyhow::Result<String> {
    let jobs: Jobs = serde_json::from_str(config_json)?;
    let mut document = parse(svg)?;
    jobs.run(&mut document)?;
    Ok(document.serialize_with_options(Options {
        indent: Indent::None,
    })?)
}

#[cfg(test)]
#[ctor::ctor]
fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn optimise_cleanup_flag() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg"><path id="unused" d="M0 0"/></svg>"##;
    let jobs = Jobs::default();
    assert_eq!(
        jobs.optimise(svg, false).unwrap(),
        svg,
        "ids are kept without cleanup"
    );
    assert_eq!(
        jobs.optimise(svg, true).unwrap(),
        r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#
    );
    assert_eq!(
        Jobs::none().optimise(svg, true).unwrap(),
        r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#,
        "the flag enables cleanup even when not configured"
    );
}

#[test]
fn optimise_errors() {
    let jobs = Jobs::default();
    assert!(matches!(
        jobs.optimise("<svg><path></svg>", false),
        Err(Error::Parse(_))
    ));
    assert!(matches!(jobs.optimise("not svg", false), Err(Error::Parse(_))));
}
