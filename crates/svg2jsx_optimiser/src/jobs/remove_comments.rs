use regex::Regex;
use serde::{Deserialize, Serialize};
use svg2jsx_ast::{
    document::Document,
    visitor::{Outcome, Visitor},
};

use crate::{error::JobsError, jobs::Job};

const DEFAULT_PRESERVE_PATTERN: &str = "^!";

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Removes XML comments from the document.
///
/// By default this job ignores comments starting with `<!--!` which is often used
/// for legal information, such as copyright, licensing, or attribution.
///
/// # Correctness
///
/// This job should never visually change the document.
///
/// # Errors
///
/// If a preserve pattern is not a valid regex.
pub struct RemoveComments {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// A list of regex patterns to match against comments, where matching comments will
    /// not be removed from the document.
    pub preserve_patterns: Option<Vec<String>>,
}

struct State {
    preserve: Vec<Regex>,
}

impl Job for RemoveComments {
    fn name(&self) -> &'static str {
        "removeComments"
    }

    fn run(&self, document: &mut Document) -> Result<(), JobsError> {
        let preserve = match &self.preserve_patterns {
            Some(patterns) => patterns
                .iter()
                .map(|pattern| Regex::new(pattern))
                .collect::<Result<_, _>>(),
            None => Regex::new(DEFAULT_PRESERVE_PATTERN).map(|regex| vec![regex]),
        }
        .map_err(JobsError::InvalidUserRegex)?;

        State { preserve }.start(document)?;
        Ok(())
    }
}

impl Visitor for State {
    type Error = JobsError;

    fn comment(&mut self, comment: &mut String) -> Result<Outcome, Self::Error> {
        if self.preserve.iter().any(|regex| regex.is_match(comment)) {
            return Ok(Outcome::Keep);
        }
        Ok(Outcome::Remove)
    }
}

#[test]
fn remove_comments() -> anyhow::Result<()> {
    use crate::test_config;

    insta::assert_snapshot!(
        test_config(
            r#"{ "removeComments": {} }"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><!--- test --><g><!-- test --></g></svg>"#,
        )?,
        @r#"<svg xmlns="http://www.w3.org/2000/svg"><g/></svg>"#
    );

    insta::assert_snapshot!(
        test_config(
            r#"{ "removeComments": {} }"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><!--! Copyright --><path d="M0 0"/></svg>"#,
        )?,
        @r#"<svg xmlns="http://www.w3.org/2000/svg"><!--! Copyright --><path d="M0 0"/></svg>"#
    );

    insta::assert_snapshot!(
        test_config(
            r#"{ "removeComments": { "preservePatterns": ["^ keep"] } }"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><!-- keep me --><!--! gone --></svg>"#,
        )?,
        @r#"<svg xmlns="http://www.w3.org/2000/svg"><!-- keep me --></svg>"#
    );

    assert!(test_config(
        r#"{ "removeComments": { "preservePatterns": ["("] } }"#,
        r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#,
    )
    .is_err());

    Ok(())
}
