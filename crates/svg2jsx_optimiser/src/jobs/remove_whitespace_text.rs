use serde::{Deserialize, Serialize};
use svg2jsx_ast::{
    document::Document,
    element::Element,
    visitor::{Outcome, Visitor},
};

use crate::{error::JobsError, jobs::Job};

/// Elements where whitespace is part of the rendered or announced content
const TEXT_CONTENT: [&str; 6] = ["text", "tspan", "textPath", "title", "desc", "style"];

#[derive(Deserialize, Serialize, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
/// Removes whitespace-only text between elements, such as the indentation of
/// a hand-formatted document.
///
/// Whitespace within text content elements, or under an `xml:space="preserve"`
/// attribute, is kept.
///
/// # Correctness
///
/// This job should never visually change the document.
///
/// # Errors
///
/// Never.
pub struct RemoveWhitespaceText {}

#[derive(Default)]
struct State {
    /// Whether each open element preserves whitespace
    preserving: Vec<bool>,
}

impl Job for RemoveWhitespaceText {
    fn name(&self) -> &'static str {
        "removeWhitespaceText"
    }

    fn run(&self, document: &mut Document) -> Result<(), JobsError> {
        State::default().start(document)?;
        Ok(())
    }
}

impl Visitor for State {
    type Error = JobsError;

    fn element(&mut self, element: &mut Element) -> Result<Outcome, Self::Error> {
        let inherited = self.preserving.last().copied().unwrap_or(false);
        let preserves = inherited
            || (element.name.prefix.is_none()
                && TEXT_CONTENT.contains(&element.name.local.as_str()))
            || element.attributes.iter().any(|attr| {
                attr.name.prefix.as_deref() == Some("xml")
                    && attr.name.local == "space"
                    && attr.value == "preserve"
            });
        self.preserving.push(preserves);
        Ok(Outcome::Keep)
    }

    fn exit_element(&mut self, _element: &mut Element) -> Result<(), Self::Error> {
        self.preserving.pop();
        Ok(())
    }

    fn text(&mut self, text: &mut String) -> Result<Outcome, Self::Error> {
        if self.preserving.last().copied().unwrap_or(false) || !text.trim().is_empty() {
            return Ok(Outcome::Keep);
        }
        Ok(Outcome::Remove)
    }
}

#[test]
fn remove_whitespace_text() -> anyhow::Result<()> {
    use crate::test_config;

    insta::assert_snapshot!(
        test_config(
            r#"{ "removeWhitespaceText": {} }"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg">
    <g>
        <path d="M0 0"/>
    </g>
    <text> <tspan>a</tspan> b</text>
</svg>"#,
        )?,
        @r#"<svg xmlns="http://www.w3.org/2000/svg"><g><path d="M0 0"/></g><text> <tspan>a</tspan> b</text></svg>"#
    );

    insta::assert_snapshot!(
        test_config(
            r#"{ "removeWhitespaceText": {} }"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><g xml:space="preserve"> </g></svg>"#,
        )?,
        @r#"<svg xmlns="http://www.w3.org/2000/svg"><g xml:space="preserve"> </g></svg>"#
    );

    Ok(())
}
