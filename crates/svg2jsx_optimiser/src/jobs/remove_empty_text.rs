use serde::{Deserialize, Serialize};
use svg2jsx_ast::{
    document::Document,
    element::Element,
    visitor::Visitor,
};

use crate::{error::JobsError, jobs::Job};

#[derive(Deserialize, Serialize, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
/// Removes empty `<text>` and `<tspan>` elements, and `<tref>` elements without a
/// reference.
///
/// # Correctness
///
/// This job should never visually change the document.
///
/// # Errors
///
/// Never.
pub struct RemoveEmptyText {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Whether to remove empty `<text>` elements. Defaults to `true`
    pub text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Whether to remove empty `<tspan>` elements. Defaults to `true`
    pub tspan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Whether to remove `<tref>` elements without an `xlink:href`. Defaults to `true`
    pub tref: Option<bool>,
}

impl Job for RemoveEmptyText {
    fn name(&self) -> &'static str {
        "removeEmptyText"
    }

    fn run(&self, document: &mut Document) -> Result<(), JobsError> {
        self.clone().start(document)?;
        Ok(())
    }
}

impl Visitor for RemoveEmptyText {
    type Error = JobsError;

    fn exit_element(&mut self, element: &mut Element) -> Result<(), Self::Error> {
        element.children.retain(|child| {
            let Some(child) = child.element() else {
                return true;
            };
            !self.is_removable(child)
        });
        Ok(())
    }
}

impl RemoveEmptyText {
    fn is_removable(&self, element: &Element) -> bool {
        let name = &element.name;
        if name.prefix.is_some() {
            return false;
        }
        match name.local.as_str() {
            "text" => self.text.unwrap_or(true) && element.children.is_empty(),
            "tspan" => self.tspan.unwrap_or(true) && element.children.is_empty(),
            "tref" => {
                self.tref.unwrap_or(true)
                    && !element
                        .attributes
                        .iter()
                        .any(|attr| attr.name.local == "href" && attr.name.prefix.is_some())
            }
            _ => false,
        }
    }
}

#[test]
fn remove_empty_text() -> anyhow::Result<()> {
    use crate::test_config;

    insta::assert_snapshot!(
        test_config(
            r#"{ "removeEmptyText": {} }"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><g><text></text></g><text><tspan/>a</text></svg>"#,
        )?,
        @r#"<svg xmlns="http://www.w3.org/2000/svg"><g/><text>a</text></svg>"#
    );

    insta::assert_snapshot!(
        test_config(
            r#"{ "removeEmptyText": { "text": false } }"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><text/><tref/></svg>"#,
        )?,
        @r#"<svg xmlns="http://www.w3.org/2000/svg"><text/></svg>"#
    );

    Ok(())
}
