use serde::{Deserialize, Serialize};
use svg2jsx_ast::{
    document::Document,
    element::Element,
    visitor::{Outcome, Visitor},
};

use crate::{error::JobsError, jobs::Job};

#[derive(Deserialize, Serialize, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
/// Removes the `<metadata>` element from the document.
///
/// # Correctness
///
/// This job should never visually change the document.
///
/// # Errors
///
/// Never.
pub struct RemoveMetadata {}

impl Job for RemoveMetadata {
    fn name(&self) -> &'static str {
        "removeMetadata"
    }

    fn run(&self, document: &mut Document) -> Result<(), JobsError> {
        self.clone().start(document)?;
        Ok(())
    }
}

impl Visitor for RemoveMetadata {
    type Error = JobsError;

    fn element(&mut self, element: &mut Element) -> Result<Outcome, Self::Error> {
        if element.name.is("metadata") {
            log::debug!("RemoveMetadata::element: removing metadata");
            return Ok(Outcome::Remove);
        }
        Ok(Outcome::Keep)
    }
}

#[test]
fn remove_metadata() -> anyhow::Result<()> {
    use crate::test_config;

    insta::assert_snapshot!(
        test_config(
            r#"{ "removeMetadata": {} }"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><metadata>...</metadata><g><metadata/></g></svg>"#,
        )?,
        @r#"<svg xmlns="http://www.w3.org/2000/svg"><g/></svg>"#
    );

    Ok(())
}
