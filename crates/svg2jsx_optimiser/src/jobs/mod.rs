mod cleanup_ids;
mod remove_comments;
mod remove_editors_ns_data;
mod remove_empty_text;
mod remove_metadata;
mod remove_whitespace_text;

use serde::{Deserialize, Serialize};
use svg2jsx_ast::document::Document;

pub use self::cleanup_ids::CleanupIds;
pub use self::remove_comments::RemoveComments;
pub use self::remove_editors_ns_data::RemoveEditorsNsData;
pub use self::remove_empty_text::RemoveEmptyText;
pub use self::remove_metadata::RemoveMetadata;
pub use self::remove_whitespace_text::RemoveWhitespaceText;

use crate::error::JobsError;

/// A single step of optimisation applied to a document.
pub trait Job {
    /// The name of the job, as it appears in configuration
    fn name(&self) -> &'static str;

    /// Applies the job to the document
    ///
    /// # Errors
    ///
    /// If the job's configuration is invalid
    fn run(&self, document: &mut Document) -> Result<(), JobsError>;
}

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
/// The jobs to run against a document, in the order they are run.
///
/// Jobs which are `None` are skipped. When deserialized, any job left out of the
/// configuration is skipped.
pub struct Jobs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// See [`RemoveComments`]
    pub remove_comments: Option<RemoveComments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// See [`RemoveMetadata`]
    pub remove_metadata: Option<RemoveMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// See [`RemoveEditorsNsData`]
    pub remove_editors_ns_data: Option<RemoveEditorsNsData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// See [`RemoveEmptyText`]
    pub remove_empty_text: Option<RemoveEmptyText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// See [`RemoveWhitespaceText`]
    pub remove_whitespace_text: Option<RemoveWhitespaceText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// See [`CleanupIds`]
    ///
    /// When optimising through [`crate::Optimiser`], this only runs when cleanup is
    /// requested, using this configuration when present.
    pub cleanup_ids: Option<CleanupIds>,
}

impl Default for Jobs {
    fn default() -> Self {
        Self {
            remove_comments: Some(RemoveComments::default()),
            remove_metadata: Some(RemoveMetadata::default()),
            remove_editors_ns_data: Some(RemoveEditorsNsData::default()),
            remove_empty_text: Some(RemoveEmptyText::default()),
            remove_whitespace_text: Some(RemoveWhitespaceText::default()),
            cleanup_ids: Some(CleanupIds::default()),
        }
    }
}

impl Jobs {
    /// Returns a set of jobs where nothing is run
    pub fn none() -> Self {
        Self {
            remove_comments: None,
            remove_metadata: None,
            remove_editors_ns_data: None,
            remove_empty_text: None,
            remove_whitespace_text: None,
            cleanup_ids: None,
        }
    }

    /// Runs each enabled job against the document
    ///
    /// # Errors
    ///
    /// If any job fails
    pub fn run(&self, document: &mut Document) -> Result<(), JobsError> {
        for job in self.enabled() {
            log::debug!("Jobs::run: starting {}", job.name());
            job.run(document)?;
        }
        Ok(())
    }

    fn enabled(&self) -> impl Iterator<Item = &dyn Job> {
        [
            self.remove_comments.as_ref().map(|job| job as &dyn Job),
            self.remove_metadata.as_ref().map(|job| job as &dyn Job),
            self.remove_editors_ns_data.as_ref().map(|job| job as &dyn Job),
            self.remove_empty_text.as_ref().map(|job| job as &dyn Job),
            self.remove_whitespace_text.as_ref().map(|job| job as &dyn Job),
            self.cleanup_ids.as_ref().map(|job| job as &dyn Job),
        ]
        .into_iter()
        .flatten()
    }
}

#[test]
fn jobs_from_config() {
    let jobs: Jobs =
        serde_json::from_str(r#"{ "removeComments": {}, "cleanupIds": { "minify": false } }"#)
            .unwrap();
    let names: Vec<_> = jobs.enabled().map(Job::name).collect();
    assert_eq!(names, ["removeComments", "cleanupIds"]);

    let names: Vec<_> = Jobs::default().enabled().map(Job::name).collect();
    assert_eq!(
        names,
        [
            "removeComments",
            "removeMetadata",
            "removeEditorsNsData",
            "removeEmptyText",
            "removeWhitespaceText",
            "cleanupIds"
        ]
    );
    assert_eq!(Jobs::none().enabled().count(), 0);
}
