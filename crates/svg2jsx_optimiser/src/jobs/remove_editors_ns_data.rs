use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use svg2jsx_ast::{
    document::Document,
    element::Element,
    visitor::{Outcome, PrepareOutcome, Visitor},
};

use crate::{error::JobsError, jobs::Job};

#[derive(Deserialize, Serialize, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
/// Removes all xml namespaces associated with editing software.
///
/// Elements and attributes in an editor's namespace are removed along with the
/// declaration of the namespace.
///
/// # Correctness
///
/// This job should never visually change the document.
///
/// Editor namespaces may be used by the editor and contain data that might be
/// lost if you try to edit the file after optimising.
///
/// # Errors
///
/// Never.
pub struct RemoveEditorsNsData {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// A list of additional namespaces URIs you may want to remove.
    pub additional_namespaces: Option<HashSet<String>>,
}

struct State<'o> {
    options: &'o RemoveEditorsNsData,
}

impl Job for RemoveEditorsNsData {
    fn name(&self) -> &'static str {
        "removeEditorsNsData"
    }

    fn run(&self, document: &mut Document) -> Result<(), JobsError> {
        State { options: self }.start(document)?;
        Ok(())
    }
}

impl Visitor for State<'_> {
    type Error = JobsError;

    fn prepare(&mut self, document: &Document) -> PrepareOutcome {
        let has_editor_data = document.root.any_element(&|element| {
            element
                .attributes
                .iter()
                .any(|attr| attr.name.is_xmlns() && self.is_editor_namespace(&attr.value))
        });
        if has_editor_data {
            PrepareOutcome::None
        } else {
            PrepareOutcome::Skip
        }
    }

    fn element(&mut self, element: &mut Element) -> Result<Outcome, Self::Error> {
        if self.in_editor_namespace(element.name.ns.as_deref()) {
            log::debug!("RemoveEditorsNsData::element: removing {}", element.name);
            return Ok(Outcome::Remove);
        }

        element.attributes.retain(|attr| {
            if attr.name.is_xmlns() {
                return !self.is_editor_namespace(&attr.value);
            }
            !self.in_editor_namespace(attr.name.ns.as_deref())
        });
        Ok(Outcome::Keep)
    }
}

impl State<'_> {
    fn in_editor_namespace(&self, ns: Option<&str>) -> bool {
        ns.is_some_and(|uri| self.is_editor_namespace(uri))
    }

    fn is_editor_namespace(&self, uri: &str) -> bool {
        is_editor_namespace(uri)
            || self
                .options
                .additional_namespaces
                .as_ref()
                .is_some_and(|set| set.contains(uri))
    }
}

fn is_editor_namespace(uri: &str) -> bool {
    matches!(
        uri,
        "http://creativecommons.org/ns#"
            | "http://inkscape.sourceforge.net/DTD/sodipodi-0.dtd"
            | "http://ns.adobe.com/AdobeIllustrator/10.0/"
            | "http://ns.adobe.com/AdobeSVGViewerExtensions/3.0/"
            | "http://ns.adobe.com/Extensibility/1.0/"
            | "http://ns.adobe.com/Flows/1.0/"
            | "http://ns.adobe.com/GenericCustomNamespace/1.0/"
            | "http://ns.adobe.com/Graphs/1.0/"
            | "http://ns.adobe.com/ImageReplacement/1.0/"
            | "http://ns.adobe.com/SaveForWeb/1.0/"
            | "http://ns.adobe.com/Variables/1.0/"
            | "http://ns.adobe.com/XPath/1.0/"
            | "http://purl.org/dc/elements/1.1/"
            | "http://schemas.microsoft.com/visio/2003/SVGExtensions/"
            | "http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd"
            | "http://taptrix.com/vectorillustrator/svg_extensions"
            | "http://www.bohemiancoding.com/sketch/ns"
            | "http://www.figma.com/figma/ns"
            | "http://www.inkscape.org/namespaces/inkscape"
            | "http://www.serif.com/"
            | "http://www.vector.evaxdesign.sk"
            | "http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    )
}

#[test]
fn remove_editors_ns_data() -> anyhow::Result<()> {
    use crate::test_config;

    insta::assert_snapshot!(
        test_config(
            r#"{ "removeEditorsNsData": {} }"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd"><sodipodi:namedview/><path d="M0 0" sodipodi:nodetypes="cccc"/></svg>"#,
        )?,
        @r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#
    );

    insta::assert_snapshot!(
        test_config(
            r#"{ "removeEditorsNsData": { "additionalNamespaces": ["https://example.com/editor"] } }"#,
            r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:ed="https://example.com/editor" xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a" ed:layer="1"/></svg>"##,
        )?,
        @r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"/></svg>"##
    );

    Ok(())
}
