use std::{
    collections::{BTreeSet, HashMap, HashSet},
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};
use svg2jsx_ast::{
    document::Document,
    element::Element,
    visitor::{Outcome, PrepareOutcome, Visitor},
};

use crate::{error::JobsError, jobs::Job};

/// Matches references to elements in `url(#id)` values
static REFERENCES_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:\W|^)url\(['"]?#(.+?)['"]?\)"#).unwrap());
/// Matches references to elements in hrefs
static REFERENCES_HREF: LazyLock<Regex> = LazyLock::new(|| Regex::new("^#(.+?)$").unwrap());
/// Matches references in the `begin` attribute
static REFERENCES_BEGIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\.[a-zA-Z]").unwrap());

/// Attributes which may reference an element with `url(#id)`
const REFERENCES_PROPS: [&str; 10] = [
    "clip-path",
    "color-profile",
    "fill",
    "filter",
    "marker-end",
    "marker-mid",
    "marker-start",
    "mask",
    "stroke",
    "style",
];

const REMOVE_DEFAULT: bool = true;
const MINIFY_DEFAULT: bool = true;

#[derive(Deserialize, Serialize, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
/// Removes unused ids and minifies the ids which are referenced.
///
/// Ids are renamed in the order they're first referenced, as `a`, `b`, ... `Z`, `aa`,
/// `ab`, and so on, with references such as `url(#id)`, `href="#id"`, and
/// `begin="id.end"` updated to match.
///
/// # Correctness
///
/// Documents with a `<style>` or `<script>` element are skipped, as they may
/// reference ids in ways that can't be tracked. Use `force` to clean them anyway.
///
/// Ids are unique to a page, so when a component is rendered more than once the
/// minified ids of each instance may collide.
///
/// # Errors
///
/// Never.
pub struct CleanupIds {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Whether to remove ids which aren't referenced. Defaults to `true`
    pub remove: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Whether to rename referenced ids to the shortest available name. Defaults to `true`
    pub minify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Ids which are never removed or renamed
    pub preserve: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Ids starting with any of these prefixes are never removed or renamed
    pub preserve_prefixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Whether to clean up ids even when the document has a style or script
    pub force: Option<bool>,
}

#[derive(Default)]
struct State<'o> {
    options: Option<&'o CleanupIds>,
    /// Ids which may be removed or renamed
    replaceable: HashSet<String>,
    /// Ids which are referenced somewhere in the document
    referenced: HashSet<String>,
    /// The new name of each referenced, replaceable id
    renames: HashMap<String, String>,
    /// Ids already seen while walking, for removing duplicates
    seen: HashSet<String>,
}

impl Job for CleanupIds {
    fn name(&self) -> &'static str {
        "cleanupIds"
    }

    fn run(&self, document: &mut Document) -> Result<(), JobsError> {
        State {
            options: Some(self),
            ..State::default()
        }
        .start(document)?;
        Ok(())
    }
}

impl Visitor for State<'_> {
    type Error = JobsError;

    fn prepare(&mut self, document: &Document) -> PrepareOutcome {
        let Some(options) = self.options else {
            return PrepareOutcome::Skip;
        };
        if options.ignores(&document.root) {
            log::debug!("CleanupIds::prepare: skipping");
            return PrepareOutcome::Skip;
        }

        let mut ids = Vec::new();
        let mut references = Vec::new();
        document.root.for_each_element(&mut |element| {
            if let Some(id) = element.get_attribute_local("id") {
                ids.push(id.to_string());
            }
            for attr in &element.attributes {
                let Some(regex) = find_references(&attr.name.local) else {
                    continue;
                };
                references.extend(
                    regex
                        .captures_iter(&attr.value)
                        .filter_map(|captures| captures.get(1))
                        .map(|id| id.as_str().to_string()),
                );
            }
        });

        let mut reserved = BTreeSet::new();
        for id in &ids {
            if options.is_preserved(id) {
                reserved.insert(id.clone());
            } else {
                self.replaceable.insert(id.clone());
            }
        }
        for id in &references {
            if !self.replaceable.contains(id) {
                log::debug!("CleanupIds::prepare: found unmatched reference: {id}");
                reserved.insert(id.clone());
            }
        }
        self.referenced = references.iter().cloned().collect();

        let remove = options.remove.unwrap_or(REMOVE_DEFAULT);
        if !remove {
            // Unreferenced ids stay, so can't be taken by a generated id
            reserved.extend(
                self.replaceable
                    .iter()
                    .filter(|id| !self.referenced.contains(*id))
                    .cloned(),
            );
        }

        if options.minify.unwrap_or(MINIFY_DEFAULT) {
            let mut generated = GeneratedId::new(reserved);
            for id in references {
                if !self.replaceable.contains(&id) || self.renames.contains_key(&id) {
                    continue;
                }
                let new_id = generated.next_id();
                log::debug!("CleanupIds::prepare: renaming {id} to {new_id}");
                self.renames.insert(id, new_id);
            }
        }

        PrepareOutcome::None
    }

    fn element(&mut self, element: &mut Element) -> Result<Outcome, Self::Error> {
        self.update_id(element);

        for attr in &mut element.attributes {
            let Some(regex) = find_references(&attr.name.local) else {
                continue;
            };
            if let Some(value) = replace_references(regex, &attr.value, &self.renames) {
                attr.value = value;
            }
        }
        Ok(Outcome::Keep)
    }
}

impl State<'_> {
    fn update_id(&mut self, element: &mut Element) {
        let Some(id) = element.get_attribute_local("id").map(ToString::to_string) else {
            return;
        };
        if !self.replaceable.contains(&id) {
            return;
        }
        if !self.seen.insert(id.clone()) {
            log::debug!("CleanupIds::element: removing duplicate id: {id}");
            element.remove_attribute_local("id");
            return;
        }

        if let Some(new_id) = self.renames.get(&id) {
            element.set_attribute_local("id", new_id.clone());
        } else if !self.referenced.contains(&id)
            && self
                .options
                .is_some_and(|options| options.remove.unwrap_or(REMOVE_DEFAULT))
        {
            log::debug!("CleanupIds::element: removing unused id: {id}");
            element.remove_attribute_local("id");
        }
    }
}

impl CleanupIds {
    fn ignores(&self, root: &Element) -> bool {
        if self.force == Some(true) {
            return false;
        }

        let has_unpredictable_refs = root.any_element(&|element| {
            element.name.prefix.is_none()
                && matches!(element.name.local.as_str(), "style" | "script")
        });
        let has_only_defs = root.child_elements_iter().all(|child| child.name.is("defs"));
        has_unpredictable_refs || has_only_defs
    }

    fn is_preserved(&self, id: &str) -> bool {
        self.preserve
            .as_ref()
            .is_some_and(|preserve| preserve.iter().any(|preserved| preserved == id))
            || self
                .preserve_prefixes
                .as_ref()
                .is_some_and(|prefixes| prefixes.iter().any(|prefix| id.starts_with(prefix)))
    }
}

/// Generates the shortest ids available, as `a`..`z`, `A`..`Z`, `aa`, `ab`, and so on.
struct GeneratedId {
    index: usize,
    prevent_collision: BTreeSet<String>,
}

impl GeneratedId {
    const ALPHABET: &'static [u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

    fn new(prevent_collision: BTreeSet<String>) -> Self {
        Self {
            index: 0,
            prevent_collision,
        }
    }

    fn next_id(&mut self) -> String {
        loop {
            let id = Self::nth(self.index);
            self.index += 1;
            if !self.prevent_collision.contains(&id) {
                return id;
            }
        }
    }

    fn nth(mut n: usize) -> String {
        let base = Self::ALPHABET.len();
        let mut id = Vec::new();
        loop {
            id.push(Self::ALPHABET[n % base]);
            n /= base;
            if n == 0 {
                break;
            }
            n -= 1;
        }
        id.reverse();
        id.into_iter().map(char::from).collect()
    }
}

fn find_references(name: &str) -> Option<&'static Regex> {
    match name {
        "href" => Some(&*REFERENCES_HREF),
        "begin" => Some(&*REFERENCES_BEGIN),
        name if REFERENCES_PROPS.contains(&name) => Some(&*REFERENCES_URL),
        _ => None,
    }
}

/// Replaces each captured reference which has been renamed, returning `None` when
/// nothing was replaced.
fn replace_references(
    regex: &Regex,
    value: &str,
    renames: &HashMap<String, String>,
) -> Option<String> {
    let mut result = String::with_capacity(value.len());
    let mut last_end = 0;
    for captures in regex.captures_iter(value) {
        let Some(id) = captures.get(1) else {
            continue;
        };
        let Some(new_id) = renames.get(id.as_str()) else {
            continue;
        };
        result.push_str(&value[last_end..id.start()]);
        result.push_str(new_id);
        last_end = id.end();
    }
    if last_end == 0 {
        return None;
    }
    result.push_str(&value[last_end..]);
    Some(result)
}

#[test]
fn generated_id() {
    let mut generated = GeneratedId::new(BTreeSet::from(["b".to_string()]));
    assert_eq!(generated.next_id(), "a");
    assert_eq!(generated.next_id(), "c", "collisions are skipped");

    assert_eq!(GeneratedId::nth(25), "z");
    assert_eq!(GeneratedId::nth(26), "A");
    assert_eq!(GeneratedId::nth(51), "Z");
    assert_eq!(GeneratedId::nth(52), "aa");
    assert_eq!(GeneratedId::nth(53), "ab");
    assert_eq!(GeneratedId::nth(52 + 52), "ba");
}

#[test]
fn cleanup_ids() -> anyhow::Result<()> {
    use crate::test_config;

    insta::assert_snapshot!(
        test_config(
            r#"{ "cleanupIds": {} }"#,
            r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><defs><linearGradient id="gradient-one"/><path id="shape"/><mask id="unused"/></defs><rect fill="url(#gradient-one)" id="rect"/><use xlink:href="#shape"/><g style="stroke:url('#gradient-one')"/></svg>"##,
        )?,
        @r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><defs><linearGradient id="a"/><path id="b"/><mask/></defs><rect fill="url(#a)"/><use xlink:href="#b"/><g style="stroke:url('#a')"/></svg>"##
    );

    insta::assert_snapshot!(
        test_config(
            r#"{ "cleanupIds": { "remove": false, "preserve": ["a"] } }"#,
            r##"<svg xmlns="http://www.w3.org/2000/svg"><circle id="a"/><circle id="b"/><circle id="long"/><animate id="anim" begin="0s"/><set begin="anim.end" fill="url(#long)"/></svg>"##,
        )?,
        @r##"<svg xmlns="http://www.w3.org/2000/svg"><circle id="a"/><circle id="b"/><circle id="d"/><animate id="c" begin="0s"/><set begin="c.end" fill="url(#d)"/></svg>"##
    );

    Ok(())
}

#[test]
fn cleanup_ids_skipped() -> anyhow::Result<()> {
    use crate::test_config;

    insta::assert_snapshot!(
        test_config(
            r#"{ "cleanupIds": {} }"#,
            r##"<svg xmlns="http://www.w3.org/2000/svg"><style>#unused { fill: red }</style><path id="unused"/></svg>"##,
        )?,
        @r##"<svg xmlns="http://www.w3.org/2000/svg"><style>#unused { fill: red }</style><path id="unused"/></svg>"##
    );

    insta::assert_snapshot!(
        test_config(
            r#"{ "cleanupIds": { "force": true } }"#,
            r##"<svg xmlns="http://www.w3.org/2000/svg"><style>#unused { fill: red }</style><path id="unused"/></svg>"##,
        )?,
        @r##"<svg xmlns="http://www.w3.org/2000/svg"><style>#unused { fill: red }</style><path/></svg>"##
    );

    Ok(())
}
