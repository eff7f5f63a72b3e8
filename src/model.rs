//! Data model for SBOM components.

use indexmap::IndexMap;
use serde::Deserialize;

/// A single entry from a CycloneDX `components` array.
///
/// Every field is optional: SBOM generators disagree about which fields
/// they emit, so absent or null fields all map to `None` and filtering
/// decides what to do with them.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Component {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub component_type: Option<String>,
    pub version: Option<String>,
    pub purl: Option<String>,
}

impl Component {
    /// Returns true if this component should be indexed: a `"library"`
    /// entry whose purl identifies the Maven ecosystem.
    pub fn is_maven_library(&self) -> bool {
        self.component_type.as_deref() == Some("library")
            && self.purl.as_deref().is_some_and(|p| p.contains("maven"))
    }
}

/// An insertion-ordered mapping from component name to version.
///
/// Both the key and the value are optional strings: a component without a
/// `name` is indexed under `None`, and a missing `version` is stored as
/// `None` (which never equals a real version string on the other side).
///
/// Duplicate names within one file follow last-write-wins: the later
/// occurrence replaces the earlier one's version while keeping its
/// position. This mirrors how the indices have always been built; the
/// intent behind it is unclear, so it is documented and tested rather
/// than changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentIndex {
    entries: IndexMap<Option<String>, Option<String>>,
}

impl ComponentIndex {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Records `name -> version`, replacing the version of an existing
    /// name without moving it.
    pub fn insert(&mut self, name: Option<String>, version: Option<String>) {
        self.entries.insert(name, version);
    }

    pub fn get(&self, name: &Option<String>) -> Option<&Option<String>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &Option<String>) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Option<String>, &Option<String>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Option<String>, Option<String>)> for ComponentIndex {
    fn from_iter<I: IntoIterator<Item = (Option<String>, Option<String>)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (name, version) in iter {
            index.insert(name, version);
        }
        index
    }
}
