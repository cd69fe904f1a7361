//! Resource catalog: the phrase tree a translator resolves keys against.

use std::collections::BTreeMap;

use serde_json::Value as Json;

use crate::interpreter::error::ConstructionError;
use crate::types::PhraseNode;

/// Maximum number of suggestions attached to a lookup miss.
const MAX_SUGGESTIONS: usize = 3;

/// A mapping from top-level namespace to phrase tree, addressed by dotted keys.
///
/// Catalogs are immutable once shared; merging builds a new catalog in which
/// each merged top-level key replaces the previous subtree entirely.
///
/// # Example
///
/// ```
/// use phrasal::ResourceCatalog;
/// use serde_json::json;
///
/// let mut catalog = ResourceCatalog::from_json(json!({
///     "glossary": { "brand": { "name": "Meetup" } },
/// }))
/// .unwrap();
/// assert_eq!(catalog.lookup("glossary.brand.name").and_then(|n| n.as_text()), Some("Meetup"));
///
/// catalog.merge(ResourceCatalog::from_json(json!({ "glossary": { "slogan": "x" } })).unwrap());
/// assert!(catalog.lookup("glossary.brand.name").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceCatalog {
    entries: BTreeMap<String, PhraseNode>,
}

impl ResourceCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a JSON object.
    ///
    /// Returns [`ConstructionError::ResourcesNotMap`] for any other JSON kind.
    pub fn from_json(value: Json) -> Result<Self, ConstructionError> {
        match value {
            Json::Object(object) => Ok(Self {
                entries: object
                    .into_iter()
                    .map(|(key, value)| (key, PhraseNode::from(value)))
                    .collect(),
            }),
            other => Err(ConstructionError::ResourcesNotMap {
                found: json_kind(&other),
            }),
        }
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self, ConstructionError> {
        let value: Json =
            serde_json::from_str(source).map_err(|_| ConstructionError::ResourcesNotMap {
                found: "malformed JSON",
            })?;
        Self::from_json(value)
    }

    /// Insert or replace a single top-level entry.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<PhraseNode>) {
        self.entries.insert(key.into(), node.into());
    }

    /// Shallow merge: every top-level key of `other` replaces the existing
    /// entry wholesale. Nested keys are never combined.
    pub fn merge(&mut self, other: ResourceCatalog) {
        for (key, node) in other.entries {
            tracing::trace!(%key, "replacing catalog namespace");
            self.entries.insert(key, node);
        }
    }

    /// The top-level entry for `key` (no dotted walk).
    pub fn get(&self, key: &str) -> Option<&PhraseNode> {
        self.entries.get(key)
    }

    /// Resolve a dotted key. Any missing segment yields `None`.
    pub fn lookup(&self, key: &str) -> Option<&PhraseNode> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        segments.try_fold(self.entries.get(first)?, |node, segment| {
            node.child(segment)
        })
    }

    /// Top-level keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys near the point where `key` stopped resolving.
    ///
    /// Walks as deep as `key` resolves, then compares the first missing
    /// segment against the names available at that level.
    pub fn suggestions_for(&self, key: &str) -> Vec<String> {
        let segments: Vec<&str> = key.split('.').collect();
        let mut available: Vec<String> = self.entries.keys().cloned().collect();
        let mut resolved: Vec<&str> = Vec::new();
        let mut node: Option<&PhraseNode> = None;

        for segment in &segments {
            let next = match node {
                None => self.entries.get(*segment),
                Some(parent) => parent.child(segment),
            };
            match next {
                Some(child) => {
                    resolved.push(*segment);
                    available = child.child_names();
                    node = Some(child);
                }
                None => {
                    return compute_suggestions(segment, &available)
                        .into_iter()
                        .map(|name| {
                            resolved
                                .iter()
                                .copied()
                                .chain([name.as_str()])
                                .collect::<Vec<_>>()
                                .join(".")
                        })
                        .collect();
                }
            }
        }
        Vec::new()
    }
}

/// Names in `available` within a small edit distance of `key`, closest first.
///
/// Keys of three characters or fewer accept a distance of 1, longer keys a
/// distance of 2. At most three suggestions are returned.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance > 0 && *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
