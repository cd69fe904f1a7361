use std::collections::BTreeMap;

use phrasal_plural::PluralCategory;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value as Json};

/// A catalog entry.
///
/// Nodes are classified structurally when JSON is converted: an object whose
/// keys include any plural category name becomes [`PhraseNode::Plural`],
/// every other object becomes [`PhraseNode::Branch`]. Branches serve both as
/// catalog namespaces (`glossary.brand`) and as context alternatives
/// (`{ "male": ..., "female": ..., "default": ... }`).
///
/// # Example
///
/// ```
/// use phrasal::PhraseNode;
/// use serde_json::json;
///
/// let node = PhraseNode::from(json!({
///     "male": { "one": "his friend", "other": "his friends" },
///     "default": "their friends",
/// }));
///
/// assert!(node.is_branch());
/// assert!(node.child("male").is_some_and(PhraseNode::is_plural));
/// assert_eq!(node.child("default").and_then(PhraseNode::as_text), Some("their friends"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Json")]
pub enum PhraseNode {
    /// A template string, the only node kind that resolves to a translation.
    Text(String),

    /// Alternatives keyed by context tag, or a namespace of nested keys.
    Branch(BTreeMap<String, PhraseNode>),

    /// Alternatives keyed by plural category.
    Plural(PluralForms),

    /// A non-string, non-object JSON leaf (number, boolean, null, array).
    Scalar(Json),
}

impl PhraseNode {
    /// Walk one key segment.
    ///
    /// Plural nodes are walked by category name (`"one"`) or by any extra
    /// key they carry.
    pub fn child(&self, segment: &str) -> Option<&PhraseNode> {
        match self {
            PhraseNode::Branch(entries) => entries.get(segment),
            PhraseNode::Plural(forms) => forms.child(segment),
            PhraseNode::Text(_) | PhraseNode::Scalar(_) => None,
        }
    }

    /// Names of the keys reachable through [`PhraseNode::child`].
    pub fn child_names(&self) -> Vec<String> {
        match self {
            PhraseNode::Branch(entries) => entries.keys().cloned().collect(),
            PhraseNode::Plural(forms) => forms
                .categories()
                .map(|category| category.as_str().to_string())
                .chain(forms.extra.keys().cloned())
                .collect(),
            PhraseNode::Text(_) | PhraseNode::Scalar(_) => Vec::new(),
        }
    }

    /// The template string, if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PhraseNode::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Consume the node, returning its template string if it is text.
    pub fn into_text(self) -> Option<String> {
        match self {
            PhraseNode::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, PhraseNode::Branch(_))
    }

    pub fn is_plural(&self) -> bool {
        matches!(self, PhraseNode::Plural(_))
    }

    /// Convert back to the JSON shape the node was loaded from.
    pub fn to_json(&self) -> Json {
        match self {
            PhraseNode::Text(text) => Json::String(text.clone()),
            PhraseNode::Branch(entries) => Json::Object(
                entries
                    .iter()
                    .map(|(key, node)| (key.clone(), node.to_json()))
                    .collect(),
            ),
            PhraseNode::Plural(forms) => Json::Object(
                forms
                    .forms
                    .iter()
                    .map(|(category, node)| (category.as_str().to_string(), node.to_json()))
                    .chain(
                        forms
                            .extra
                            .iter()
                            .map(|(key, node)| (key.clone(), node.to_json())),
                    )
                    .collect(),
            ),
            PhraseNode::Scalar(value) => value.clone(),
        }
    }

    fn from_object(object: Map<String, Json>) -> PhraseNode {
        if !object.keys().any(|key| PluralCategory::is_category_name(key)) {
            return PhraseNode::Branch(
                object
                    .into_iter()
                    .map(|(key, value)| (key, PhraseNode::from(value)))
                    .collect(),
            );
        }

        let mut forms = PluralForms::default();
        for (key, value) in object {
            let node = PhraseNode::from(value);
            match key.parse::<PluralCategory>() {
                Ok(category) => {
                    forms.forms.insert(category, node);
                }
                Err(_) => {
                    forms.extra.insert(key, node);
                }
            }
        }
        PhraseNode::Plural(forms)
    }
}

impl From<Json> for PhraseNode {
    fn from(value: Json) -> Self {
        match value {
            Json::String(text) => PhraseNode::Text(text),
            Json::Object(object) => PhraseNode::from_object(object),
            other => PhraseNode::Scalar(other),
        }
    }
}

impl From<&str> for PhraseNode {
    fn from(text: &str) -> Self {
        PhraseNode::Text(text.to_string())
    }
}

impl From<String> for PhraseNode {
    fn from(text: String) -> Self {
        PhraseNode::Text(text)
    }
}

impl Serialize for PhraseNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Plural alternatives of a phrase, keyed by category.
///
/// `other` should be present as the ultimate fallback but is not required.
/// Keys that are not category names are kept in `extra`; they are reachable
/// by key lookup but never selected by a count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluralForms {
    pub forms: BTreeMap<PluralCategory, PhraseNode>,
    pub extra: BTreeMap<String, PhraseNode>,
}

impl PluralForms {
    /// The form for `category`, if present.
    pub fn get(&self, category: PluralCategory) -> Option<&PhraseNode> {
        self.forms.get(&category)
    }

    /// The `other` form, if present.
    pub fn other(&self) -> Option<&PhraseNode> {
        self.get(PluralCategory::Other)
    }

    pub fn has(&self, category: PluralCategory) -> bool {
        self.forms.contains_key(&category)
    }

    /// Categories present, in index order.
    pub fn categories(&self) -> impl Iterator<Item = PluralCategory> + '_ {
        self.forms.keys().copied()
    }

    fn child(&self, segment: &str) -> Option<&PhraseNode> {
        match segment.parse::<PluralCategory>() {
            Ok(category) => self.get(category),
            Err(_) => self.extra.get(segment),
        }
    }
}
