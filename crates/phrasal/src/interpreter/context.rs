//! Context selection: picks a branch by the caller's `context` tag.

use crate::interpreter::middleware::Middleware;
use crate::types::{Params, PhraseNode, Value};

/// Parameter naming the context tag.
pub const CONTEXT_PARAM: &str = "context";

/// Branch used when the context tag is absent or unmatched.
pub const DEFAULT_BRANCH: &str = "default";

/// Selects a [`PhraseNode::Branch`] alternative by the `context` parameter.
///
/// Resolution order:
/// 1. The branch named by `params["context"]`, if the parameter is a string
///    and such a branch exists
/// 2. The `"default"` branch
/// 3. The node unchanged; the pipeline later reports it as unresolved
///
/// Nodes that are not branches pass through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContextResolver;

impl ContextResolver {
    pub fn resolve(&self, node: PhraseNode, params: &Params) -> PhraseNode {
        let mut branches = match node {
            PhraseNode::Branch(branches) => branches,
            other => return other,
        };

        let tag = params.get(CONTEXT_PARAM).and_then(Value::as_string);
        if let Some(selected) = tag.and_then(|tag| branches.remove(tag)) {
            return selected;
        }
        match branches.remove(DEFAULT_BRANCH) {
            Some(fallback) => fallback,
            None => {
                tracing::trace!(?tag, "no matching context branch");
                PhraseNode::Branch(branches)
            }
        }
    }
}

impl Middleware for ContextResolver {
    fn apply(&self, value: PhraseNode, _key: &str, params: &Params, _locale: &str) -> PhraseNode {
        self.resolve(value, params)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::params;

    fn title() -> PhraseNode {
        PhraseNode::from(json!({
            "male": "{{user}} is an expert masseur",
            "female": "{{user}} is an expert masseuse",
            "default": "{{user}} is an expert masseuse",
        }))
    }

    #[test]
    fn selects_matching_context() {
        let node = ContextResolver.resolve(title(), &params! { "context" => "male" });
        assert_eq!(node.as_text(), Some("{{user}} is an expert masseur"));
    }

    #[test]
    fn falls_back_to_default_branch() {
        let node = ContextResolver.resolve(title(), &params! { "context" => "robot" });
        assert_eq!(node.as_text(), Some("{{user}} is an expert masseuse"));

        let node = ContextResolver.resolve(title(), &params! {});
        assert_eq!(node.as_text(), Some("{{user}} is an expert masseuse"));
    }

    #[test]
    fn non_string_context_is_ignored() {
        let node = ContextResolver.resolve(title(), &params! { "context" => 1 });
        assert_eq!(node.as_text(), Some("{{user}} is an expert masseuse"));
    }

    #[test]
    fn unmatched_branch_without_default_is_returned_unchanged() {
        let node = PhraseNode::from(json!({ "male": "he", "female": "she" }));
        let resolved = ContextResolver.resolve(node.clone(), &params! { "context" => "it" });
        assert_eq!(resolved, node);
    }

    #[test]
    fn leaves_and_plurals_pass_through() {
        let text = PhraseNode::from("plain");
        assert_eq!(
            ContextResolver.resolve(text.clone(), &params! { "context" => "male" }),
            text
        );

        let plural = PhraseNode::from(json!({ "one": "a", "other": "b" }));
        assert_eq!(
            ContextResolver.resolve(plural.clone(), &params! { "context" => "one" }),
            plural
        );
    }
}
