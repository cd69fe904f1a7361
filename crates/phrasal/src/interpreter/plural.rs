//! Plural selection: picks a [`PhraseNode::Plural`] form by the `count`
//! parameter.

use std::sync::Arc;

use phrasal_plural::{PluralCategory, PluralFamily, simple_category};

use crate::interpreter::diagnostics::DiagnosticSink;
use crate::interpreter::error::Diagnostic;
use crate::interpreter::middleware::Middleware;
use crate::types::{Params, PhraseNode, PluralForms, Value};

/// Parameter carrying the plural count.
pub const COUNT_PARAM: &str = "count";

/// Which classifier maps a count to a category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PluralRules {
    /// Per-locale family arithmetic (see [`PluralFamily`]).
    #[default]
    Families,

    /// Locale-independent zero/one/other: `0` selects `zero` only when the
    /// entry has one, `1` selects `one`, anything else `other`.
    Simple,
}

impl PluralRules {
    /// The category this classifier assigns to `count`.
    ///
    /// `forms` is consulted only by [`PluralRules::Simple`], whose `zero`
    /// selection depends on the entry.
    pub fn category(self, locale: &str, count: f64, forms: &PluralForms) -> PluralCategory {
        match self {
            PluralRules::Families => PluralFamily::for_locale(locale).category_for(count),
            PluralRules::Simple => simple_category(count, forms.has(PluralCategory::Zero)),
        }
    }
}

/// Selects a plural form by `params["count"]`.
///
/// Applies only when the node is a plural node and `count` is numeric.
/// When the computed category has no form, a
/// [`Diagnostic::PluralCategoryMiss`] is reported and `other` is used if
/// present; otherwise the node is returned unchanged.
pub struct Pluraliser {
    rules: PluralRules,
    sink: Arc<dyn DiagnosticSink>,
}

impl Pluraliser {
    pub fn new(rules: PluralRules, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { rules, sink }
    }

    pub fn rules(&self) -> PluralRules {
        self.rules
    }

    pub fn resolve(
        &self,
        node: PhraseNode,
        key: &str,
        params: &Params,
        locale: &str,
    ) -> PhraseNode {
        let mut forms = match node {
            PhraseNode::Plural(forms) => forms,
            other => return other,
        };
        let Some(count) = params.get(COUNT_PARAM).and_then(Value::as_float) else {
            return PhraseNode::Plural(forms);
        };

        let category = self.rules.category(locale, count, &forms);
        if let Some(selected) = forms.forms.remove(&category) {
            tracing::trace!(key, %category, count, "selected plural form");
            return selected;
        }

        self.sink.report(&Diagnostic::PluralCategoryMiss {
            key: key.to_string(),
            category,
            count,
            locale: locale.to_string(),
        });
        match forms.forms.remove(&PluralCategory::Other) {
            Some(other) => other,
            None => PhraseNode::Plural(forms),
        }
    }
}

impl Middleware for Pluraliser {
    fn apply(&self, value: PhraseNode, key: &str, params: &Params, locale: &str) -> PhraseNode {
        self.resolve(value, key, params, locale)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::interpreter::diagnostics::CollectingSink;
    use crate::params;

    fn pluraliser(rules: PluralRules) -> (Pluraliser, Arc<CollectingSink>) {
        let sink = Arc::new(CollectingSink::new());
        (Pluraliser::new(rules, sink.clone()), sink)
    }

    fn unread() -> PhraseNode {
        PhraseNode::from(json!({
            "zero": "All caught up!",
            "one": "You have an unread message",
            "other": "You have {{count}} unread messages",
        }))
    }

    #[test]
    fn selects_category_for_locale() {
        let (pluraliser, sink) = pluraliser(PluralRules::Families);
        let node = PhraseNode::from(json!({ "one": "файл", "few": "файла", "many": "файлов" }));

        let pick = |n: i64| {
            pluraliser
                .resolve(node.clone(), "files", &params! { "count" => n }, "ru")
                .into_text()
        };
        assert_eq!(pick(21).as_deref(), Some("файл"));
        assert_eq!(pick(3).as_deref(), Some("файла"));
        assert_eq!(pick(11).as_deref(), Some("файлов"));
        assert!(sink.is_empty());
    }

    #[test]
    fn germanic_zero_uses_zero_form_when_present() {
        let (pluraliser, _) = pluraliser(PluralRules::Families);
        let node = pluraliser.resolve(unread(), "unread", &params! { "count" => 0 }, "en");
        assert_eq!(node.as_text(), Some("All caught up!"));
    }

    #[test]
    fn missing_category_falls_back_to_other_with_diagnostic() {
        let (pluraliser, sink) = pluraliser(PluralRules::Families);
        let node = PhraseNode::from(json!({ "one": "one item", "other": "many items" }));

        let resolved = pluraliser.resolve(node, "items", &params! { "count" => 0 }, "en");

        assert_eq!(resolved.as_text(), Some("many items"));
        assert_eq!(
            sink.take(),
            vec![Diagnostic::PluralCategoryMiss {
                key: "items".to_string(),
                category: PluralCategory::Zero,
                count: 0.0,
                locale: "en".to_string(),
            }]
        );
    }

    #[test]
    fn missing_category_without_other_is_unchanged() {
        let (pluraliser, sink) = pluraliser(PluralRules::Families);
        let node = PhraseNode::from(json!({ "one": "one item" }));

        let resolved = pluraliser.resolve(node.clone(), "items", &params! { "count" => 5 }, "en");

        assert_eq!(resolved, node);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn without_count_node_is_unchanged() {
        let (pluraliser, _) = pluraliser(PluralRules::Families);
        assert_eq!(pluraliser.resolve(unread(), "unread", &params! {}, "en"), unread());
        assert_eq!(
            pluraliser.resolve(unread(), "unread", &params! { "count" => "five" }, "en"),
            unread()
        );
    }

    #[test]
    fn fractional_counts_are_classified() {
        let (pluraliser, _) = pluraliser(PluralRules::Families);
        let node = PhraseNode::from(json!({ "one": "one", "few": "few", "many": "many" }));
        let resolved = pluraliser.resolve(node, "k", &params! { "count" => 3.5 }, "ru");
        assert_eq!(resolved.as_text(), Some("many"));
    }

    #[test]
    fn simple_rules_ignore_locale() {
        let (pluraliser, sink) = pluraliser(PluralRules::Simple);
        let node = PhraseNode::from(json!({ "one": "one", "few": "few", "other": "other" }));

        let resolved = pluraliser.resolve(node.clone(), "k", &params! { "count" => 3 }, "ru");
        assert_eq!(resolved.as_text(), Some("other"));

        let resolved = pluraliser.resolve(node, "k", &params! { "count" => 0 }, "ru");
        assert_eq!(resolved.as_text(), Some("other"));
        assert!(sink.is_empty());

        let resolved = pluraliser.resolve(unread(), "k", &params! { "count" => 0 }, "fr");
        assert_eq!(resolved.as_text(), Some("All caught up!"));
    }

    #[test]
    fn text_nodes_pass_through() {
        let (pluraliser, _) = pluraliser(PluralRules::Families);
        let node = PhraseNode::from("plain");
        assert_eq!(
            pluraliser.resolve(node.clone(), "k", &params! { "count" => 2 }, "en"),
            node
        );
    }
}
