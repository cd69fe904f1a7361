//! Error and diagnostic types for the translator.

use phrasal_plural::PluralCategory;
use thiserror::Error;

/// Errors from constructing a translator or adding resources.
///
/// These are the only fatal errors: `translate` itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// Resources must be a JSON object keyed by top-level namespace.
    #[error("resources must be an object, found {found}")]
    ResourcesNotMap { found: &'static str },
}

/// A non-fatal problem observed while resolving a translation.
///
/// Diagnostics are reported to the translator's
/// [`DiagnosticSink`](crate::DiagnosticSink) and the translation continues
/// with its fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    /// No catalog entry for the key, and no caller-supplied default.
    #[error(
        "missing translation '{key}' in locale '{locale}'{}",
        format_suggestions(suggestions)
    )]
    LookupMiss {
        key: String,
        locale: String,
        suggestions: Vec<String>,
    },

    /// The count's plural category has no form in the catalog entry.
    #[error(
        "cannot find plural form '{category}' for '{key}' with count {count} in locale '{locale}', falling back to 'other' if present"
    )]
    PluralCategoryMiss {
        key: String,
        category: PluralCategory,
        count: f64,
        locale: String,
    },

    /// Context and plural resolution finished without producing a string.
    #[error("'{key}' did not resolve to a string in locale '{locale}'")]
    UnresolvedBranch { key: String, locale: String },
}

impl Diagnostic {
    /// The translation key the diagnostic refers to.
    pub fn key(&self) -> &str {
        match self {
            Diagnostic::LookupMiss { key, .. }
            | Diagnostic::PluralCategoryMiss { key, .. }
            | Diagnostic::UnresolvedBranch { key, .. } => key,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}
