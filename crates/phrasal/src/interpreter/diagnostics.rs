//! Diagnostic sinks for non-fatal translation problems.

use std::mem;
use std::sync::{Mutex, PoisonError};

use crate::interpreter::error::Diagnostic;

/// Receives non-fatal diagnostics from a translator.
///
/// Any `Fn(&Diagnostic) + Send + Sync` closure is a sink.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn report(&self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}

/// The default sink: emits each diagnostic as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::LookupMiss { key, locale, .. } => {
                tracing::warn!(%key, %locale, "{diagnostic}");
            }
            Diagnostic::PluralCategoryMiss {
                key,
                category,
                count,
                locale,
            } => {
                tracing::warn!(%key, %category, count, %locale, "{diagnostic}");
            }
            Diagnostic::UnresolvedBranch { key, locale } => {
                tracing::warn!(%key, %locale, "{diagnostic}");
            }
        }
    }
}

/// A sink that keeps every diagnostic in memory.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use phrasal::{CollectingSink, Translator};
/// use serde_json::json;
///
/// let sink = Arc::new(CollectingSink::new());
/// let translator = Translator::builder()
///     .locale("en")
///     .resources(json!({}))
///     .diagnostics(sink.clone())
///     .build()
///     .unwrap();
///
/// assert_eq!(translator.translate("nope", &Default::default()), "nope");
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain all collected diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        mem::take(
            &mut *self
                .diagnostics
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    pub fn len(&self) -> usize {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.clone());
    }
}
