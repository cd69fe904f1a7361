//! The user-facing translator.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::{Arc, PoisonError, RwLock};

use bon::bon;
use serde_json::{Map, Value as Json};

use crate::interpreter::catalog::ResourceCatalog;
use crate::interpreter::context::ContextResolver;
use crate::interpreter::diagnostics::{DiagnosticSink, TracingSink};
use crate::interpreter::error::{ConstructionError, Diagnostic};
use crate::interpreter::format::{FormatOptions, LocaleFormatter, Localisable, PlainFormatter};
use crate::interpreter::interpolate::Interpolator;
use crate::interpreter::middleware::Middleware;
use crate::interpreter::plural::{PluralRules, Pluraliser};
use crate::types::{Params, PhraseNode, Value};

/// Parameters holding a caller-supplied fallback template, in priority order.
const FALLBACK_PARAMS: [&str; 2] = ["default", "_"];

/// Position of the interpolation stage; fallback templates enter here.
const INTERPOLATE_STAGE: usize = 2;

/// Resolves keys against a resource catalog for one locale.
///
/// Every translation runs the same ordered stage list, fixed at
/// construction: context selection, plural selection, interpolation, then
/// any caller-supplied middlewares. `translate` never fails; problems are
/// reported to the [`DiagnosticSink`] and the key itself is returned.
///
/// The catalog is replaced copy-on-write by [`Translator::add_resources`],
/// so a translator can be shared across threads.
///
/// # Example
///
/// ```
/// use phrasal::{Translator, params};
/// use serde_json::json;
///
/// let translator = Translator::builder()
///     .locale("en")
///     .resources(json!({
///         "messages": {
///             "unread": {
///                 "zero": "All caught up!",
///                 "one": "You have an unread message",
///                 "other": "You have {{count}} unread messages",
///             },
///         },
///     }))
///     .build()
///     .unwrap();
///
/// assert_eq!(translator.locale(), "en");
/// assert_eq!(
///     translator.translate("messages.unread", &params! { "count" => 5 }),
///     "You have 5 unread messages"
/// );
/// assert_eq!(translator.translate("messages.missing", &params! {}), "messages.missing");
/// ```
pub struct Translator {
    /// Locale identifier as given at construction.
    locale: String,

    /// Current catalog; swapped whole on every merge.
    catalog: RwLock<Arc<ResourceCatalog>>,

    /// Context, plural, interpolation, then extra middlewares.
    stages: Vec<Box<dyn Middleware>>,

    sink: Arc<dyn DiagnosticSink>,

    formatter: Arc<dyn LocaleFormatter>,
}

#[bon]
impl Translator {
    /// Build a translator.
    ///
    /// The locale is an opaque identifier and is stored as given. Fails only
    /// if `resources` is not a JSON object.
    #[builder]
    pub fn new(
        #[builder(into)] locale: String,
        #[builder(default = Json::Object(Map::new()))] resources: Json,
        #[builder(default)] middlewares: Vec<Box<dyn Middleware>>,
        #[builder(default)] plural_rules: PluralRules,
        diagnostics: Option<Arc<dyn DiagnosticSink>>,
        formatter: Option<Arc<dyn LocaleFormatter>>,
    ) -> Result<Self, ConstructionError> {
        let catalog = ResourceCatalog::from_json(resources)?;
        let sink: Arc<dyn DiagnosticSink> = diagnostics.unwrap_or_else(|| Arc::new(TracingSink));

        let mut stages: Vec<Box<dyn Middleware>> = vec![
            Box::new(ContextResolver),
            Box::new(Pluraliser::new(plural_rules, Arc::clone(&sink))),
            Box::new(Interpolator),
        ];
        stages.extend(middlewares);

        tracing::debug!(
            %locale,
            namespaces = catalog.len(),
            stages = stages.len(),
            "created translator"
        );

        Ok(Self {
            locale,
            catalog: RwLock::new(Arc::new(catalog)),
            stages,
            sink,
            formatter: formatter.unwrap_or_else(|| Arc::new(PlainFormatter)),
        })
    }
}

impl Translator {
    /// The locale identifier, exactly as given at construction.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Translate `key`.
    ///
    /// Returns, in order of preference:
    /// 1. The catalog entry, resolved through every stage
    /// 2. The `default` (or legacy `_`) parameter, interpolated, when the key
    ///    is not in the catalog
    /// 3. `key` itself, after reporting a diagnostic
    pub fn translate(&self, key: &str, params: &Params) -> String {
        match self.translate_checked(key, params) {
            Ok(text) => text,
            Err(diagnostic) => {
                self.sink.report(&diagnostic);
                key.to_string()
            }
        }
    }

    /// Translate `key`, returning the lookup problem instead of the key.
    ///
    /// The diagnostic is not reported to the sink; plural-category misses
    /// met along the way still are.
    pub fn translate_checked(&self, key: &str, params: &Params) -> Result<String, Diagnostic> {
        let catalog = self.catalog();
        let value = match catalog.lookup(key) {
            Some(node) => self.run_stages(node.clone(), 0, key, params),
            None => {
                let Some(fallback) = fallback_template(params) else {
                    return Err(Diagnostic::LookupMiss {
                        key: key.to_string(),
                        locale: self.locale.clone(),
                        suggestions: catalog.suggestions_for(key),
                    });
                };
                self.run_stages(
                    PhraseNode::Text(fallback.to_string()),
                    INTERPOLATE_STAGE,
                    key,
                    params,
                )
            }
        };

        value.into_text().ok_or_else(|| Diagnostic::UnresolvedBranch {
            key: key.to_string(),
            locale: self.locale.clone(),
        })
    }

    /// Merge resources into the catalog.
    ///
    /// Each top-level key of `resources` replaces the existing namespace
    /// wholesale; nested keys are not merged.
    pub fn add_resources(&self, resources: Json) -> Result<(), ConstructionError> {
        self.add_catalog(ResourceCatalog::from_json(resources)?);
        Ok(())
    }

    /// Merge a prepared catalog, with the same semantics as
    /// [`Translator::add_resources`].
    pub fn add_catalog(&self, partial: ResourceCatalog) {
        let mut current = self
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut next = ResourceCatalog::clone(&current);
        tracing::debug!(
            locale = %self.locale,
            namespaces = partial.len(),
            "merging resources"
        );
        next.merge(partial);
        *current = Arc::new(next);
    }

    /// A snapshot of the current catalog.
    pub fn catalog(&self) -> Arc<ResourceCatalog> {
        Arc::clone(&self.catalog.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Whether `key` resolves to a catalog entry (of any shape).
    pub fn has_key(&self, key: &str) -> bool {
        self.catalog().lookup(key).is_some()
    }

    /// Format a number or date for this translator's locale.
    pub fn localise(&self, value: impl Into<Localisable>, options: &FormatOptions) -> String {
        self.formatter.format(&value.into(), &self.locale, options)
    }

    fn run_stages(&self, value: PhraseNode, from: usize, key: &str, params: &Params) -> PhraseNode {
        self.stages
            .iter()
            .skip(from)
            .fold(value, |value, stage| stage.apply(value, key, params, &self.locale))
    }
}

impl Debug for Translator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Translator")
            .field("locale", &self.locale)
            .field("namespaces", &self.catalog().keys().collect::<Vec<_>>())
            .field("stages", &self.stages.len())
            .finish_non_exhaustive()
    }
}

/// Create a translator with the default plural rules, diagnostics and
/// formatter.
///
/// ```
/// use phrasal::{create_translator, params};
/// use serde_json::json;
///
/// let i18n = create_translator("en", json!({ "messages": { "hello": "Hello" } }), Vec::new())
///     .unwrap();
/// assert_eq!(i18n.translate("messages.hello", &params! {}), "Hello");
///
/// assert!(create_translator("en", json!("not a map"), Vec::new()).is_err());
/// ```
pub fn create_translator(
    locale: impl Into<String>,
    resources: Json,
    middlewares: Vec<Box<dyn Middleware>>,
) -> Result<Translator, ConstructionError> {
    Translator::builder()
        .locale(locale)
        .resources(resources)
        .middlewares(middlewares)
        .build()
}

fn fallback_template(params: &Params) -> Option<&str> {
    FALLBACK_PARAMS
        .iter()
        .find_map(|name| params.get(*name).and_then(Value::as_string))
}
