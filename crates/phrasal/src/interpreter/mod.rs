//! Translation runtime.
//!
//! This module holds the resource catalog, the resolver stages that turn a
//! catalog entry into a string (context selection, plural selection,
//! interpolation), and the [`Translator`] that runs them in order.

mod catalog;
mod context;
mod diagnostics;
mod error;
mod format;
mod interpolate;
mod middleware;
mod plural;
mod translator;

pub use catalog::{ResourceCatalog, compute_suggestions};
pub use context::{CONTEXT_PARAM, ContextResolver, DEFAULT_BRANCH};
pub use diagnostics::{CollectingSink, DiagnosticSink, TracingSink};
pub use error::{ConstructionError, Diagnostic};
pub use format::{
    ComponentStyle, FormatOptions, LocaleFormatter, Localisable, NumberStyle, PlainFormatter,
};
pub use interpolate::{Interpolator, interpolate};
pub use middleware::Middleware;
pub use plural::{COUNT_PARAM, PluralRules, Pluraliser};
pub use translator::{Translator, create_translator};
