pub mod interpreter;
pub mod parser;
pub mod types;

pub use interpreter::{
    CollectingSink, ComponentStyle, ConstructionError, ContextResolver, Diagnostic,
    DiagnosticSink, FormatOptions, Interpolator, LocaleFormatter, Localisable, Middleware,
    NumberStyle, PlainFormatter, PluralRules, Pluraliser, ResourceCatalog, TracingSink,
    Translator, compute_suggestions, create_translator, interpolate,
};
pub use phrasal_plural::{PluralCategory, PluralFamily, classify, simple_category};
pub use types::{Params, PhraseNode, PluralForms, Value};

/// Creates a [`Params`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, strings,
/// booleans and options can be passed directly.
///
/// # Example
///
/// ```
/// use phrasal::{params, Value};
///
/// let p = params! { "count" => 3, "user" => "Alice", "team" => None::<&str> };
/// assert_eq!(p.len(), 3);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["user"].as_string(), Some("Alice"));
/// assert_eq!(p["team"], Value::Null);
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
