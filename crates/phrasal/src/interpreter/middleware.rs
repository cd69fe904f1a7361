//! The resolver stage interface.

use crate::types::{Params, PhraseNode};

/// One stage of the translation pipeline.
///
/// Each stage receives the value produced by the previous stage together with
/// the key being translated, the caller's parameters and the translator's
/// locale, and returns a possibly transformed value. Stages that do not
/// apply to the value they receive return it unchanged.
///
/// Closures with the same signature are middlewares:
///
/// ```
/// use phrasal::{Middleware, Params, PhraseNode};
///
/// let shout = |value: PhraseNode, _key: &str, _params: &Params, _locale: &str| match value {
///     PhraseNode::Text(text) => PhraseNode::Text(text.to_uppercase()),
///     other => other,
/// };
/// let out = shout.apply(PhraseNode::from("hi"), "k", &Params::new(), "en");
/// assert_eq!(out.as_text(), Some("HI"));
/// ```
pub trait Middleware: Send + Sync {
    fn apply(&self, value: PhraseNode, key: &str, params: &Params, locale: &str) -> PhraseNode;
}

impl<F> Middleware for F
where
    F: Fn(PhraseNode, &str, &Params, &str) -> PhraseNode + Send + Sync,
{
    fn apply(&self, value: PhraseNode, key: &str, params: &Params, locale: &str) -> PhraseNode {
        self(value, key, params, locale)
    }
}
