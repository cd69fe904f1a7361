//! Placeholder substitution.

use crate::interpreter::middleware::Middleware;
use crate::parser::{Segment, parse_template};
use crate::types::{Params, PhraseNode};

/// Substitute `{{name}}` / `%{name}` placeholders with parameter values.
///
/// A placeholder whose parameter is missing or [`Value::Null`] is left in the
/// output exactly as written, delimiters included. Values are inserted
/// verbatim: a `$` in a value is a literal `$` in the output.
///
/// [`Value::Null`]: crate::Value::Null
///
/// # Example
///
/// ```
/// use phrasal::{interpolate, params};
///
/// let params = params! { "user" => "Khan", "price" => "$5" };
/// assert_eq!(interpolate("Welcome {{user}}!", &params), "Welcome Khan!");
/// assert_eq!(interpolate("Costs %{price}", &params), "Costs $5");
/// assert_eq!(interpolate("Hi {{team}}", &params), "Hi {{team}}");
/// ```
pub fn interpolate(template: &str, params: &Params) -> String {
    let parsed = parse_template(template);
    let mut out = String::with_capacity(template.len());
    for segment in &parsed.segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder { raw, name } => match params.get(name) {
                Some(value) if !value.is_null() => out.push_str(&value.to_string()),
                _ => out.push_str(raw),
            },
        }
    }
    out
}

/// The interpolation stage. Applies only to text nodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Interpolator;

impl Middleware for Interpolator {
    fn apply(&self, value: PhraseNode, _key: &str, params: &Params, _locale: &str) -> PhraseNode {
        match value {
            PhraseNode::Text(template) => PhraseNode::Text(interpolate(&template, params)),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;
    use crate::types::Value;

    #[test]
    fn substitutes_every_occurrence() {
        let out = interpolate(
            "Failed to save as {{username}}. {{username}} is already taken.",
            &params! { "username" => "Khan" },
        );
        assert_eq!(out, "Failed to save as Khan. Khan is already taken.");
    }

    #[test]
    fn substitutes_multiple_names() {
        let out = interpolate(
            "{{user}} of team {{team}} drew first blood!",
            &params! { "user" => "Dragonlord", "team" => "Global offensive" },
        );
        assert_eq!(out, "Dragonlord of team Global offensive drew first blood!");
    }

    #[test]
    fn null_values_leave_placeholder() {
        let mut params = params! { "user" => "x" };
        params.insert("user".to_string(), Value::Null);
        assert_eq!(interpolate("Welcome {{user}}!", &params), "Welcome {{user}}!");
    }

    #[test]
    fn dollar_signs_are_literal() {
        let params = params! { "amount" => "$1 and $$2 and $&" };
        assert_eq!(
            interpolate("Paid {{amount}}.", &params),
            "Paid $1 and $$2 and $&."
        );
    }

    #[test]
    fn numbers_use_their_display_form() {
        let params = params! { "count" => 5, "ratio" => 0.25, "flag" => true };
        assert_eq!(
            interpolate("{{count}} / %{ratio} / {{flag}}", &params),
            "5 / 0.25 / true"
        );
    }

    #[test]
    fn mismatched_delimiters_are_replaced_whole() {
        let params = params! { "a" => "A" };
        assert_eq!(interpolate("[{{a}] [%{a}}]", &params), "[A] [A]");
    }

    #[test]
    fn only_text_nodes_are_interpolated() {
        let node = PhraseNode::from(serde_json::json!({ "male": "{{a}}" }));
        let out = Interpolator.apply(node.clone(), "k", &params! { "a" => "A" }, "en");
        assert_eq!(out, node);
    }
}
