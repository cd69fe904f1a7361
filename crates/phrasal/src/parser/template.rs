//! Template tokenizer using winnow.
//!
//! A placeholder opens with `{{` or `%{`, captures the shortest run of
//! characters up to the first `}`, and closes with `}` or `}}`. The captured
//! name may not span a line break. The two delimiter styles may be mixed, so
//! `{{name}`, `%{name}` and `%{name}}` are all placeholders.

use winnow::combinator::{alt, opt, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::{Segment, Template};

/// Tokenize a template string.
///
/// This never fails: text that does not form a placeholder is returned as
/// literal segments.
///
/// # Example
///
/// ```
/// use phrasal::parser::{Segment, parse_template};
///
/// let template = parse_template("Hi %{name}!");
/// assert_eq!(
///     template.segments,
///     vec![
///         Segment::Literal("Hi ".to_string()),
///         Segment::Placeholder { raw: "%{name}".to_string(), name: "name".to_string() },
///         Segment::Literal("!".to_string()),
///     ]
/// );
/// ```
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    let parsed: ModalResult<Vec<Segment>> = repeat(0.., segment).parse_next(&mut remaining);
    let mut segments = parsed.unwrap_or_default();
    if !remaining.is_empty() {
        segments.push(Segment::Literal(remaining.to_string()));
    }
    Template {
        segments: merge_literals(segments),
    }
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Placeholder { .. } => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder, literal run, or lone character).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_run, literal_char)).parse_next(input)
}

/// Parse a placeholder: `{{` or `%{`, a name, then `}` or `}}`.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    let (name, raw) = (
        alt(("{{", "%{")),
        take_while(0.., |c: char| c != '}' && !is_line_terminator(c)),
        '}',
        opt('}'),
    )
        .map(|(_, name, _, _)| name)
        .with_taken()
        .parse_next(input)?;

    Ok(Segment::Placeholder {
        raw: raw.to_string(),
        name: name.to_string(),
    })
}

/// Parse a run of characters that cannot start a placeholder.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{' && c != '%')
        .map(|text: &str| Segment::Literal(text.to_string()))
        .parse_next(input)
}

/// Parse a single `{` or `%` that did not open a placeholder.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(raw: &str, name: &str) -> Segment {
        Segment::Placeholder {
            raw: raw.to_string(),
            name: name.to_string(),
        }
    }

    fn literal(text: &str) -> Segment {
        Segment::Literal(text.to_string())
    }

    #[test]
    fn plain_text_is_one_literal() {
        let template = parse_template("Hello world");
        assert_eq!(template.segments, vec![literal("Hello world")]);
        assert!(template.is_literal());
    }

    #[test]
    fn empty_template_has_no_segments() {
        assert!(parse_template("").segments.is_empty());
    }

    #[test]
    fn both_delimiter_styles() {
        let template = parse_template("{{a}} and %{b}");
        assert_eq!(
            template.segments,
            vec![
                token("{{a}}", "a"),
                literal(" and "),
                token("%{b}", "b"),
            ]
        );
    }

    #[test]
    fn mismatched_delimiters_are_accepted() {
        let template = parse_template("{{a} %{b}}");
        assert_eq!(
            template.segments,
            vec![token("{{a}", "a"), literal(" "), token("%{b}}", "b")]
        );
    }

    #[test]
    fn name_stops_at_first_closing_brace() {
        let template = parse_template("{{a}b}}");
        assert_eq!(template.segments, vec![token("{{a}", "a"), literal("b}}")]);
    }

    #[test]
    fn single_brace_is_not_a_placeholder() {
        let template = parse_template("{name} 100% done");
        assert_eq!(template.segments, vec![literal("{name} 100% done")]);
    }

    #[test]
    fn unterminated_placeholder_is_literal() {
        let template = parse_template("Welcome {{user");
        assert_eq!(template.segments, vec![literal("Welcome {{user")]);
    }

    #[test]
    fn placeholder_does_not_span_lines() {
        let template = parse_template("{{a\nb}}");
        assert_eq!(template.segments, vec![literal("{{a\nb}}")]);
    }

    #[test]
    fn empty_name_is_a_placeholder() {
        let template = parse_template("x{{}}y");
        assert_eq!(
            template.segments,
            vec![literal("x"), token("{{}}", ""), literal("y")]
        );
    }

    #[test]
    fn placeholders_are_listed_in_order() {
        let template = parse_template("{{username}} vs {{team}}, {{username}}");
        let names: Vec<&str> = template.placeholders().collect();
        assert_eq!(names, vec!["username", "team", "username"]);
    }
}
