//! Token types for parsed templates.

/// A parsed template: a sequence of literal text and placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, emitted as-is.
    Literal(String),

    /// A named placeholder.
    Placeholder {
        /// The full source text including delimiters, e.g. `"{{user}}"`.
        raw: String,
        /// The captured name between the delimiters.
        name: String,
    },
}

impl Template {
    /// Placeholder names in source order, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Whether the template contains no placeholders.
    pub fn is_literal(&self) -> bool {
        self.placeholders().next().is_none()
    }
}
