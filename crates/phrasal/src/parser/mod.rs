//! Placeholder tokenizer for translation templates.
//!
//! Templates are plain text with named placeholders written either as
//! `{{name}}` or `%{name}`. Tokenizing never fails: anything that does not
//! form a placeholder is literal text.

pub mod ast;
mod template;

pub use ast::{Segment, Template};
pub use template::parse_template;
