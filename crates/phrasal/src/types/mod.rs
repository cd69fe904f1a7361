mod node;
mod value;

pub use node::{PhraseNode, PluralForms};
pub use value::{Params, Value};
