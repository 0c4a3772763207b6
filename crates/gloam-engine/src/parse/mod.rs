//! Command parsing: raw text in, [`ParsedInput`] out.

/// The structured form of a parsed command.
pub mod input;
/// Fixed word classes: prepositions, articles, conjunctions.
pub mod lexicon;
/// The parser itself.
pub mod parser;

pub use input::ParsedInput;
pub use parser::parse;
