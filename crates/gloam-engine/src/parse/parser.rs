//! Natural-language command parsing.
//!
//! Turns a raw line into a [`ParsedInput`]: verb first, then direct-object
//! phrases, an optional preposition, and an optional indirect object. This
//! stage does no vocabulary lookups and cannot fail; degenerate input
//! yields a degenerate result.

use crate::parse::input::ParsedInput;
use crate::parse::lexicon;

/// Parse one line of player input.
///
/// Supported shapes include `take lamp`, `take lamp and sword`,
/// `put the golden lamp in the wooden box`, `take all`, and `drop it`.
pub fn parse(line: &str) -> ParsedInput {
    let trimmed = line.trim().to_lowercase();
    let words: Vec<&str> = trimmed.split_whitespace().collect();

    let Some((verb, rest)) = words.split_first() else {
        return ParsedInput {
            raw: line.to_string(),
            ..ParsedInput::default()
        };
    };

    let mut parsed = ParsedInput {
        verb: (*verb).to_string(),
        raw: line.to_string(),
        ..ParsedInput::default()
    };

    if rest.is_empty() {
        return parsed;
    }

    match rest.iter().position(|w| lexicon::is_preposition(w)) {
        None => {
            // No preposition: the whole tail is direct-object text.
            if let Some(keyword) = rest.iter().find(|w| lexicon::is_multi_object_keyword(w)) {
                parsed.multi_object = true;
                parsed.direct_objects.push((*keyword).to_string());
            } else if let Some(pronoun) = rest.iter().find(|w| lexicon::is_pronoun(w)) {
                parsed.uses_pronoun = true;
                parsed.direct_objects.push((*pronoun).to_string());
            } else {
                parsed.direct_objects = lexicon::split_by_conjunction(&rest.join(" "));
            }
        }
        Some(index) => {
            parsed.direct_objects = lexicon::split_by_conjunction(&rest[..index].join(" "));
            parsed.preposition =
                Some(lexicon::normalize_preposition(rest[index]).to_string());

            // A trailing preposition simply leaves the indirect object unset.
            if index + 1 < rest.len() {
                let tail = lexicon::strip_articles(&rest[index + 1..]);
                if !tail.is_empty() {
                    parsed.indirect_object = Some(tail.join(" "));
                }
            }
        }
    }

    parsed
}
