//! Vocabulary: synonym normalization for verbs, nouns, and adjectives.
//!
//! A [`Lexicon`] maps (word, word type) pairs to entries that may carry a
//! canonical form. Lookups are case-insensitive and scoped by word type,
//! because the same spelling can be a different part of speech.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The part of speech a vocabulary entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
    /// Action words: "take", "grab".
    Verb,
    /// Object words: "lamp", "lantern".
    Noun,
    /// Qualifier words: "brass", "golden".
    Adjective,
    /// Relation words: "in", "with".
    Preposition,
    /// "the", "a", "an".
    Article,
    /// "and", "then".
    Conjunction,
    /// Compass words: "north", "up".
    Direction,
}

/// One word in the vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabEntry {
    /// The word itself, stored lower-cased.
    pub word: String,
    /// Part of speech.
    pub word_type: WordType,
    /// Preferred spelling this word normalizes to, if it is a synonym.
    pub canonical: Option<String>,
    /// Grouping label, e.g. "material" or "movement".
    pub category: Option<String>,
}

impl VocabEntry {
    /// Create an entry with no canonical form.
    pub fn new(word: impl Into<String>, word_type: WordType) -> Self {
        Self {
            word: word.into().to_lowercase(),
            word_type,
            canonical: None,
            category: None,
        }
    }

    /// Create a synonym entry pointing at a canonical form.
    pub fn synonym(
        word: impl Into<String>,
        word_type: WordType,
        canonical: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into().to_lowercase(),
            word_type,
            canonical: Some(canonical.into().to_lowercase()),
            category: None,
        }
    }
}

/// The vocabulary table, keyed by (word, word type).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    entries: HashMap<(String, WordType), VocabEntry>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous entry for the same key.
    pub fn insert(&mut self, entry: VocabEntry) {
        self.entries
            .insert((entry.word.clone(), entry.word_type), entry);
    }

    /// Look up an entry by word and type, case-insensitively.
    pub fn get(&self, word: &str, word_type: WordType) -> Option<&VocabEntry> {
        self.entries.get(&(word.to_lowercase(), word_type))
    }

    /// Normalize a word of the given type.
    ///
    /// Single-hop: the canonical form of a canonical form is not chased.
    /// A word with no entry, or with no canonical form, normalizes to its
    /// lower-cased self.
    pub fn normalize(&self, word: &str, word_type: WordType) -> String {
        let lowered = word.to_lowercase();
        match self.get(&lowered, word_type) {
            Some(entry) => entry
                .canonical
                .clone()
                .unwrap_or_else(|| lowered.clone()),
            None => lowered,
        }
    }

    /// The canonical form recorded for a word, if the word has one.
    ///
    /// Unlike [`Lexicon::normalize`] this does not fall back to the word
    /// itself; it is used for reverse-synonym matching, where only an
    /// explicit canonical link counts.
    pub fn canonical_of(&self, word: &str, word_type: WordType) -> Option<&str> {
        self.get(word, word_type)
            .and_then(|e| e.canonical.as_deref())
    }

    /// Number of entries in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &VocabEntry> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Lexicon {
        let mut lex = Lexicon::new();
        lex.insert(VocabEntry::synonym("grab", WordType::Verb, "take"));
        lex.insert(VocabEntry::synonym("lantern", WordType::Noun, "lamp"));
        lex.insert(VocabEntry::synonym("gold", WordType::Adjective, "golden"));
        lex.insert(VocabEntry::new("lamp", WordType::Noun));
        lex
    }

    #[test]
    fn normalize_follows_canonical() {
        let lex = sample();
        assert_eq!(lex.normalize("grab", WordType::Verb), "take");
        assert_eq!(lex.normalize("Lantern", WordType::Noun), "lamp");
    }

    #[test]
    fn normalize_unknown_word_lowercases() {
        let lex = sample();
        assert_eq!(lex.normalize("Sword", WordType::Noun), "sword");
    }

    #[test]
    fn normalize_is_scoped_by_word_type() {
        let lex = sample();
        // "grab" is only a verb synonym; as a noun it normalizes to itself.
        assert_eq!(lex.normalize("grab", WordType::Noun), "grab");
    }

    #[test]
    fn normalize_is_single_hop() {
        let mut lex = Lexicon::new();
        lex.insert(VocabEntry::synonym("a", WordType::Noun, "b"));
        lex.insert(VocabEntry::synonym("b", WordType::Noun, "c"));
        // Does not chase b -> c.
        assert_eq!(lex.normalize("a", WordType::Noun), "b");
    }

    #[test]
    fn canonical_of_requires_explicit_link() {
        let lex = sample();
        assert_eq!(lex.canonical_of("lantern", WordType::Noun), Some("lamp"));
        assert_eq!(lex.canonical_of("lamp", WordType::Noun), None);
        assert_eq!(lex.canonical_of("missing", WordType::Noun), None);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent_for_entries(word in "[a-z]{1,8}") {
            let mut lex = sample();
            lex.insert(VocabEntry::synonym(word.clone(), WordType::Noun, "lamp"));
            let once = lex.normalize(&word, WordType::Noun);
            prop_assert_eq!(lex.normalize(&once, WordType::Noun), once);
        }

        #[test]
        fn normalize_output_is_lowercase(word in "[a-zA-Z]{1,12}") {
            let lex = sample();
            let out = lex.normalize(&word, WordType::Adjective);
            prop_assert_eq!(out.clone(), out.to_lowercase());
        }
    }
}
