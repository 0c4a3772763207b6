//! Fixed word classes used while parsing: prepositions, articles,
//! conjunctions, multi-object keywords, and pronouns.

/// Prepositions recognized mid-command.
const PREPOSITIONS: &[&str] = &[
    // Location
    "in", "into", "inside", "on", "onto", "upon", "under", "underneath", "beneath", "behind",
    "beside", "near", // Instrumental
    "with", "using", // Directional
    "to", "toward", "towards", "from", "at", // Other
    "through", "over", "across", "around", "about",
];

/// Articles stripped from object phrases.
const ARTICLES: &[&str] = &["the", "a", "an", "some"];

/// Conjunctions separating multiple direct objects.
const CONJUNCTIONS: &[&str] = &["and", "then"];

/// Keywords meaning "operate on everything in scope".
const MULTI_OBJECT_KEYWORDS: &[&str] = &["all", "everything", "each", "every"];

/// Pronouns referring back to recent context.
const PRONOUNS: &[&str] = &["it", "that", "this", "them", "these", "those"];

/// Whether a word is a recognized preposition.
pub fn is_preposition(word: &str) -> bool {
    PREPOSITIONS.contains(&word)
}

/// Whether a word is an article.
pub fn is_article(word: &str) -> bool {
    ARTICLES.contains(&word)
}

/// Whether a word is a conjunction.
pub fn is_conjunction(word: &str) -> bool {
    CONJUNCTIONS.contains(&word)
}

/// Whether a word asks to operate on everything in scope.
pub fn is_multi_object_keyword(word: &str) -> bool {
    MULTI_OBJECT_KEYWORDS.contains(&word)
}

/// Whether a word is a context pronoun.
pub fn is_pronoun(word: &str) -> bool {
    PRONOUNS.contains(&word)
}

/// Canonical form of a preposition synonym.
pub fn normalize_preposition(preposition: &str) -> &str {
    match preposition {
        "into" | "inside" => "in",
        "onto" | "upon" => "on",
        "underneath" | "beneath" => "under",
        "using" => "with",
        "toward" | "towards" => "to",
        other => other,
    }
}

/// Remove articles from a word sequence.
pub fn strip_articles<'a>(words: &[&'a str]) -> Vec<&'a str> {
    words.iter().copied().filter(|w| !is_article(w)).collect()
}

/// Split a phrase on conjunctions into article-free sub-phrases.
///
/// `"the lamp and a sword"` becomes `["lamp", "sword"]`.
pub fn split_by_conjunction(text: &str) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        if is_conjunction(word) {
            if !current.is_empty() {
                phrases.push(current.join(" "));
                current.clear();
            }
        } else if !is_article(word) {
            current.push(word);
        }
    }
    if !current.is_empty() {
        phrases.push(current.join(" "));
    }

    phrases
}
