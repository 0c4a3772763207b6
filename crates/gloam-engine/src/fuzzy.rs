//! Edit-distance matching for typo tolerance.
//!
//! Comparisons lower-case both sides before measuring, so callers can pass
//! surface text straight from the parser.

/// Levenshtein distance between two strings, case-insensitive.
pub fn distance(source: &str, target: &str) -> usize {
    strsim::levenshtein(&source.to_lowercase(), &target.to_lowercase())
}

/// Whether two non-empty strings are within `max_distance` edits.
///
/// Empty inputs never match; a typo of nothing is not a word.
pub fn is_similar(source: &str, target: &str, max_distance: usize) -> bool {
    if source.is_empty() || target.is_empty() {
        return false;
    }
    distance(source, target) <= max_distance
}

/// The closest candidate within `max_distance` edits, if any.
pub fn best_match<'a, I>(input: &str, candidates: I, max_distance: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(|c| (c, distance(input, c)))
        .filter(|(_, d)| *d <= max_distance)
        .min_by_key(|(_, d)| *d)
        .map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distance_of_equal_strings_is_zero() {
        assert_eq!(distance("lamp", "lamp"), 0);
        assert_eq!(distance("Lamp", "lamp"), 0);
    }

    #[test]
    fn distance_from_empty_is_length() {
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
        assert_eq!(distance("", ""), 0);
    }

    #[test]
    fn kitten_sitting_is_three() {
        assert_eq!(distance("kitten", "sitting"), 3);
    }

    #[test]
    fn is_similar_accepts_small_typos() {
        assert!(is_similar("lmap", "lamp", 2));
        assert!(is_similar("lanter", "lantern", 2));
        assert!(!is_similar("sword", "lamp", 2));
    }

    #[test]
    fn is_similar_rejects_empty_inputs() {
        assert!(!is_similar("", "lamp", 2));
        assert!(!is_similar("lamp", "", 2));
    }

    #[test]
    fn best_match_prefers_closest() {
        let candidates = ["lamp", "lantern", "map"];
        assert_eq!(best_match("lmap", candidates, 2), Some("lamp"));
        assert_eq!(best_match("zzzzz", candidates, 2), None);
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(s in "[a-zA-Z]{0,16}") {
            prop_assert_eq!(distance(&s, &s), 0);
        }

        #[test]
        fn distance_is_symmetric(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
            prop_assert_eq!(distance(&a, &b), distance(&b, &a));
        }

        #[test]
        fn distance_bounded_by_longer_length(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
            prop_assert!(distance(&a, &b) <= a.len().max(b.len()));
        }
    }
}
