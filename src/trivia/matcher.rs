//! Fuzzy answer matching.
//!
//! A guess matches an accepted answer when the case-insensitive
//! Levenshtein distance (unit insert/delete/substitute costs, measured
//! over chars) is within `floor(answer_chars / 8)`. Longer answers
//! tolerate roughly one typo per eight characters; answers shorter than
//! eight characters must match exactly, which keeps near-misses on short
//! answers from scoring.

use rapidfuzz::distance::levenshtein;

/// Check a candidate guess against a set of accepted answers.
///
/// An empty answer set never matches.
pub fn matches(candidate: &str, answers: &[String]) -> bool {
    let guess = candidate.to_lowercase();
    answers.iter().any(|answer| {
        let correct = answer.to_lowercase();
        let tolerance = correct.chars().count() / 8;
        levenshtein::distance(guess.chars(), correct.chars()) <= tolerance
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match() {
        assert!(matches("Paris", &answers(&["Paris"])));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(matches("pArIs", &answers(&["Paris"])));
        assert!(matches("WASHINGTON", &answers(&["washington"])));
    }

    #[test]
    fn test_empty_answer_set_never_matches() {
        assert!(!matches("anything", &[]));
        assert!(!matches("", &[]));
    }

    #[test]
    fn test_empty_strings_match_exactly() {
        assert!(matches("", &answers(&[""])));
    }

    #[test]
    fn test_short_answer_has_zero_tolerance() {
        // 3 chars: tolerance floors to 0
        assert!(matches("cat", &answers(&["cat"])));
        assert!(!matches("bat", &answers(&["cat"])));
        assert!(!matches("cats", &answers(&["cat"])));
    }

    #[test]
    fn test_eight_char_answer_tolerates_one_edit() {
        // "elephant" is 8 chars: tolerance 1
        assert!(matches("elephant", &answers(&["elephant"])));
        assert!(matches("elefhant", &answers(&["elephant"])));
        assert!(matches("elephan", &answers(&["elephant"])));
        assert!(!matches("elefhunt", &answers(&["elephant"])));
    }

    #[test]
    fn test_seven_char_answer_requires_exact() {
        assert!(!matches("jupiterr", &answers(&["jupiter"])));
    }

    #[test]
    fn test_long_answer_tolerates_more_edits() {
        // 17 chars: tolerance 2
        let correct = answers(&["the great gatsby!"]);
        assert!(matches("the graet gatsby!", &correct));
        assert!(matches("the great gatsbee!", &correct));
    }

    #[test]
    fn test_matches_any_accepted_answer() {
        let correct = answers(&["Washington", "George Washington"]);
        assert!(matches("george washington", &correct));
        assert!(matches("washington", &correct));
        assert!(!matches("lincoln", &correct));
    }

    #[test]
    fn test_unicode_answer_counts_chars_not_bytes() {
        // 9 chars but more bytes: tolerance is still 1
        assert!(matches("québécoi", &answers(&["québécois"])));
    }
}
