//! Closed keyword vocabularies and the whole-word matchers built from them.

use regex::Regex;
use std::sync::LazyLock;

use super::types::Sentiment;

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "love", "best",
    "perfect", "awesome", "brilliant", "outstanding", "superb", "incredible", "beautiful",
    "happy", "delighted", "satisfied", "pleased", "recommend", "impressive",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "worst", "hate", "disappointing", "poor",
    "useless", "waste", "never", "not", "disappointed", "angry", "frustrated", "sad",
    "unfortunate", "regret", "inferior", "pathetic", "unacceptable",
];

pub const NEUTRAL_WORDS: &[&str] = &[
    "okay", "fine", "average", "normal", "standard", "acceptable", "decent",
];

/// Substring triggers; "every" counts as containing "very".
pub const INTENSIFIERS: &[&str] = &["very", "extremely", "absolutely"];

static POSITIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| whole_word_regex(POSITIVE_WORDS));
static NEGATIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| whole_word_regex(NEGATIVE_WORDS));
static NEUTRAL_REGEX: LazyLock<Regex> = LazyLock::new(|| whole_word_regex(NEUTRAL_WORDS));

fn whole_word_regex(words: &[&str]) -> Regex {
    // ASCII word boundaries: an accented letter next to a keyword does not
    // extend the word. Alternatives are pure ASCII letters anchored on both
    // sides, so matches never overlap and the match count equals the sum of
    // per-word counts.
    let pattern = format!(r"(?-u:\b)(?:{})(?-u:\b)", words.join("|"));
    Regex::new(&pattern).expect("keyword vocabulary must form a valid pattern")
}

/// Counts whole-word keyword hits for `category`. Expects lowercased text.
pub fn count_keywords(category: Sentiment, lowered: &str) -> usize {
    let regex: &Regex = match category {
        Sentiment::Positive => &*POSITIVE_REGEX,
        Sentiment::Neutral => &*NEUTRAL_REGEX,
        Sentiment::Negative => &*NEGATIVE_REGEX,
    };
    regex.find_iter(lowered).count()
}

pub fn contains_intensifier(lowered: &str) -> bool {
    INTENSIFIERS.iter().any(|word| lowered.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(POSITIVE_WORDS.len(), 21);
        assert_eq!(NEGATIVE_WORDS.len(), 21);
        assert_eq!(NEUTRAL_WORDS.len(), 7);
    }

    #[test]
    fn test_whole_word_only() {
        assert_eq!(count_keywords(Sentiment::Negative, "badge is great"), 0);
        assert_eq!(count_keywords(Sentiment::Positive, "badge is great"), 1);
        assert_eq!(count_keywords(Sentiment::Negative, "nothing to note"), 0);
        assert_eq!(count_keywords(Sentiment::Positive, "goodness, lovely"), 0);
    }

    #[test]
    fn test_repeated_and_punctuated_words() {
        assert_eq!(count_keywords(Sentiment::Positive, "good, good. good!"), 3);
        assert_eq!(count_keywords(Sentiment::Negative, "not bad, not sad"), 4);
        assert_eq!(count_keywords(Sentiment::Neutral, "it's fine (okay-ish)"), 2);
    }

    #[test]
    fn test_apostrophe_splits_words() {
        // "it's" → "it" + "s"; "don't" → "don" + "t": neither contains "not".
        assert_eq!(count_keywords(Sentiment::Negative, "don't"), 0);
    }

    #[test]
    fn test_accented_letters_are_not_word_characters() {
        assert_eq!(count_keywords(Sentiment::Negative, "ébad"), 1);
        assert_eq!(count_keywords(Sentiment::Negative, "très bad, ébad"), 2);
        assert_eq!(count_keywords(Sentiment::Positive, "goodé"), 1);
        assert_eq!(count_keywords(Sentiment::Positive, "good_ness good2"), 0);
    }

    #[test]
    fn test_intensifier_is_substring_match() {
        assert!(contains_intensifier("very nice"));
        assert!(contains_intensifier("every day"));
        assert!(contains_intensifier("absolutely"));
        assert!(!contains_intensifier("quite nice"));
    }
}
