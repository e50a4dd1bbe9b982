// Tokenization and stemming.
//
// Two tokenizers behind one trait: the classifier keeps surface forms
// (word boundaries only), the similarity comparison stems each token to
// its root so "vote", "votes", and "voting" land in the same vocabulary
// slot. Stop-word filtering deliberately does NOT happen here: the
// vectorizer applies its configured exclusion set, so the same tokenizer
// can serve corpora with different exclusion lists.

use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer};
use stop_words::{get, LANGUAGE};

/// Trait for splitting normalized text into a token stream.
///
/// Implementations must be deterministic: the same input always produces
/// the same token sequence.
pub trait Tokenize {
    /// Split text into an ordered sequence of lowercase tokens.
    /// Punctuation-only or empty input yields an empty sequence.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Split `text` on characters that are neither alphanumeric nor an
/// apostrophe, then trim stray apostrophes. Keeps contractions together
/// ("won't") while splitting hyphenated and punctuated runs.
fn split_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Word-boundary tokenizer with no stemming.
#[derive(Default)]
pub struct WordTokenizer;

impl Tokenize for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        split_words(text)
    }
}

/// Word-boundary tokenizer followed by Porter-family English stemming
/// per token. Stemming is idempotent: stem(stem(w)) == stem(w).
pub struct StemmingTokenizer {
    stemmer: Stemmer,
}

impl StemmingTokenizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for StemmingTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenize for StemmingTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        split_words(text)
            .into_iter()
            .map(|w| self.stemmer.stem(&w).into_owned())
            .collect()
    }
}

/// Exclusion set applied by the vectorizer: tokens in this set never
/// enter the vocabulary.
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The English stop-word list from the stop-words crate.
    pub fn english() -> Self {
        let words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
        Self { words }
    }

    /// English stop words plus the Twitter-convention tokens "ff"
    /// (follow Friday) and "rt" (retweet), which are ubiquitous in tweet
    /// corpora and carry no authorship signal.
    pub fn english_with_twitter_exclusions() -> Self {
        let mut sw = Self::english();
        for extra in ["ff", "rt"] {
            sw.words.insert(extra.to_string());
        }
        sw
    }

    /// An empty exclusion set (nothing filtered).
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenizer_basic() {
        let t = WordTokenizer;
        assert_eq!(
            t.tokenize("make america great again"),
            vec!["make", "america", "great", "again"]
        );
    }

    #[test]
    fn test_word_tokenizer_splits_punctuation() {
        let t = WordTokenizer;
        assert_eq!(t.tokenize("wall-street, banks!"), vec!["wall", "street", "banks"]);
    }

    #[test]
    fn test_word_tokenizer_keeps_contractions() {
        let t = WordTokenizer;
        assert_eq!(t.tokenize("won't stop"), vec!["won't", "stop"]);
    }

    #[test]
    fn test_word_tokenizer_lowercases() {
        let t = WordTokenizer;
        assert_eq!(t.tokenize("URLHERE"), vec!["urlhere"]);
    }

    #[test]
    fn test_punctuation_only_yields_nothing() {
        let t = WordTokenizer;
        assert!(t.tokenize("?!... --- ''").is_empty());
        assert!(t.tokenize("").is_empty());
    }

    #[test]
    fn test_stemming_tokenizer_reduces_to_root() {
        let t = StemmingTokenizer::new();
        assert_eq!(t.tokenize("running runs"), vec!["run", "run"]);
    }

    #[test]
    fn test_stemming_idempotent() {
        let t = StemmingTokenizer::new();
        for word in ["running", "votes", "taxes", "immigration", "flies", "agreed"] {
            let once = t.tokenize(word);
            let twice = t.tokenize(&once.join(" "));
            assert_eq!(once, twice, "stem not idempotent for {word}");
        }
    }

    #[test]
    fn test_stop_words_english_contains_function_words() {
        let sw = StopWords::english();
        assert!(sw.contains("the"));
        assert!(sw.contains("and"));
        assert!(!sw.contains("america"));
    }

    #[test]
    fn test_twitter_exclusions() {
        let sw = StopWords::english_with_twitter_exclusions();
        assert!(sw.contains("rt"));
        assert!(sw.contains("ff"));
        assert!(sw.len() > StopWords::english().len());
    }

    #[test]
    fn test_stop_words_none() {
        let sw = StopWords::none();
        assert!(sw.is_empty());
        assert!(!sw.contains("the"));
    }
}
