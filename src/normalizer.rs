//! Text normalization for book title and description.
//!
//! Replicates the preprocessing applied when the rating models were trained:
//! the title and description are joined with a space and pushed through
//! lowercasing, punctuation stripping, stopword removal, and
//! non-alphanumeric stripping, in exactly that order.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// ASCII punctuation replaced by spaces in the second stage. Includes `_`,
/// so underscores never survive into the token string.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Normalizer producing the token string the vectorizer was trained on.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    /// Stopwords dropped in the third stage (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    /// Create a normalizer with the English stopword list.
    pub fn new() -> Self {
        let stopwords = get(LANGUAGE::English)
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// Create a normalizer with a custom stopword list.
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|word| word.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Check if a word is dropped by the stopword stage.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Normalize a title/description pair into a single token string.
    ///
    /// The stage order is load-bearing: stopword matching only works on
    /// lowercase, punctuation-free text.
    pub fn normalize(&self, title: &str, description: &str) -> String {
        let joined = format!("{} {}", title, description);
        let lowered = joined.to_lowercase();
        let stripped = strip_punctuation(&lowered);
        let filtered = self.remove_stopwords(&stripped);
        strip_non_alphanum(&filtered)
    }

    /// Drop stopwords, re-joining the remaining tokens with single spaces.
    fn remove_stopwords(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.stopwords.contains(*word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Replace every ASCII punctuation character with a space.
fn strip_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| if PUNCTUATION.contains(c) { ' ' } else { c })
        .collect()
}

/// Replace everything that is not alphanumeric or `_` with a space and
/// collapse the result onto single spaces.
fn strip_non_alphanum(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
