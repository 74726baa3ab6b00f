use std::collections::HashSet;

use regex::Regex;

/// Maximal runs of ASCII letters, matched case-insensitively.
const DEFAULT_TOKEN_PATTERN: &str = "(?i)[a-z]+";

/// Splits raw text into tokens with a configurable regex pattern and drops
/// caller-supplied stopwords by exact string membership.
///
/// Extracted tokens keep their original spelling: the default pattern
/// matches case-insensitively but performs no case-folding, so two case
/// variants of the same word become two distinct terms unless the pattern
/// or the stopword set accounts for it.
///
/// # Examples
/// ```
/// use tfidf_cosine::Tokenizer;
///
/// let tokenizer = Tokenizer::new().with_stopwords(["the"]);
/// let tokens = tokenizer.tokenize("the cat in the hat!");
/// assert_eq!(tokens, vec!["cat", "in", "hat"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    stopwords: HashSet<String>,
}

impl Tokenizer {
    /// Create a tokenizer with the default pattern and no stopwords.
    pub fn new() -> Self {
        Tokenizer {
            // the default pattern is a known-good literal
            pattern: Regex::new(DEFAULT_TOKEN_PATTERN).expect("default token pattern compiles"),
            stopwords: HashSet::new(),
        }
    }

    /// Replace the token-matching pattern.
    ///
    /// # Arguments
    /// * `pattern` - compiled regex; every non-overlapping match becomes a
    ///   token candidate, in input order
    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = pattern;
        self
    }

    /// Replace the stopword set.
    ///
    /// # Arguments
    /// * `stopwords` - strings excluded from the token stream by exact match
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = stopwords.into_iter().map(Into::into).collect();
        self
    }

    /// Extract the surviving tokens of `text`, in original order.
    /// Duplicates are kept; empty or non-matching text yields an empty vec.
    #[inline]
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|token| !self.stopwords.contains(*token))
            .collect()
    }

    /// Whether `token` is in the stopword set.
    #[inline]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_extracts_letter_runs_in_order() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("the matt said 'that was that', and that was that");
        assert_eq!(
            tokens,
            vec!["the", "matt", "said", "that", "was", "that", "and", "that", "was", "that"]
        );
    }

    #[test]
    fn stopwords_are_removed_by_exact_match() {
        let tokenizer = Tokenizer::new().with_stopwords(["the", "is", "in"]);
        let tokens = tokenizer.tokenize("the cat in the hat is black!");
        assert_eq!(tokens, vec!["cat", "hat", "black"]);
    }

    #[test]
    fn empty_and_non_matching_text_yield_no_tokens() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("123 456 !?").is_empty());
    }

    #[test]
    fn tokens_keep_original_case() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("Cat cat CAT");
        // matched case-insensitively, extracted verbatim
        assert_eq!(tokens, vec!["Cat", "cat", "CAT"]);
    }

    #[test]
    fn custom_pattern_is_honored() {
        let pattern = Regex::new(r"\w+").unwrap();
        let tokenizer = Tokenizer::new().with_pattern(pattern);
        let tokens = tokenizer.tokenize("alpha_1 beta2");
        assert_eq!(tokens, vec!["alpha_1", "beta2"]);
    }

    #[test]
    fn case_variant_stopword_survives() {
        let tokenizer = Tokenizer::new().with_stopwords(["the"]);
        let tokens = tokenizer.tokenize("The the");
        assert_eq!(tokens, vec!["The"]);
    }
}
