//! Stop filter implementation.
//!
//! Removes common words that carry little meaning for matching. The built-in
//! lists are stored in their folded form (`meme`, not `même`) because the
//! filter runs after lowercasing and ASCII folding.
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::token_filter::Filter;
//! use glossa::analysis::token_filter::stop::StopFilter;
//! use glossa::analysis::token::Token;
//!
//! let filter = StopFilter::french();
//! let tokens = vec![
//!     Token::new("le", 0),
//!     Token::new("chat", 1),
//!     Token::new("et", 2),
//!     Token::new("la", 3),
//!     Token::new("souris", 4),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "chat");
//! assert_eq!(result[1].text, "souris");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

const FRENCH_STOP_WORDS: &[&str] = &[
    "a", "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux",
    "il", "je", "l", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "meme", "mes", "moi",
    "mon", "ne", "nos", "notre", "nous", "on", "ou", "par", "pour", "qu", "que", "qui", "sa", "se",
    "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos", "votre",
    "vous",
];

const GERMAN_STOP_WORDS: &[&str] = &[
    "aber", "als", "am", "an", "auch", "auf", "aus", "bei", "bin", "bis", "das", "dass", "dem",
    "den", "der", "des", "die", "du", "ein", "eine", "einem", "einen", "einer", "eines", "er",
    "es", "fur", "hat", "ich", "ihr", "im", "in", "ist", "mit", "nach", "nicht", "noch", "oder",
    "sie", "sind", "so", "uber", "um", "und", "von", "vor", "war", "wie", "wir", "zu", "zum",
    "zur",
];

fn word_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|&s| s.to_string()).collect()
}

/// Built-in English stop words.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| word_set(ENGLISH_STOP_WORDS));

/// Built-in French stop words, folded.
pub static FRENCH_STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| word_set(FRENCH_STOP_WORDS));

/// Built-in German stop words, folded.
pub static GERMAN_STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| word_set(GERMAN_STOP_WORDS));

/// A filter that removes stop words from the token stream.
///
/// Removed tokens leave a gap in positions; the surviving tokens keep the
/// positions the tokenizer gave them.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the built-in English stop words.
    ///
    /// ```
    /// use glossa::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(!filter.is_stop_word("hello"));
    /// ```
    pub fn new() -> Self {
        Self::english()
    }

    /// English stop words.
    pub fn english() -> Self {
        Self::with_stop_words(ENGLISH_STOP_WORDS_SET.clone())
    }

    /// French stop words.
    pub fn french() -> Self {
        Self::with_stop_words(FRENCH_STOP_WORDS_SET.clone())
    }

    /// German stop words.
    pub fn german() -> Self {
        Self::with_stop_words(GERMAN_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use glossa::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(Into::into).collect())
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        Ok(Box::new(
            tokens.filter(move |token| !stop_words.contains(&token.text)),
        ))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
            Token::new("and", 3),
            Token::new("test", 4),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[1].position, 2);
        assert_eq!(result[2].text, "test");
    }

    #[test]
    fn test_builtin_lists_are_folded() {
        for word in ["meme", "fur", "uber"] {
            assert!(
                StopFilter::french().is_stop_word(word) || StopFilter::german().is_stop_word(word),
                "{word} missing"
            );
        }
        assert!(!StopFilter::french().is_stop_word("même"));
        assert!(StopFilter::german().is_stop_word("und"));
        assert!(!StopFilter::english().is_stop_word("und"));
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = StopFilter::with_stop_words(HashSet::new());
        assert!(filter.is_empty());

        let tokens = vec![Token::new("the", 0)];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert_eq!(result.len(), 1);
    }
}
