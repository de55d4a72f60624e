//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{GlossaError, Result};

/// Runs of word characters, joined across apostrophes that sit between them.
pub const DEFAULT_PATTERN: &str = r"\w+(?:['’]\w+)*";

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// The default pattern splits on whitespace and punctuation but keeps an
/// apostrophe inside a word, so `n'est` and `aujourd'hui` stay whole while a
/// quote at a word edge is dropped.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(compile(pattern)?),
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(compile(pattern)?),
            gaps: true,
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }

    fn gap_tokens(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut last_end = 0;

        let mut push = |start: usize, end: usize| {
            if end > start {
                let position = tokens.len();
                tokens.push(Token::with_offsets(&text[start..end], position, start, end));
            }
        };

        for mat in self.pattern.find_iter(text) {
            push(last_end, mat.start());
            last_end = mat.end();
        }
        push(last_end, text.len());

        tokens
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| GlossaError::analysis(format!("Invalid regex pattern: {e}")))
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = if self.gaps {
            self.gap_tokens(text)
        } else {
            self.pattern
                .find_iter(text)
                .enumerate()
                .map(|(position, mat)| {
                    Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                })
                .collect()
        };

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &RegexTokenizer, input: &str) -> Vec<String> {
        tokenizer.tokenize(input).unwrap().map(|t| t.text).collect()
    }

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_apostrophes_inside_words() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(
            texts(&tokenizer, "Ceci n'est pas Française"),
            vec!["Ceci", "n'est", "pas", "Française"]
        );
        assert_eq!(
            texts(&tokenizer, "aujourd’hui, 'quoted' rock'n'roll"),
            vec!["aujourd’hui", "quoted", "rock'n'roll"]
        );
    }

    #[test]
    fn test_punctuation_splits() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(
            texts(&tokenizer, "state-of-the-art;done.\u{0000}x"),
            vec!["state", "of", "the", "art", "done", "x"]
        );
    }

    #[test]
    fn test_regex_tokenizer_with_gaps() {
        let tokenizer = RegexTokenizer::with_gaps(r"\s+").unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize(" hello  world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 8);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            RegexTokenizer::with_pattern("(unclosed"),
            Err(GlossaError::Analysis(_))
        ));
    }
}
