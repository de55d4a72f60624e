//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first token-producing step of an analyzer: they split a
//! payload into [`Token`](crate::analysis::token::Token)s with positions and
//! byte offsets. Normalization happens afterwards, in token filters.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Word characters, keeping inner apostrophes (default)
//! - [`unicode_word::UnicodeWordTokenizer`] - Unicode word boundaries (UAX #29)
//! - [`whole::WholeTokenizer`] - The whole payload as a single token
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::tokenizer::Tokenizer;
//! use glossa::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Ceci n'est pas").unwrap().collect();
//! assert_eq!(tokens[1].text, "n'est");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so analyzers built from tokenizers can be
/// shared across concurrent analysis requests.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod unicode_word;
pub mod whole;
