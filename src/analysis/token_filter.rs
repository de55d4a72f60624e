//! Token filter implementations for token transformation.
//!
//! Filters receive the tokenizer's stream and produce a new one. The baseline
//! chain every built-in analyzer shares is:
//!
//! ```text
//! Tokenizer → Lowercase → ASCII folding → (Stop words)
//! ```
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`ascii_folding::AsciiFoldingFilter`] - Folds accented letters to ASCII
//! - [`stop::StopFilter`] - Removes stop words
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::token_filter::Filter;
//! use glossa::analysis::token_filter::lowercase::LowercaseFilter;
//! use glossa::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Ceci", 0), Token::new("PAS", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "ceci");
//! assert_eq!(filtered[1].text, "pas");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod ascii_folding;
pub mod lowercase;
pub mod stop;
