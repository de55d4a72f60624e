//! Analyzers that combine char filters, a tokenizer and token filters.
//!
//! An analyzer is the strategy a property uses to turn one payload into
//! terms. Every built-in analyzer applies the same baseline normalization:
//!
//! ```text
//! Raw Text → LocaleDirective char filter → Tokenizer → Lowercase → ASCII folding
//! ```
//!
//! # Available Implementations
//!
//! - [`standard::StandardAnalyzer`] - Word tokenizer plus baseline normalization
//! - [`unicode::UnicodeAnalyzer`] - UAX #29 word boundaries plus baseline normalization
//! - [`keyword::KeywordAnalyzer`] - The whole payload as one normalized term
//! - [`language`] - Baseline plus language stop words
//! - [`pipeline::PipelineAnalyzer`] - Custom char filter, tokenizer and filter chains
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::analyzer::Analyzer;
//! use glossa::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let terms: Vec<_> = analyzer
//!     .analyze("Ceci n'est pas Française")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(terms, vec!["ceci", "n'est", "pas", "francaise"]);
//! ```

pub mod keyword;
pub mod language;
pub mod pipeline;
pub mod standard;
pub mod unicode;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync`: one analyzer instance is shared by every
/// stream that resolves to it.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
