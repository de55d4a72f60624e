//! Standard analyzer: the baseline normalization with the default word
//! tokenizer.
//!
//! # Pipeline
//!
//! 1. LocaleDirectiveCharFilter
//! 2. RegexTokenizer (word characters, inner apostrophes kept)
//! 3. LowercaseFilter
//! 4. AsciiFoldingFilter
//!
//! No stop words are removed, so every word of the payload yields a term.
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::analyzer::Analyzer;
//! use glossa::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Hello the World").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].text, "the");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// The analyzer registered as `standard`.
#[derive(Debug)]
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::baseline(tokenizer).with_name("standard");

        Ok(StandardAnalyzer { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new().expect("Standard analyzer should be creatable with default settings")
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn terms(text: &str) -> Vec<String> {
        StandardAnalyzer::new()
            .unwrap()
            .analyze(text)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_standard_analyzer() {
        assert_eq!(
            terms("Ceci n'est pas Française"),
            vec!["ceci", "n'est", "pas", "francaise"]
        );
    }

    #[test]
    fn test_punctuation_and_whitespace() {
        assert_eq!(
            terms("  «Crème», brûlée;\tSTRAẞE!  "),
            vec!["creme", "brulee", "strasse"]
        );
        assert!(terms(" \t ").is_empty());
        assert!(terms("").is_empty());
    }

    #[test]
    fn test_positions_and_offsets() {
        let analyzer = StandardAnalyzer::new().unwrap();
        let text = "Ceci n'est";
        let tokens: Vec<Token> = analyzer.analyze(text).unwrap().collect();

        assert_eq!(tokens[1].position, 1);
        assert_eq!(&text[tokens[1].start_offset..tokens[1].end_offset], "n'est");
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(StandardAnalyzer::default().name(), "standard");
    }
}
