//! Unicode analyzer: the baseline normalization over UAX #29 word
//! boundaries.
//!
//! Useful for scripts the default word pattern handles poorly, and for text
//! mixing scripts within one value.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// The analyzer registered as `unicode`.
#[derive(Debug)]
pub struct UnicodeAnalyzer {
    inner: PipelineAnalyzer,
}

impl UnicodeAnalyzer {
    /// Create a new Unicode analyzer.
    pub fn new() -> Self {
        let analyzer =
            PipelineAnalyzer::baseline(Arc::new(UnicodeWordTokenizer::new())).with_name("unicode");

        UnicodeAnalyzer { inner: analyzer }
    }
}

impl Default for UnicodeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for UnicodeAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "unicode"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_analyzer() {
        let analyzer = UnicodeAnalyzer::new();
        let terms: Vec<String> = analyzer
            .analyze("L’été à Zürich, 2024.")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(terms, vec!["l'ete", "a", "zurich", "2024"]);
    }

    #[test]
    fn test_non_latin_kept() {
        let analyzer = UnicodeAnalyzer::new();
        let terms: Vec<String> = analyzer
            .analyze("Привет мир")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(terms, vec!["привет", "мир"]);
    }
}
