//! Keyword analyzer that treats the entire payload as a single term.
//!
//! The term is still lowercased and folded, so `ABC-Été` and `abc-ete` match.
//! Suited to codes, tags and identifiers.
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::analyzer::Analyzer;
//! use glossa::analysis::analyzer::keyword::KeywordAnalyzer;
//!
//! let analyzer = KeywordAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("User-123-ABC").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "user-123-abc");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::whole::WholeTokenizer;
use crate::error::Result;

/// The analyzer registered as `keyword`.
#[derive(Debug)]
pub struct KeywordAnalyzer {
    inner: PipelineAnalyzer,
}

impl KeywordAnalyzer {
    /// Create a new keyword analyzer.
    pub fn new() -> Self {
        let analyzer =
            PipelineAnalyzer::baseline(Arc::new(WholeTokenizer::new())).with_name("keyword");

        KeywordAnalyzer { inner: analyzer }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for KeywordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_keyword_analyzer() {
        let analyzer = KeywordAnalyzer::new();

        let tokens: Vec<Token> = analyzer.analyze("  Ceci n'est pas Française ").unwrap().collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "ceci n'est pas francaise");
        assert_eq!(tokens[0].start_offset, 2);
    }

    #[test]
    fn test_blank_payload_has_no_term() {
        let analyzer = KeywordAnalyzer::new();
        assert_eq!(analyzer.analyze("   ").unwrap().count(), 0);
    }
}
