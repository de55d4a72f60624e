use std::fmt::{Debug, Formatter};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::language::stop_word_pipeline;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::stop::StopFilter;
use crate::error::Result;

pub struct GermanAnalyzer {
    inner: PipelineAnalyzer,
}

impl GermanAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: stop_word_pipeline("german", StopFilter::german())?,
        })
    }
}

impl Default for GermanAnalyzer {
    fn default() -> Self {
        Self::new().expect("German analyzer should be creatable with default settings")
    }
}

impl Analyzer for GermanAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "german"
    }
}

impl Debug for GermanAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GermanAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_german_analyzer() {
        let analyzer = GermanAnalyzer::new().unwrap();

        let terms: Vec<String> = analyzer
            .analyze("Der Hund und die Katze über dem Dach")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(terms, vec!["hund", "katze", "dach"]);
    }

    #[test]
    fn test_german_analyzer_name() {
        assert_eq!(GermanAnalyzer::default().name(), "german");
    }
}
