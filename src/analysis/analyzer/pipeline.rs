//! Pipeline analyzer that combines char filters, a tokenizer and filters.
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Char filters rewrite the raw text
//! 2. The tokenizer splits it into tokens
//! 3. Token filters run in the order they were added
//!
//! Token offsets are mapped back through the char filters, so they always
//! point into the text passed to [`Analyzer::analyze`].
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::analyzer::Analyzer;
//! use glossa::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use glossa::analysis::tokenizer::regex::RegexTokenizer;
//! use glossa::analysis::token_filter::lowercase::LowercaseFilter;
//! use glossa::analysis::token_filter::stop::StopFilter;
//! use std::sync::Arc;
//!
//! let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])))
//!     .with_name("my_custom_analyzer");
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello THE world AND test").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[2].text, "test");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::locale_directive::LocaleDirectiveCharFilter;
use crate::analysis::char_filter::{CharFilter, Transformation, correct_offset};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::ascii_folding::AsciiFoldingFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with chains of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Create a pipeline carrying the baseline normalization shared by all
    /// built-in analyzers: directive removal, lowercasing and ASCII folding.
    pub fn baseline(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self::new(tokenizer)
            .add_char_filter(Arc::new(LocaleDirectiveCharFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(AsciiFoldingFilter::new()))
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The name given to this pipeline.
    pub fn label(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the char filters used by this analyzer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

/// Map token offsets from filtered text back through every char filter,
/// last filter first.
fn restore_offsets(tokens: TokenStream, passes: Vec<Vec<Transformation>>) -> TokenStream {
    Box::new(tokens.map(move |mut token| {
        for transformations in passes.iter().rev() {
            token.start_offset = correct_offset(token.start_offset, transformations, false);
            token.end_offset = correct_offset(token.end_offset, transformations, true);
        }
        token
    }))
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut filtered_text = text.to_string();
        let mut passes = Vec::with_capacity(self.char_filters.len());

        for char_filter in &self.char_filters {
            let (new_text, transformations) = char_filter.filter(&filtered_text);
            filtered_text = new_text;
            passes.push(transformations);
        }

        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        if passes.iter().all(Vec::is_empty) {
            return Ok(tokens);
        }
        Ok(restore_offsets(tokens, passes))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::stop::StopFilter;
    use crate::analysis::tokenizer::regex::RegexTokenizer;
    use crate::analysis::tokenizer::whole::WholeTokenizer;

    #[test]
    fn test_pipeline_analyzer() {
        let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])));

        let tokens: Vec<Token> = analyzer
            .analyze("Hello THE world AND test")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_baseline_pipeline() {
        let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
        let analyzer = PipelineAnalyzer::baseline(tokenizer).with_name("baseline");

        let terms: Vec<String> = analyzer
            .analyze("Ceci n’est pas Française")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(terms, vec!["ceci", "n'est", "pas", "francaise"]);
        assert_eq!(analyzer.label(), "baseline");
    }

    #[test]
    fn test_offsets_skip_inline_directive() {
        let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
        let analyzer = PipelineAnalyzer::baseline(tokenizer);

        let text = "Bonjour \u{0000}de\u{0000}Hallo";
        let tokens: Vec<Token> = analyzer.analyze(text).unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "hallo");
        assert_eq!(&text[tokens[1].start_offset..tokens[1].end_offset], "Hallo");
        assert_eq!(&text[tokens[0].start_offset..tokens[0].end_offset], "Bonjour");
    }

    #[test]
    fn test_directive_without_spaces_splits_words() {
        let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
        let analyzer = PipelineAnalyzer::baseline(tokenizer);

        let text = "Bonjour\u{0000}de\u{0000}Hallo";
        let tokens: Vec<Token> = analyzer.analyze(text).unwrap().collect();

        let terms: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(terms, vec!["bonjour", "hallo"]);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 7));
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (11, 16));
        assert_eq!(&text[tokens[1].start_offset..tokens[1].end_offset], "Hallo");
    }

    #[test]
    fn test_sentinel_never_reaches_whole_token() {
        let analyzer = PipelineAnalyzer::baseline(Arc::new(WholeTokenizer::new()));

        let tokens: Vec<Token> = analyzer.analyze("\u{0000}fr\u{0000}ABC-12").unwrap().collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "abc-12");
        assert_eq!(tokens[0].start_offset, 4);
        assert_eq!(tokens[0].end_offset, 10);
    }

    #[test]
    fn test_debug_lists_stages() {
        let analyzer = PipelineAnalyzer::baseline(Arc::new(WholeTokenizer::new()));
        let debug = format!("{analyzer:?}");

        assert!(debug.contains("locale_directive"));
        assert!(debug.contains("ascii_folding"));
        assert!(debug.contains("whole"));
    }
}
