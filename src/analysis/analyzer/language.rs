//! Language-specific analyzers.
//!
//! Each one is the standard pipeline followed by the language's stop word
//! list. They are strategies a property can opt into per locale; none of them
//! stems.
//!
//! # Available Languages
//!
//! - [`english`] - English stop words
//! - [`french`] - French stop words
//! - [`german`] - German stop words
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::analyzer::Analyzer;
//! use glossa::analysis::analyzer::language::french::FrenchAnalyzer;
//!
//! let analyzer = FrenchAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Le chat et la souris").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! ```

pub mod english;
pub mod french;
pub mod german;

use std::sync::Arc;

use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// The standard pipeline with `stop` appended.
fn stop_word_pipeline(name: &str, stop: StopFilter) -> Result<PipelineAnalyzer> {
    let tokenizer = Arc::new(RegexTokenizer::new()?);
    Ok(PipelineAnalyzer::baseline(tokenizer)
        .add_filter(Arc::new(stop))
        .with_name(name))
}
