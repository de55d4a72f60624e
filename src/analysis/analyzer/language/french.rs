use std::fmt::{Debug, Formatter};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::language::stop_word_pipeline;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::stop::StopFilter;
use crate::error::Result;

pub struct FrenchAnalyzer {
    inner: PipelineAnalyzer,
}

impl FrenchAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: stop_word_pipeline("french", StopFilter::french())?,
        })
    }
}

impl Default for FrenchAnalyzer {
    fn default() -> Self {
        Self::new().expect("French analyzer should be creatable with default settings")
    }
}

impl Analyzer for FrenchAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "french"
    }
}

impl Debug for FrenchAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrenchAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
