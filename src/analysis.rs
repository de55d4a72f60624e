//! Text analysis for Glossa.
//!
//! Two layers live here. The base layer turns one payload into tokens with a
//! single strategy: char filters, a tokenizer and token filters assembled into
//! an [`analyzer::Analyzer`]. The multilingual layer picks that strategy per
//! property and per locale ([`resolver`], [`registry`]) and merges the results
//! of every target locale into one stream of locale-tagged terms
//! ([`multilingual`]).

pub mod analyzer;
pub mod char_filter;
pub mod multilingual;
pub mod registry;
pub mod resolver;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::Analyzer;
pub use multilingual::{MultilingualAnalyzer, MultilingualTokenStream, TokenValue};
pub use registry::AnalyzerRegistry;
pub use resolver::{AnalyzerIdentity, AnalyzerResolver, PropertyMetadata};
pub use token::{Token, TokenStream};
