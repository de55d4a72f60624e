//! # Glossa
//!
//! Locale-aware multilingual tokenization.
//!
//! A property value may carry a locale directive (`\u{0000}fr_FR\u{0000}text`).
//! Glossa decides which locales the value is analyzed under, picks the
//! analyzer the property uses in each of them, and merges the results into a
//! single stream of locale-tagged terms (`{fr_FR}ceci`).
//!
//! ## Modules
//!
//! - [`locale`] - Locale tags, directives and locale expansion modes
//! - [`analysis`] - Analyzers, analyzer resolution and multilingual streams
//! - [`config`] - Deployment defaults and per-request overrides
//! - [`error`] - The crate error type
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use glossa::analysis::MultilingualAnalyzer;
//! use glossa::analysis::resolver::{InMemoryPropertyMetadata, PropertyAnalyzers};
//! use glossa::config::AnalysisConfig;
//! use glossa::locale::AnalysisMode;
//!
//! let metadata = InMemoryPropertyMetadata::new()
//!     .with_property("cm:title", PropertyAnalyzers::new("standard"));
//! let config = AnalysisConfig {
//!     default_mode: AnalysisMode::ExactCountry,
//!     ..AnalysisConfig::default()
//! };
//! let analyzer = MultilingualAnalyzer::with_builtin(Arc::new(metadata), config).unwrap();
//!
//! let stream = analyzer
//!     .token_stream("cm:title", "\u{0000}fr\u{0000}Ceci n'est pas Française")
//!     .unwrap();
//! // fr plus its five registered countries, four terms each.
//! assert_eq!(stream.len(), 24);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod locale;

pub mod prelude {
    pub use crate::analysis::{
        Analyzer, AnalyzerIdentity, AnalyzerRegistry, AnalyzerResolver, MultilingualAnalyzer,
        MultilingualTokenStream, PropertyMetadata, TokenValue,
    };
    pub use crate::config::{AnalysisConfig, SearchParameters, UnresolvedLocalePolicy};
    pub use crate::error::{GlossaError, Result};
    pub use crate::locale::{AnalysisMode, KnownLocaleDirectory, LocaleTag};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
