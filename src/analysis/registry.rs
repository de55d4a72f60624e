//! Analyzer registry: identity → shared analyzer instance.
//!
//! Property metadata names analyzers by identity string. The registry turns
//! that identity into a live analyzer without any reflection: every strategy a
//! deployment can use is registered up front.
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::registry::AnalyzerRegistry;
//!
//! let registry = AnalyzerRegistry::with_builtin().unwrap();
//! let analyzer = registry.get("french").unwrap();
//! assert_eq!(analyzer.name(), "french");
//! assert!(registry.get("snowball").is_err());
//! ```

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::keyword::KeywordAnalyzer;
use crate::analysis::analyzer::language::english::EnglishAnalyzer;
use crate::analysis::analyzer::language::french::FrenchAnalyzer;
use crate::analysis::analyzer::language::german::GermanAnalyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::analysis::analyzer::unicode::UnicodeAnalyzer;
use crate::error::{GlossaError, Result};

/// Identities of the analyzers registered by [`AnalyzerRegistry::with_builtin`].
pub const BUILTIN_ANALYZERS: &[&str] =
    &["standard", "unicode", "keyword", "english", "french", "german"];

/// A map from analyzer identity to a shared analyzer.
///
/// When several identities should analyze the same way, register clones of a
/// single `Arc` rather than building the analyzer twice.
#[derive(Clone, Default)]
pub struct AnalyzerRegistry {
    analyzers: AHashMap<String, Arc<dyn Analyzer>>,
}

impl AnalyzerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        AnalyzerRegistry {
            analyzers: AHashMap::new(),
        }
    }

    /// Create a registry holding every built-in analyzer.
    pub fn with_builtin() -> Result<Self> {
        let mut registry = Self::new();
        registry.register("standard", Arc::new(StandardAnalyzer::new()?));
        registry.register("unicode", Arc::new(UnicodeAnalyzer::new()));
        registry.register("keyword", Arc::new(KeywordAnalyzer::new()));
        registry.register("english", Arc::new(EnglishAnalyzer::new()?));
        registry.register("french", Arc::new(FrenchAnalyzer::new()?));
        registry.register("german", Arc::new(GermanAnalyzer::new()?));
        Ok(registry)
    }

    /// Register an analyzer, replacing any previous one with the same identity.
    pub fn register(&mut self, identity: impl Into<String>, analyzer: Arc<dyn Analyzer>) {
        self.analyzers.insert(identity.into(), analyzer);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_analyzer(mut self, identity: impl Into<String>, analyzer: Arc<dyn Analyzer>) -> Self {
        self.register(identity, analyzer);
        self
    }

    /// Look up an analyzer by identity.
    pub fn get(&self, identity: &str) -> Result<Arc<dyn Analyzer>> {
        self.analyzers
            .get(identity)
            .cloned()
            .ok_or_else(|| GlossaError::unknown_analyzer(identity))
    }

    /// Check whether an identity is registered.
    pub fn contains(&self, identity: &str) -> bool {
        self.analyzers.contains_key(identity)
    }

    /// Registered identities, in no particular order.
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.analyzers.keys().map(String::as_str)
    }

    /// Number of registered analyzers.
    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }
}

impl fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut identities: Vec<_> = self.identities().collect();
        identities.sort_unstable();
        f.debug_struct("AnalyzerRegistry")
            .field("analyzers", &identities)
            .finish()
    }
}
