//! Analyzer resolution: (property, locale) → analyzer.
//!
//! Which analyzer a property uses in a locale is decided by a
//! [`PropertyMetadata`] collaborator, which answers with an
//! [`AnalyzerIdentity`]. The [`AnalyzerResolver`] turns that identity into a
//! live analyzer through an [`AnalyzerRegistry`], optionally falling back to a
//! configured identity when the property has nothing for the locale.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use glossa::analysis::registry::AnalyzerRegistry;
//! use glossa::analysis::resolver::{AnalyzerResolver, InMemoryPropertyMetadata, PropertyAnalyzers};
//!
//! let metadata = InMemoryPropertyMetadata::new().with_property(
//!     "cm:title",
//!     PropertyAnalyzers::new("standard").with_locale("de".parse().unwrap(), "german"),
//! );
//! let resolver = AnalyzerResolver::new(
//!     Arc::new(metadata),
//!     Arc::new(AnalyzerRegistry::with_builtin().unwrap()),
//! );
//!
//! let analyzer = resolver.resolve("cm:title", &"de_AT".parse().unwrap()).unwrap();
//! assert_eq!(analyzer.name(), "german");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::registry::AnalyzerRegistry;
use crate::error::{GlossaError, Result};
use crate::locale::LocaleTag;

/// The opaque name of a text-analysis strategy.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalyzerIdentity(String);

impl AnalyzerIdentity {
    /// Create a new identity.
    pub fn new<S: Into<String>>(identity: S) -> Self {
        AnalyzerIdentity(identity.into())
    }

    /// The identity as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalyzerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnalyzerIdentity {
    fn from(identity: &str) -> Self {
        AnalyzerIdentity::new(identity)
    }
}

impl From<String> for AnalyzerIdentity {
    fn from(identity: String) -> Self {
        AnalyzerIdentity(identity)
    }
}

/// The property and dictionary metadata service, seen from analysis.
///
/// Implementations fail with [`GlossaError::PropertyNotFound`] for a property
/// they do not know, and with [`GlossaError::NoAnalyzerForLocale`] when the
/// property has no analyzer for the locale.
pub trait PropertyMetadata: Send + Sync {
    /// The analyzer identity configured for `property` in `locale`.
    fn analyzer_identity(&self, property: &str, locale: &LocaleTag) -> Result<AnalyzerIdentity>;
}

/// Analyzer configuration of one property.
///
/// `locales` holds overrides keyed by locale; a bare language tag there
/// applies to every country of that language.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAnalyzers {
    /// Analyzer used when no override matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<AnalyzerIdentity>,

    /// Per-language and per-locale overrides.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub locales: BTreeMap<LocaleTag, AnalyzerIdentity>,
}

impl PropertyAnalyzers {
    /// Create a configuration with a property-wide default analyzer.
    pub fn new(default: impl Into<AnalyzerIdentity>) -> Self {
        PropertyAnalyzers {
            default: Some(default.into()),
            locales: BTreeMap::new(),
        }
    }

    /// Create a configuration with overrides only.
    pub fn without_default() -> Self {
        Self::default()
    }

    /// Add an override for a locale or, with a bare language tag, a language.
    pub fn with_locale(mut self, locale: LocaleTag, identity: impl Into<AnalyzerIdentity>) -> Self {
        self.locales.insert(locale, identity.into());
        self
    }

    /// Look up the analyzer for `locale`: exact locale, then its bare
    /// language, then the property default.
    pub fn lookup(&self, locale: &LocaleTag) -> Option<&AnalyzerIdentity> {
        self.locales
            .get(locale)
            .or_else(|| {
                locale
                    .has_country()
                    .then(|| self.locales.get(&locale.language_only()))
                    .flatten()
            })
            .or(self.default.as_ref())
    }
}

/// A [`PropertyMetadata`] backed by an in-memory table.
///
/// ```
/// use glossa::analysis::resolver::{InMemoryPropertyMetadata, PropertyMetadata};
///
/// let metadata = InMemoryPropertyMetadata::from_json_str(r#"{
///     "cm:title": { "default": "standard", "locales": { "fr": "french" } },
///     "cm:code": { "default": "keyword" }
/// }"#).unwrap();
///
/// let identity = metadata.analyzer_identity("cm:title", &"fr_CA".parse().unwrap()).unwrap();
/// assert_eq!(identity.as_str(), "french");
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryPropertyMetadata {
    properties: AHashMap<String, PropertyAnalyzers>,
}

impl InMemoryPropertyMetadata {
    /// Create an empty table.
    pub fn new() -> Self {
        InMemoryPropertyMetadata {
            properties: AHashMap::new(),
        }
    }

    /// Load a table from JSON: an object from property id to
    /// [`PropertyAnalyzers`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, PropertyAnalyzers> = serde_json::from_str(json)?;
        Ok(InMemoryPropertyMetadata {
            properties: raw.into_iter().collect(),
        })
    }

    /// Register or replace a property.
    pub fn insert(&mut self, property: impl Into<String>, analyzers: PropertyAnalyzers) {
        self.properties.insert(property.into(), analyzers);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_property(mut self, property: impl Into<String>, analyzers: PropertyAnalyzers) -> Self {
        self.insert(property, analyzers);
        self
    }

    /// Get a property's configuration.
    pub fn get(&self, property: &str) -> Option<&PropertyAnalyzers> {
        self.properties.get(property)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertyMetadata for InMemoryPropertyMetadata {
    fn analyzer_identity(&self, property: &str, locale: &LocaleTag) -> Result<AnalyzerIdentity> {
        let analyzers = self
            .properties
            .get(property)
            .ok_or_else(|| GlossaError::property_not_found(property))?;

        analyzers
            .lookup(locale)
            .cloned()
            .ok_or_else(|| GlossaError::no_analyzer(property, locale))
    }
}

/// Resolves the analyzer for a property in a locale.
#[derive(Clone)]
pub struct AnalyzerResolver {
    metadata: Arc<dyn PropertyMetadata>,
    registry: Arc<AnalyzerRegistry>,
    fallback: Option<AnalyzerIdentity>,
}

impl AnalyzerResolver {
    /// Create a resolver with no fallback analyzer.
    pub fn new(metadata: Arc<dyn PropertyMetadata>, registry: Arc<AnalyzerRegistry>) -> Self {
        AnalyzerResolver {
            metadata,
            registry,
            fallback: None,
        }
    }

    /// Use `fallback` when a property has no analyzer for a locale.
    pub fn with_fallback(mut self, fallback: Option<AnalyzerIdentity>) -> Self {
        self.fallback = fallback;
        self
    }

    /// The configured fallback analyzer.
    pub fn fallback(&self) -> Option<&AnalyzerIdentity> {
        self.fallback.as_ref()
    }

    /// The registry analyzers are looked up in.
    pub fn registry(&self) -> &Arc<AnalyzerRegistry> {
        &self.registry
    }

    /// The analyzer identity for `property` in `locale`, fallback applied.
    pub fn identity(&self, property: &str, locale: &LocaleTag) -> Result<AnalyzerIdentity> {
        match self.metadata.analyzer_identity(property, locale) {
            Err(err @ GlossaError::NoAnalyzerForLocale { .. }) => match &self.fallback {
                Some(fallback) => {
                    debug!("{err}; falling back to analyzer {fallback}");
                    Ok(fallback.clone())
                }
                None => Err(err),
            },
            other => other,
        }
    }

    /// Resolve the analyzer for `property` in `locale`.
    ///
    /// Fails with `PropertyNotFound`, `NoAnalyzerForLocale` (when no fallback
    /// is configured) or `UnknownAnalyzer`.
    pub fn resolve(&self, property: &str, locale: &LocaleTag) -> Result<Arc<dyn Analyzer>> {
        let identity = self.identity(property, locale)?;
        self.registry.get(identity.as_str())
    }
}

impl fmt::Debug for AnalyzerResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerResolver")
            .field("registry", &self.registry)
            .field("fallback", &self.fallback)
            .finish()
    }
}
