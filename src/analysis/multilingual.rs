//! Multilingual token streams.
//!
//! A raw property value optionally names its locale in a directive. The value
//! is analyzed once per target locale, the set of target locales being decided
//! by an [`AnalysisMode`], and every resulting term is tagged with the locale
//! it was produced under:
//!
//! ```text
//! "\0fr\0Ceci n'est pas Française"   mode EXACT_COUNTRY
//!     → fr, fr_BE, fr_CA, fr_CH, fr_FR, fr_LU
//!     → {fr}ceci {fr}n'est {fr}pas {fr}francaise {fr_BE}ceci ...
//! ```
//!
//! [`MultilingualAnalyzer`] is the long-lived entry point; it owns the
//! resolver and configuration and builds one [`MultilingualTokenStream`] per
//! value.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use glossa::analysis::multilingual::MultilingualAnalyzer;
//! use glossa::analysis::resolver::{InMemoryPropertyMetadata, PropertyAnalyzers};
//! use glossa::config::AnalysisConfig;
//!
//! let metadata = InMemoryPropertyMetadata::new()
//!     .with_property("cm:title", PropertyAnalyzers::new("standard"));
//! let analyzer =
//!     MultilingualAnalyzer::with_builtin(Arc::new(metadata), AnalysisConfig::default()).unwrap();
//!
//! let terms: Vec<String> = analyzer
//!     .token_stream("cm:title", "\u{0000}fr_FR\u{0000}Ceci n'est pas Française")
//!     .unwrap()
//!     .map(|token| token.to_string())
//!     .collect();
//!
//! assert_eq!(terms, vec!["{fr_FR}ceci", "{fr_FR}n'est", "{fr_FR}pas", "{fr_FR}francaise"]);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;
use std::vec;

use ahash::AHashMap;
use log::{debug, warn};

use crate::analysis::registry::AnalyzerRegistry;
use crate::analysis::resolver::{AnalyzerResolver, PropertyMetadata};
use crate::config::{AnalysisConfig, SearchParameters, UnresolvedLocalePolicy};
use crate::error::{GlossaError, Result};
use crate::locale::{AnalysisMode, KnownLocaleDirectory, LocaleTag, parse_directive, strip_directive};

/// A normalized term together with the locale it was produced under.
///
/// Displays in the indexed form, `{locale}term`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenValue {
    locale: LocaleTag,
    term: String,
}

impl TokenValue {
    /// Create a new token value.
    pub fn new<S: Into<String>>(locale: LocaleTag, term: S) -> Self {
        TokenValue {
            locale,
            term: term.into(),
        }
    }

    /// The locale the term was produced under.
    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    /// The normalized term, without its locale.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The term prefixed with its locale, as it is indexed.
    pub fn prefixed(&self) -> String {
        self.to_string()
    }

    /// Split into locale and term.
    pub fn into_parts(self) -> (LocaleTag, String) {
        (self.locale, self.term)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{}", self.locale, self.term)
    }
}

/// The locale-tagged terms of one raw value, analyzed under every target
/// locale.
///
/// All analysis happens in [`new`](Self::new); iteration only hands out the
/// results. Terms of one locale come out together and in analyzer order;
/// locales come out in tag order. Callers matching against the stream should
/// treat it as a multiset.
#[derive(Debug)]
pub struct MultilingualTokenStream {
    locales: BTreeSet<LocaleTag>,
    tokens: vec::IntoIter<TokenValue>,
    unresolved: Vec<GlossaError>,
}

impl MultilingualTokenStream {
    /// Analyze `raw` for `property`.
    ///
    /// A value without a directive is taken to be in `default_locale`. A value
    /// with a malformed directive is analyzed as if it had none, with the
    /// directive stripped.
    ///
    /// # Errors
    ///
    /// - [`GlossaError::PropertyNotFound`] if the property is unknown,
    ///   whatever `policy` says.
    /// - [`GlossaError::UnresolvedLocaleAnalyzer`] for the first target
    ///   locale without a usable analyzer, under
    ///   [`UnresolvedLocalePolicy::Abort`].
    /// - Any error raised by an analyzer.
    pub fn new(
        resolver: &AnalyzerResolver,
        directory: &KnownLocaleDirectory,
        property: &str,
        raw: &str,
        mode: AnalysisMode,
        default_locale: &LocaleTag,
        policy: UnresolvedLocalePolicy,
    ) -> Result<Self> {
        let (locale, text) = match parse_directive(raw) {
            Ok(directive) => (directive.locale, directive.text),
            Err(err) => {
                debug!("{err} in value of {property}; using default locale {default_locale}");
                (None, strip_directive(raw))
            }
        };

        let locales = mode.expand(locale.as_ref(), default_locale, directory);
        let mut tokens = Vec::new();
        let mut unresolved = Vec::new();

        for target in &locales {
            let analyzer = match resolver.resolve(property, target) {
                Ok(analyzer) => analyzer,
                Err(err @ GlossaError::PropertyNotFound(_)) => return Err(err),
                Err(err) => {
                    let err = GlossaError::unresolved_locale(target, err);
                    match policy {
                        UnresolvedLocalePolicy::Abort => return Err(err),
                        UnresolvedLocalePolicy::Skip => {
                            warn!("Skipping locale for {property}: {err}");
                            unresolved.push(err);
                            continue;
                        }
                    }
                }
            };

            tokens.extend(
                analyzer
                    .analyze(text)?
                    .map(|token| TokenValue::new(target.clone(), token.text)),
            );
        }

        Ok(MultilingualTokenStream {
            locales,
            tokens: tokens.into_iter(),
            unresolved,
        })
    }

    /// Check whether another token is available.
    pub fn has_next(&self) -> bool {
        !self.tokens.as_slice().is_empty()
    }

    /// The target locales the value was analyzed under, including skipped ones.
    pub fn locales(&self) -> &BTreeSet<LocaleTag> {
        &self.locales
    }

    /// Locales skipped under [`UnresolvedLocalePolicy::Skip`], with the reason.
    pub fn unresolved(&self) -> &[GlossaError] {
        &self.unresolved
    }

    /// Consume the remaining tokens into a multiset.
    pub fn into_counts(self) -> AHashMap<TokenValue, usize> {
        let mut counts = AHashMap::new();
        for token in self.tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        counts
    }
}

impl Iterator for MultilingualTokenStream {
    type Item = TokenValue;

    fn next(&mut self) -> Option<TokenValue> {
        self.tokens.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

impl ExactSizeIterator for MultilingualTokenStream {}

impl FusedIterator for MultilingualTokenStream {}

/// Builds multilingual token streams from shared, immutable configuration.
///
/// Cheap to clone and safe to share between threads.
#[derive(Clone, Debug)]
pub struct MultilingualAnalyzer {
    resolver: AnalyzerResolver,
    directory: Arc<KnownLocaleDirectory>,
    config: Arc<AnalysisConfig>,
}

impl MultilingualAnalyzer {
    /// Create an analyzer over `registry`, validating `config` against it.
    pub fn new(
        metadata: Arc<dyn PropertyMetadata>,
        registry: Arc<AnalyzerRegistry>,
        config: AnalysisConfig,
    ) -> Result<Self> {
        config.validate(&registry)?;

        let resolver =
            AnalyzerResolver::new(metadata, registry).with_fallback(config.fallback_analyzer.clone());

        Ok(MultilingualAnalyzer {
            resolver,
            directory: config.directory(),
            config: Arc::new(config),
        })
    }

    /// Create an analyzer over the built-in analyzers.
    pub fn with_builtin(metadata: Arc<dyn PropertyMetadata>, config: AnalysisConfig) -> Result<Self> {
        Self::new(metadata, Arc::new(AnalyzerRegistry::with_builtin()?), config)
    }

    /// Analyze `raw` for `property` with the configured defaults.
    pub fn token_stream(&self, property: &str, raw: &str) -> Result<MultilingualTokenStream> {
        self.token_stream_with(property, raw, &SearchParameters::default())
    }

    /// Analyze `raw` for `property`, letting `params` override the configured
    /// mode and default locale.
    pub fn token_stream_with(
        &self,
        property: &str,
        raw: &str,
        params: &SearchParameters,
    ) -> Result<MultilingualTokenStream> {
        MultilingualTokenStream::new(
            &self.resolver,
            &self.directory,
            property,
            raw,
            params.effective_mode(&self.config),
            params.effective_locale(&self.config),
            self.config.on_unresolved_locale,
        )
    }

    /// The configuration this analyzer was built with.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The resolver used for each target locale.
    pub fn resolver(&self) -> &AnalyzerResolver {
        &self.resolver
    }

    /// The known-locale directory in use.
    pub fn directory(&self) -> &Arc<KnownLocaleDirectory> {
        &self.directory
    }
}
