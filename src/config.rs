//! Configuration for multilingual analysis.
//!
//! [`AnalysisConfig`] holds the deployment-wide defaults: which analysis mode
//! and locale apply when a request does not say, what to do with a target
//! locale that has no analyzer, and which locales are registered. It is built
//! once, explicitly, and handed to a
//! [`MultilingualAnalyzer`](crate::analysis::multilingual::MultilingualAnalyzer).
//! [`SearchParameters`] carry the per-request overrides.
//!
//! # Examples
//!
//! ```
//! use glossa::config::{AnalysisConfig, SearchParameters, UnresolvedLocalePolicy};
//! use glossa::locale::AnalysisMode;
//!
//! let config = AnalysisConfig::from_json_str(r#"{
//!     "default_mode": "EXACT_COUNTRY",
//!     "default_locale": "fr",
//!     "on_unresolved_locale": "SKIP"
//! }"#).unwrap();
//! assert_eq!(config.default_mode, AnalysisMode::ExactCountry);
//! assert_eq!(config.on_unresolved_locale, UnresolvedLocalePolicy::Skip);
//!
//! let params = SearchParameters::new().with_analysis_mode(AnalysisMode::Exact);
//! assert_eq!(params.effective_mode(&config), AnalysisMode::Exact);
//! assert_eq!(params.effective_locale(&config).to_string(), "fr");
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::registry::AnalyzerRegistry;
use crate::analysis::resolver::AnalyzerIdentity;
use crate::error::{GlossaError, Result};
use crate::locale::{AnalysisMode, KnownLocaleDirectory, LocaleTag};

/// What a multilingual stream does with a target locale whose analyzer cannot
/// be resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnresolvedLocalePolicy {
    /// Fail the whole stream.
    #[default]
    Abort,
    /// Log a warning, emit nothing for that locale, and keep going.
    Skip,
}

/// Deployment-wide analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Mode used when a request does not choose one.
    pub default_mode: AnalysisMode,
    /// Locale assumed for values without a locale directive.
    pub default_locale: LocaleTag,
    /// Analyzer used when a property has none for a target locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_analyzer: Option<AnalyzerIdentity>,
    /// Handling of target locales whose analyzer cannot be resolved.
    pub on_unresolved_locale: UnresolvedLocalePolicy,
    /// Registered locales; the built-in table when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locales: Option<KnownLocaleDirectory>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_mode: AnalysisMode::Exact,
            default_locale: LocaleTag::language("en").expect("built-in default locale is valid"),
            fallback_analyzer: None,
            on_unresolved_locale: UnresolvedLocalePolicy::Abort,
            locales: None,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize this configuration to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the configuration against the analyzers actually available.
    pub fn validate(&self, registry: &AnalyzerRegistry) -> Result<()> {
        if let Some(fallback) = &self.fallback_analyzer
            && !registry.contains(fallback.as_str())
        {
            return Err(GlossaError::config(format!(
                "Fallback analyzer {fallback} is not registered"
            )));
        }
        Ok(())
    }

    /// The known-locale directory this configuration selects.
    pub fn directory(&self) -> Arc<KnownLocaleDirectory> {
        Arc::new(
            self.locales
                .clone()
                .unwrap_or_else(KnownLocaleDirectory::builtin),
        )
    }
}

/// Per-request overrides of the configured defaults.
///
/// A present override wins; an absent one defers to the [`AnalysisConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParameters {
    /// Analysis mode for this request.
    pub analysis_mode: Option<AnalysisMode>,
    /// Default locale for this request.
    pub locale: Option<LocaleTag>,
}

impl SearchParameters {
    /// Parameters that override nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the analysis mode.
    pub fn with_analysis_mode(mut self, mode: AnalysisMode) -> Self {
        self.analysis_mode = Some(mode);
        self
    }

    /// Override the default locale.
    pub fn with_locale(mut self, locale: LocaleTag) -> Self {
        self.locale = Some(locale);
        self
    }

    /// The mode in effect under `config`.
    pub fn effective_mode(&self, config: &AnalysisConfig) -> AnalysisMode {
        self.analysis_mode.unwrap_or(config.default_mode)
    }

    /// The default locale in effect under `config`.
    pub fn effective_locale<'a>(&'a self, config: &'a AnalysisConfig) -> &'a LocaleTag {
        self.locale.as_ref().unwrap_or(&config.default_locale)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.default_mode, AnalysisMode::Exact);
        assert_eq!(config.default_locale.to_string(), "en");
        assert_eq!(config.on_unresolved_locale, UnresolvedLocalePolicy::Abort);
        assert!(config.fallback_analyzer.is_none());
        assert_eq!(*config.directory(), KnownLocaleDirectory::builtin());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AnalysisConfig::from_json_str(r#"{ "fallback_analyzer": "standard" }"#).unwrap();
        assert_eq!(config.default_mode, AnalysisMode::Exact);
        assert_eq!(
            config.fallback_analyzer.as_ref().map(AnalyzerIdentity::as_str),
            Some("standard")
        );
    }

    #[test]
    fn test_custom_locales() {
        let config = AnalysisConfig::from_json_str(r#"{ "locales": { "fr": ["FR", "CA"] } }"#).unwrap();
        let directory = config.directory();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.countries("fr").collect::<Vec<_>>(), vec!["CA", "FR"]);
    }

    #[test]
    fn test_invalid_json() {
        for json in [
            r#"{ "default_mode": "FUZZY" }"#,
            r#"{ "default_locale": "french" }"#,
            r#"{ "locales": { "fr": ["FRANCE"] } }"#,
        ] {
            assert!(
                matches!(AnalysisConfig::from_json_str(json), Err(GlossaError::Json(_))),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_fallback() {
        let registry = AnalyzerRegistry::with_builtin().unwrap();
        let mut config = AnalysisConfig {
            fallback_analyzer: Some("standard".into()),
            ..AnalysisConfig::default()
        };
        assert!(config.validate(&registry).is_ok());

        config.fallback_analyzer = Some("snowball".into());
        assert!(matches!(config.validate(&registry), Err(GlossaError::Config(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_mode": "ALL", "default_locale": "de_CH" }}"#).unwrap();

        let config = AnalysisConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.default_mode, AnalysisMode::All);
        assert_eq!(config.default_locale.to_string(), "de_CH");

        let missing = AnalysisConfig::from_json_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(GlossaError::Io(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = AnalysisConfig {
            default_mode: AnalysisMode::SameCountry,
            on_unresolved_locale: UnresolvedLocalePolicy::Skip,
            ..AnalysisConfig::default()
        };
        let json = config.to_json_string().unwrap();
        assert!(json.contains("\"SAME_COUNTRY\""));
        assert_eq!(AnalysisConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_search_parameters_override() {
        let config = AnalysisConfig::default();
        let none = SearchParameters::new();
        assert_eq!(none.effective_mode(&config), AnalysisMode::Exact);
        assert_eq!(none.effective_locale(&config).to_string(), "en");

        let params = SearchParameters::new()
            .with_analysis_mode(AnalysisMode::ExactCountry)
            .with_locale("fr".parse().unwrap());
        assert_eq!(params.effective_mode(&config), AnalysisMode::ExactCountry);
        assert_eq!(params.effective_locale(&config).to_string(), "fr");
    }
}
