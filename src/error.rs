//! Error types for the Glossa library.
//!
//! All failures are represented by [`GlossaError`]. The variants fall into two
//! groups: request-fatal errors (an unknown property, a broken configuration)
//! and per-locale errors that a caller may choose to skip. See
//! [`GlossaError::is_recoverable`].
//!
//! # Examples
//!
//! ```
//! use glossa::error::{GlossaError, Result};
//!
//! fn lookup(property: &str) -> Result<()> {
//!     Err(GlossaError::property_not_found(property))
//! }
//!
//! let err = lookup("cm:title").unwrap_err();
//! assert!(!err.is_recoverable());
//! assert_eq!(err.to_string(), "Property not found: cm:title");
//! ```

use std::io;

use thiserror::Error;

use crate::locale::LocaleTag;

/// The main error type for Glossa operations.
#[derive(Error, Debug)]
pub enum GlossaError {
    /// The locale directive embedded in a raw value could not be parsed.
    #[error("Malformed locale tag: {0:?}")]
    MalformedLocaleTag(String),

    /// The property-metadata collaborator does not know the property.
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    /// The property exists but has no analyzer configured for the locale.
    #[error("No analyzer for property {property} in locale {locale}")]
    NoAnalyzerForLocale { property: String, locale: LocaleTag },

    /// An analyzer identity was resolved but nothing is registered under it.
    #[error("Unknown analyzer: {0}")]
    UnknownAnalyzer(String),

    /// A target locale could not contribute tokens to a multilingual stream.
    #[error("Unresolved analyzer for locale {locale}: {source}")]
    UnresolvedLocaleAnalyzer {
        locale: LocaleTag,
        #[source]
        source: Box<GlossaError>,
    },

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with GlossaError.
pub type Result<T> = std::result::Result<T, GlossaError>;

impl GlossaError {
    /// Create a new malformed locale tag error.
    pub fn malformed_locale<S: Into<String>>(segment: S) -> Self {
        GlossaError::MalformedLocaleTag(segment.into())
    }

    /// Create a new property not found error.
    pub fn property_not_found<S: Into<String>>(property: S) -> Self {
        GlossaError::PropertyNotFound(property.into())
    }

    /// Create a new missing analyzer error.
    pub fn no_analyzer<S: Into<String>>(property: S, locale: &LocaleTag) -> Self {
        GlossaError::NoAnalyzerForLocale {
            property: property.into(),
            locale: locale.clone(),
        }
    }

    /// Create a new unknown analyzer error.
    pub fn unknown_analyzer<S: Into<String>>(identity: S) -> Self {
        GlossaError::UnknownAnalyzer(identity.into())
    }

    /// Wrap a per-locale failure with the locale it happened in.
    pub fn unresolved_locale(locale: &LocaleTag, source: GlossaError) -> Self {
        GlossaError::UnresolvedLocaleAnalyzer {
            locale: locale.clone(),
            source: Box::new(source),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GlossaError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GlossaError::Config(msg.into())
    }

    /// Whether the error only affects part of an analysis request.
    ///
    /// Malformed directives degrade to the default locale, and per-locale
    /// resolution failures may be skipped. Everything else fails the request.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GlossaError::MalformedLocaleTag(_)
                | GlossaError::NoAnalyzerForLocale { .. }
                | GlossaError::UnknownAnalyzer(_)
                | GlossaError::UnresolvedLocaleAnalyzer { .. }
        )
    }
}
