//! Locale tags and locale expansion.
//!
//! A [`LocaleTag`] is a language code with an optional country code, written
//! `fr` or `fr_FR`. Raw property values may carry one in an embedded directive
//! (see [`directive`]); an [`AnalysisMode`] then decides which locales the
//! value is analyzed under, using the [`KnownLocaleDirectory`] to enumerate the
//! registered country variants of a language.
//!
//! # Examples
//!
//! ```
//! use glossa::locale::LocaleTag;
//!
//! let tag: LocaleTag = "fr-fr".parse().unwrap();
//! assert_eq!(tag.to_string(), "fr_FR");
//! assert_eq!(tag.language_only().to_string(), "fr");
//! ```

pub mod directive;
pub mod directory;
pub mod mode;

pub use directive::{Directive, encode_directive, parse_directive, strip_directive};
pub use directory::KnownLocaleDirectory;
pub use mode::{AnalysisMode, ExpansionRule};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GlossaError, Result};

/// A language code with an optional country code.
///
/// The language is stored lowercase (2–3 ASCII letters) and the country
/// uppercase (2 ASCII letters or a 3-digit region code). Ordering is by
/// language first, then country, with the bare language sorting before its
/// variants.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocaleTag {
    language: String,
    country: Option<String>,
}

impl LocaleTag {
    /// Create a language-only tag.
    pub fn language(language: &str) -> Result<Self> {
        Ok(LocaleTag {
            language: normalize_language(language)?,
            country: None,
        })
    }

    /// Create a tag with both language and country.
    pub fn with_country(language: &str, country: &str) -> Result<Self> {
        Ok(LocaleTag {
            language: normalize_language(language)?,
            country: Some(normalize_country(country)?),
        })
    }

    /// The language code.
    pub fn lang(&self) -> &str {
        &self.language
    }

    /// The country code, if any.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Check whether a country is present.
    pub fn has_country(&self) -> bool {
        self.country.is_some()
    }

    /// This tag with the country dropped.
    pub fn language_only(&self) -> LocaleTag {
        LocaleTag {
            language: self.language.clone(),
            country: None,
        }
    }

    /// This tag's language combined with another country.
    ///
    /// The country must already be normalized; it comes from a
    /// [`KnownLocaleDirectory`] which validates on insertion.
    pub(crate) fn variant(&self, country: &str) -> LocaleTag {
        LocaleTag {
            language: self.language.clone(),
            country: Some(country.to_string()),
        }
    }
}

pub(crate) fn normalize_language(language: &str) -> Result<String> {
    let len = language.len();
    if (2..=3).contains(&len) && language.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(language.to_ascii_lowercase())
    } else {
        Err(GlossaError::malformed_locale(language))
    }
}

pub(crate) fn normalize_country(country: &str) -> Result<String> {
    let bytes = country.as_bytes();
    let alpha = bytes.len() == 2 && bytes.iter().all(u8::is_ascii_alphabetic);
    let numeric = bytes.len() == 3 && bytes.iter().all(u8::is_ascii_digit);
    if alpha || numeric {
        Ok(country.to_ascii_uppercase())
    } else {
        Err(GlossaError::malformed_locale(country))
    }
}

impl FromStr for LocaleTag {
    type Err = GlossaError;

    /// Parse `language`, `language_COUNTRY` or `language-COUNTRY`.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(['_', '-']);
        let language = parts.next().unwrap_or_default();
        let parsed = match (parts.next(), parts.next()) {
            (None, _) => LocaleTag::language(language),
            (Some(country), None) => LocaleTag::with_country(language, country),
            (Some(_), Some(_)) => Err(GlossaError::malformed_locale(s)),
        };
        // Report the whole input rather than the offending component.
        parsed.map_err(|_| GlossaError::malformed_locale(s))
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{}", self.language, country),
            None => write!(f, "{}", self.language),
        }
    }
}

impl Serialize for LocaleTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocaleTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_and_country() {
        let tag: LocaleTag = "fr_FR".parse().unwrap();
        assert_eq!(tag.lang(), "fr");
        assert_eq!(tag.country(), Some("FR"));
        assert!(tag.has_country());
        assert_eq!(tag.to_string(), "fr_FR");
    }

    #[test]
    fn test_parse_normalizes_case_and_separator() {
        let tag: LocaleTag = "PT-br".parse().unwrap();
        assert_eq!(tag.to_string(), "pt_BR");

        let tag: LocaleTag = "es_419".parse().unwrap();
        assert_eq!(tag.country(), Some("419"));
    }

    #[test]
    fn test_parse_language_only() {
        let tag: LocaleTag = "fr".parse().unwrap();
        assert_eq!(tag.lang(), "fr");
        assert_eq!(tag.country(), None);
        assert_eq!(tag, tag.language_only());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "f", "fren", "fr_", "fr_FRA", "fr_FR_EURO", "1a", "fr_F1"] {
            let result = bad.parse::<LocaleTag>();
            assert!(
                matches!(result, Err(GlossaError::MalformedLocaleTag(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_ordering_puts_language_before_variants() {
        let mut tags: Vec<LocaleTag> = ["fr_FR", "de", "fr", "fr_BE"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        tags.sort();

        let rendered: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, vec!["de", "fr", "fr_BE", "fr_FR"]);
    }

    #[test]
    fn test_serde_as_string() {
        let tag = LocaleTag::with_country("en", "gb").unwrap();
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"en_GB\"");

        let back: LocaleTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);

        assert!(serde_json::from_str::<LocaleTag>("\"english\"").is_err());
    }
}
