//! The known-locale directory.
//!
//! Maps each language to the country codes registered as valid variants of
//! it. Locale expansion modes that broaden a tag across countries read from
//! here. A directory is built once, wrapped in an `Arc`, and never mutated
//! afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::locale::{LocaleTag, normalize_country, normalize_language};

/// Built-in language → country table, modeled on the locales a typical JVM
/// reports as available.
const BUILTIN_LOCALES: &[(&str, &[&str])] = &[
    ("ar", &["AE", "BH", "DZ", "EG", "IQ", "JO", "KW", "LB", "LY", "MA", "OM", "QA", "SA", "SD", "SY", "TN", "YE"]),
    ("be", &["BY"]),
    ("bg", &["BG"]),
    ("ca", &["ES"]),
    ("cs", &["CZ"]),
    ("da", &["DK"]),
    ("de", &["AT", "CH", "DE", "LU"]),
    ("el", &["GR"]),
    ("en", &["AU", "CA", "GB", "IE", "IN", "NZ", "US", "ZA"]),
    ("es", &["AR", "BO", "CL", "CO", "CR", "DO", "EC", "ES", "GT", "HN", "MX", "NI", "PA", "PE", "PR", "PY", "SV", "UY", "VE"]),
    ("et", &["EE"]),
    ("fi", &["FI"]),
    ("fr", &["BE", "CA", "CH", "FR", "LU"]),
    ("hr", &["HR"]),
    ("hu", &["HU"]),
    ("is", &["IS"]),
    ("it", &["CH", "IT"]),
    ("iw", &["IL"]),
    ("ja", &["JP"]),
    ("ko", &["KR"]),
    ("lt", &["LT"]),
    ("lv", &["LV"]),
    ("mk", &["MK"]),
    ("nl", &["BE", "NL"]),
    ("no", &["NO"]),
    ("pl", &["PL"]),
    ("pt", &["BR", "PT"]),
    ("ro", &["RO"]),
    ("ru", &["RU"]),
    ("sk", &["SK"]),
    ("sl", &["SI"]),
    ("sq", &["AL"]),
    ("sr", &["BA", "CS"]),
    ("sv", &["SE"]),
    ("th", &["TH"]),
    ("tr", &["TR"]),
    ("uk", &["UA"]),
    ("zh", &["CN", "HK", "TW"]),
];

static BUILTIN_DIRECTORY: LazyLock<KnownLocaleDirectory> = LazyLock::new(|| {
    let mut directory = KnownLocaleDirectory::new();
    for (language, countries) in BUILTIN_LOCALES {
        directory
            .languages
            .insert(language.to_string(), countries.iter().map(|c| c.to_string()).collect());
    }
    directory
});

/// A read-only table of registered locale variants per language.
///
/// Serializes as a JSON object from language code to a list of country codes:
///
/// ```
/// use glossa::locale::KnownLocaleDirectory;
///
/// let directory = KnownLocaleDirectory::from_json_str(r#"{ "fr": ["FR", "BE"] }"#).unwrap();
/// let countries: Vec<_> = directory.countries("fr").collect();
/// assert_eq!(countries, vec!["BE", "FR"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KnownLocaleDirectory {
    languages: BTreeMap<String, BTreeSet<String>>,
}

impl KnownLocaleDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        KnownLocaleDirectory {
            languages: BTreeMap::new(),
        }
    }

    /// The built-in directory.
    pub fn builtin() -> Self {
        BUILTIN_DIRECTORY.clone()
    }

    /// Build a directory from `(language, countries)` pairs, validating codes.
    ///
    /// A language listed with no countries is registered with zero variants.
    pub fn from_entries<I, L, C, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, C)>,
        L: AsRef<str>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut languages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (language, countries) in entries {
            let entry = languages
                .entry(normalize_language(language.as_ref())?)
                .or_default();
            for country in countries {
                entry.insert(normalize_country(country.as_ref())?);
            }
        }
        Ok(KnownLocaleDirectory { languages })
    }

    /// Load a directory from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    /// Registered countries for a language, in code order.
    ///
    /// Unknown languages have no countries.
    pub fn countries<'a>(&'a self, language: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.languages
            .get(language)
            .into_iter()
            .flat_map(|countries| countries.iter().map(String::as_str))
    }

    /// Registered languages, in code order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Every registered variant of `locale`'s language.
    pub fn variants_of(&self, locale: &LocaleTag) -> Vec<LocaleTag> {
        self.countries(locale.lang())
            .map(|country| locale.variant(country))
            .collect()
    }

    /// Every registered `(language, country)` locale, bare languages excluded.
    pub fn all_variants(&self) -> impl Iterator<Item = LocaleTag> + '_ {
        self.languages.iter().flat_map(|(language, countries)| {
            countries.iter().map(move |country| LocaleTag {
                language: language.clone(),
                country: Some(country.clone()),
            })
        })
    }

    /// Check whether a language is registered.
    pub fn contains_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl<'de> Deserialize<'de> for KnownLocaleDirectory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Vec<String>>::deserialize(deserializer)?;
        Self::from_entries(raw).map_err(serde::de::Error::custom)
    }
}
