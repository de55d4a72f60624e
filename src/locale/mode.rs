//! Multilingual analysis modes.
//!
//! An [`AnalysisMode`] decides which locales a value is analyzed under. Each
//! mode maps to an [`ExpansionRule`], a fixed set of flags, and
//! [`AnalysisMode::expand`] applies the rule to the input locale and the
//! [`KnownLocaleDirectory`]. Adding a mode means adding a variant and a row to
//! the rule table.
//!
//! | Mode                      | `fr_FR`                      | `fr`                         |
//! |---------------------------|------------------------------|------------------------------|
//! | `EXACT`                   | fr_FR                        | fr                           |
//! | `EXACT_LANGUAGE`          | fr                           | fr                           |
//! | `EXACT_COUNTRY`           | fr_FR                        | fr, fr_BE, fr_CA, ...        |
//! | `LOCALE_AND_CONTAINING`   | fr_FR, fr                    | fr                           |
//! | `LANGUAGE_VARIANTS`       | fr, fr_BE, fr_CA, ...        | fr, fr_BE, fr_CA, ...        |
//! | `SAME_COUNTRY`            | fr_FR, (every xx_FR)         | fr                           |
//! | `ALL`                     | fr_FR + every known locale   | fr + every known locale      |
//!
//! # Examples
//!
//! ```
//! use glossa::locale::{AnalysisMode, KnownLocaleDirectory, LocaleTag};
//!
//! let directory = KnownLocaleDirectory::builtin();
//! let default: LocaleTag = "en".parse().unwrap();
//! let fr: LocaleTag = "fr".parse().unwrap();
//!
//! let locales = AnalysisMode::ExactCountry.expand(Some(&fr), &default, &directory);
//! assert_eq!(locales.len(), 6);
//!
//! let locales = AnalysisMode::Exact.expand(None, &default, &directory);
//! assert_eq!(locales.into_iter().collect::<Vec<_>>(), vec![default]);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{GlossaError, Result};
use crate::locale::{KnownLocaleDirectory, LocaleTag};

/// The locale expansion flags of one analysis mode.
///
/// Every flag contributes a subset of locales; the expansion is their union.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpansionRule {
    /// The input locale itself.
    pub exact: bool,
    /// The input's bare language.
    pub language: bool,
    /// Every less specific locale containing the input (`fr_FR` → `fr`).
    pub containing: bool,
    /// Every registered variant of a language-only input.
    pub contained: bool,
    /// Every registered variant of the input's language, country or not.
    pub language_variants: bool,
    /// Every registered locale sharing the input's country.
    pub same_country: bool,
    /// Every registered locale, bare languages included.
    pub all: bool,
}

impl ExpansionRule {
    const NONE: ExpansionRule = ExpansionRule {
        exact: false,
        language: false,
        containing: false,
        contained: false,
        language_variants: false,
        same_country: false,
        all: false,
    };

    /// Apply the rule to a resolved input locale.
    pub fn apply(&self, input: &LocaleTag, directory: &KnownLocaleDirectory) -> BTreeSet<LocaleTag> {
        let mut locales = BTreeSet::new();

        if self.exact {
            locales.insert(input.clone());
        }
        if self.language || (self.containing && input.has_country()) {
            locales.insert(input.language_only());
        }
        if self.contained && !input.has_country() {
            locales.extend(directory.variants_of(input));
        }
        if self.language_variants {
            locales.extend(directory.variants_of(input));
        }
        if let (true, Some(country)) = (self.same_country, input.country()) {
            locales.extend(
                directory
                    .all_variants()
                    .filter(|locale| locale.country() == Some(country)),
            );
        }
        if self.all {
            for language in directory.languages() {
                // Registered languages are already normalized.
                if let Ok(bare) = LocaleTag::language(language) {
                    locales.insert(bare);
                }
            }
            locales.extend(directory.all_variants());
        }

        locales
    }
}

/// Policy controlling how a locale is expanded or collapsed before analysis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisMode {
    /// Exactly the input locale.
    #[default]
    Exact,
    /// The input's language, country dropped.
    ExactLanguage,
    /// The input if it names a country, otherwise the language and every
    /// registered country variant of it.
    ExactCountry,
    /// The input and every less specific locale containing it.
    LocaleAndContaining,
    /// The language and every registered variant of it.
    LanguageVariants,
    /// The input and every registered locale in the same country.
    SameCountry,
    /// The input and every registered locale.
    All,
}

impl AnalysisMode {
    /// Every mode, in declaration order.
    pub const ALL_MODES: [AnalysisMode; 7] = [
        AnalysisMode::Exact,
        AnalysisMode::ExactLanguage,
        AnalysisMode::ExactCountry,
        AnalysisMode::LocaleAndContaining,
        AnalysisMode::LanguageVariants,
        AnalysisMode::SameCountry,
        AnalysisMode::All,
    ];

    /// The expansion flags of this mode.
    pub const fn rule(self) -> ExpansionRule {
        match self {
            AnalysisMode::Exact => ExpansionRule {
                exact: true,
                ..ExpansionRule::NONE
            },
            AnalysisMode::ExactLanguage => ExpansionRule {
                language: true,
                ..ExpansionRule::NONE
            },
            AnalysisMode::ExactCountry => ExpansionRule {
                exact: true,
                contained: true,
                ..ExpansionRule::NONE
            },
            AnalysisMode::LocaleAndContaining => ExpansionRule {
                exact: true,
                containing: true,
                ..ExpansionRule::NONE
            },
            AnalysisMode::LanguageVariants => ExpansionRule {
                language: true,
                language_variants: true,
                ..ExpansionRule::NONE
            },
            AnalysisMode::SameCountry => ExpansionRule {
                exact: true,
                same_country: true,
                ..ExpansionRule::NONE
            },
            AnalysisMode::All => ExpansionRule {
                exact: true,
                all: true,
                ..ExpansionRule::NONE
            },
        }
    }

    /// Compute the target locales for an input locale.
    ///
    /// A missing input locale is replaced by `default` before the rule is
    /// applied.
    pub fn expand(
        self,
        input: Option<&LocaleTag>,
        default: &LocaleTag,
        directory: &KnownLocaleDirectory,
    ) -> BTreeSet<LocaleTag> {
        let input = input.unwrap_or(default);
        let locales = self.rule().apply(input, directory);
        trace!("{self} expanded {input} to {} locale(s)", locales.len());
        locales
    }

    /// The configuration name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            AnalysisMode::Exact => "EXACT",
            AnalysisMode::ExactLanguage => "EXACT_LANGUAGE",
            AnalysisMode::ExactCountry => "EXACT_COUNTRY",
            AnalysisMode::LocaleAndContaining => "LOCALE_AND_CONTAINING",
            AnalysisMode::LanguageVariants => "LANGUAGE_VARIANTS",
            AnalysisMode::SameCountry => "SAME_COUNTRY",
            AnalysisMode::All => "ALL",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnalysisMode {
    type Err = GlossaError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('-', "_");
        AnalysisMode::ALL_MODES
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| GlossaError::config(format!("Unknown analysis mode: {s}")))
    }
}
