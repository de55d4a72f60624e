//! Embedded locale directives.
//!
//! A raw property value may start with a locale directive: the sentinel
//! character `U+0000`, a locale code, and the sentinel again, followed by the
//! literal text.
//!
//! ```text
//! \u{0000}fr_FR\u{0000}Ceci n'est pas Française
//! ^^^^^^^^^^^^^^^^^^^^ directive   ^^^^^^^^^^^^ payload
//! ```
//!
//! # Examples
//!
//! ```
//! use glossa::locale::parse_directive;
//!
//! let directive = parse_directive("\u{0000}fr\u{0000}Bonjour").unwrap();
//! assert_eq!(directive.locale.unwrap().to_string(), "fr");
//! assert_eq!(directive.text, "Bonjour");
//!
//! let plain = parse_directive("Hello").unwrap();
//! assert!(plain.locale.is_none());
//! assert_eq!(plain.text, "Hello");
//! ```

use crate::error::{GlossaError, Result};
use crate::locale::LocaleTag;

/// The character delimiting a locale directive.
pub const SENTINEL: char = '\u{0000}';

/// A raw value split into its optional locale and its text payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive<'a> {
    /// The locale named by the directive, `None` when absent or empty.
    pub locale: Option<LocaleTag>,
    /// The text following the directive.
    pub text: &'a str,
}

/// Split off the directive segment, returning `(segment, payload)`.
///
/// Returns `None` when `raw` does not start with the sentinel, and
/// `Some((segment, None))` when the closing sentinel is missing.
fn split(raw: &str) -> Option<(&str, Option<&str>)> {
    let body = raw.strip_prefix(SENTINEL)?;
    Some(match body.split_once(SENTINEL) {
        Some((segment, text)) => (segment, Some(text)),
        None => (body, None),
    })
}

/// Parse the locale directive at the start of `raw`, if any.
///
/// An empty directive (`\0\0text`) means no locale was specified. A directive
/// that is unterminated or whose segment is not `language` or
/// `language_COUNTRY` fails with [`GlossaError::MalformedLocaleTag`].
pub fn parse_directive(raw: &str) -> Result<Directive<'_>> {
    match split(raw) {
        None => Ok(Directive {
            locale: None,
            text: raw,
        }),
        Some((segment, None)) => Err(GlossaError::malformed_locale(segment)),
        Some(("", Some(text))) => Ok(Directive { locale: None, text }),
        Some((segment, Some(text))) => Ok(Directive {
            locale: Some(segment.parse()?),
            text,
        }),
    }
}

/// Return the payload of `raw` with any directive removed, valid or not.
///
/// An unterminated directive loses only its opening sentinel.
pub fn strip_directive(raw: &str) -> &str {
    match split(raw) {
        None => raw,
        Some((_, Some(text))) => text,
        Some((segment, None)) => segment,
    }
}

/// Build a raw value carrying `locale` in a directive.
pub fn encode_directive(locale: &LocaleTag, text: &str) -> String {
    format!("{SENTINEL}{locale}{SENTINEL}{text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_and_country() {
        let directive = parse_directive("\u{0000}fr_FR\u{0000}Ceci n'est pas Française").unwrap();
        assert_eq!(directive.locale, Some("fr_FR".parse().unwrap()));
        assert_eq!(directive.text, "Ceci n'est pas Française");
    }

    #[test]
    fn test_no_directive_returns_text_unchanged() {
        let raw = "Ceci n'est pas\u{0000}Française";
        let directive = parse_directive(raw).unwrap();
        assert_eq!(directive.locale, None);
        assert_eq!(directive.text, raw);
    }

    #[test]
    fn test_empty_directive_means_no_locale() {
        let directive = parse_directive("\u{0000}\u{0000}plain").unwrap();
        assert_eq!(directive.locale, None);
        assert_eq!(directive.text, "plain");
    }

    #[test]
    fn test_malformed_directives() {
        for raw in [
            "\u{0000}french\u{0000}text",
            "\u{0000}fr_FR_EURO\u{0000}text",
            "\u{0000}fr text without end",
        ] {
            assert!(
                matches!(parse_directive(raw), Err(GlossaError::MalformedLocaleTag(_))),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_strip_directive() {
        assert_eq!(strip_directive("\u{0000}french\u{0000}text"), "text");
        assert_eq!(strip_directive("\u{0000}fr text"), "fr text");
        assert_eq!(strip_directive("text"), "text");
    }

    #[test]
    fn test_encode_then_parse() {
        let locale: LocaleTag = "de_AT".parse().unwrap();
        let raw = encode_directive(&locale, "Grüß Gott");
        assert_eq!(raw, "\u{0000}de_AT\u{0000}Grüß Gott");

        let directive = parse_directive(&raw).unwrap();
        assert_eq!(directive.locale, Some(locale));
        assert_eq!(directive.text, "Grüß Gott");
    }
}
