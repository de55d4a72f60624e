//! Removal of embedded locale directives.
//!
//! A payload may still contain directive sequences (`\0fr_FR\0`) or stray
//! sentinel characters, for instance when several localized values were
//! concatenated. They are markup, never text, so they are cut out before
//! tokenization. A cut between two non-space characters leaves a single space
//! so the words on either side stay apart.

use std::sync::LazyLock;

use regex::Regex;

use super::{CharFilter, Transformation};

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x00[A-Za-z0-9_-]{0,16}\x00|\x00").expect("directive pattern is valid")
});

/// A char filter that deletes locale directives and stray sentinels.
///
/// A match wedged between two non-whitespace characters becomes one space.
///
/// # Examples
///
/// ```
/// use glossa::analysis::char_filter::CharFilter;
/// use glossa::analysis::char_filter::locale_directive::LocaleDirectiveCharFilter;
///
/// let filter = LocaleDirectiveCharFilter::new();
/// let (text, transformations) = filter.filter("Bonjour \u{0000}de\u{0000}Hallo");
/// assert_eq!(text, "Bonjour Hallo");
/// assert_eq!(transformations.len(), 1);
///
/// let (text, _) = filter.filter("Bonjour\u{0000}de\u{0000}Hallo");
/// assert_eq!(text, "Bonjour Hallo");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LocaleDirectiveCharFilter;

impl LocaleDirectiveCharFilter {
    /// Create a new locale directive char filter.
    pub fn new() -> Self {
        LocaleDirectiveCharFilter
    }
}

impl CharFilter for LocaleDirectiveCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        if !input.contains('\u{0000}') {
            return (input.to_string(), Vec::new());
        }

        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut last_match_end = 0;

        for m in DIRECTIVE.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            let new_start = output.len();
            let before = output.chars().next_back();
            let after = input[m.end()..].chars().next();
            if let (Some(before), Some(after)) = (before, after)
                && !before.is_whitespace()
                && !after.is_whitespace()
                && after != '\u{0000}'
            {
                output.push(' ');
            }
            transformations.push(Transformation::new(
                m.start(),
                m.end(),
                new_start,
                output.len(),
            ));
            last_match_end = m.end();
        }
        output.push_str(&input[last_match_end..]);

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "locale_directive"
    }
}
