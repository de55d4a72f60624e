//! ASCII folding filter implementation.
//!
//! Folds precomposed Latin letters carrying diacritics to their base letter
//! (`ç` → `c`, `é` → `e`), and a handful of letters with no canonical
//! decomposition to their conventional ASCII spelling (`ß` → `ss`, `œ` → `oe`).
//! Letters of other scripts are left alone: decomposing `が` or a Hangul
//! syllable and dropping marks would change the word.

use std::borrow::Cow;

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that folds accented Latin letters to ASCII.
///
/// # Examples
///
/// ```
/// use glossa::analysis::token_filter::Filter;
/// use glossa::analysis::token_filter::ascii_folding::AsciiFoldingFilter;
/// use glossa::analysis::token::Token;
///
/// let filter = AsciiFoldingFilter::new();
/// let tokens = vec![Token::new("française", 0), Token::new("straße", 1)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
///
/// assert_eq!(result[0].text, "francaise");
/// assert_eq!(result[1].text, "strasse");
/// ```
#[derive(Clone, Debug, Default)]
pub struct AsciiFoldingFilter;

impl AsciiFoldingFilter {
    /// Create a new ASCII folding filter.
    pub fn new() -> Self {
        AsciiFoldingFilter
    }
}

/// Spellings for letters that have no canonical decomposition.
fn special_fold(c: char) -> Option<&'static str> {
    Some(match c {
        'ß' => "ss",
        'ẞ' => "SS",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ø' => "o",
        'Ø' => "O",
        'ł' => "l",
        'Ł' => "L",
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'þ' => "th",
        'Þ' => "TH",
        'ı' => "i",
        // Typographic apostrophe, so `n’est` and `n'est` match.
        '\u{2019}' => "'",
        _ => return None,
    })
}

/// Fold `text` to ASCII where it is a Latin letter with diacritics.
pub fn fold_to_ascii(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
        } else if let Some(folded) = special_fold(c) {
            out.push_str(folded);
        } else if is_combining_mark(c) {
            // Decomposed input: drop marks trailing a Latin letter.
            if !out.chars().next_back().is_some_and(|p| p.is_ascii_alphabetic()) {
                out.push(c);
            }
        } else {
            out.push(fold_precomposed(c).unwrap_or(c));
        }
    }

    Cow::Owned(out)
}

/// The ASCII base of a precomposed letter whose decomposition is that base
/// followed only by combining marks.
fn fold_precomposed(c: char) -> Option<char> {
    let mut base = None;
    let mut marks_only = true;
    decompose_canonical(c, |d| {
        if base.is_none() {
            base = Some(d);
        } else if !is_combining_mark(d) {
            marks_only = false;
        }
    });

    base.filter(|b| *b != c && b.is_ascii_alphabetic() && marks_only)
}

impl Filter for AsciiFoldingFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| match fold_to_ascii(&token.text) {
            Cow::Borrowed(_) => token,
            Cow::Owned(folded) => token.with_text(folded),
        })))
    }

    fn name(&self) -> &'static str {
        "ascii_folding"
    }
}
