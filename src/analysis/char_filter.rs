//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw payload before it reaches the tokenizer. Each
//! filter reports the edits it made as [`Transformation`]s so analyzers can map
//! token offsets back onto the text they were given.
//!
//! # Available Filters
//!
//! - [`locale_directive::LocaleDirectiveCharFilter`] - Removes embedded locale directives

pub mod locale_directive;

/// Represents a change in the text, mapping a range in the original text
/// to a range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }

    fn original_len(&self) -> usize {
        self.original_end - self.original_start
    }

    fn new_len(&self) -> usize {
        self.new_end - self.new_start
    }
}

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// Returns the filtered text and the transformations applied, ordered by
    /// position.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Map an offset in filtered text back to the text before filtering.
///
/// `is_end` biases offsets sitting exactly on a deletion: a token start moves
/// past the deleted text, a token end stays before it.
pub fn correct_offset(offset: usize, transformations: &[Transformation], is_end: bool) -> usize {
    let mut shift: isize = 0;

    for t in transformations {
        if offset < t.new_start {
            break;
        }
        if offset < t.new_end {
            // Inside replaced text: interpolate linearly.
            let offset_in_original = (offset - t.new_start) * t.original_len() / t.new_len();
            return t.original_start + offset_in_original;
        }
        if is_end && t.new_len() == 0 && offset == t.new_start {
            break;
        }
        shift += t.original_len() as isize - t.new_len() as isize;
    }

    (offset as isize + shift) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_offset_after_deletion() {
        // "ab\0fr\0cd" -> "abcd": bytes 2..6 deleted.
        let transformations = [Transformation::new(2, 6, 2, 2)];

        assert_eq!(correct_offset(0, &transformations, false), 0);
        assert_eq!(correct_offset(2, &transformations, false), 6);
        assert_eq!(correct_offset(2, &transformations, true), 2);
        assert_eq!(correct_offset(4, &transformations, true), 8);
    }

    #[test]
    fn test_correct_offset_inside_replacement() {
        // 2 original bytes replaced by 4 new bytes at position 1.
        let transformations = [Transformation::new(1, 3, 1, 5)];

        assert_eq!(correct_offset(3, &transformations, false), 2);
        assert_eq!(correct_offset(5, &transformations, true), 3);
    }

    #[test]
    fn test_correct_offset_accumulates() {
        let transformations = [
            Transformation::new(0, 1, 0, 0),
            Transformation::new(5, 9, 4, 4),
        ];

        assert_eq!(correct_offset(1, &transformations, false), 2);
        assert_eq!(correct_offset(4, &transformations, false), 9);
        assert_eq!(correct_offset(6, &transformations, false), 11);
    }
}
