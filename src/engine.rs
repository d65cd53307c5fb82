//! The renumbering engine.
//!
//! Walks the page sequence of a document once and decides, for every page,
//! whether it receives a number, what number it receives, and what the
//! final total count is. This is a pure arithmetic policy: no I/O, no
//! validation, and no failure modes.
//!
//! Two independent page selections shape the outcome:
//!
//! - the **ignore** set excludes a page from counting and stamping;
//! - the **skip** set excludes a page from stamping only, so it still
//!   consumes a number slot.
//!
//! A page in both sets behaves as ignored; ignoring is strictly the
//! stronger exclusion.

use crate::config::NumberingConfig;

/// The outcome of renumbering for a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    /// Page is neither counted nor stamped.
    Ignored,
    /// Page is counted but not stamped.
    Skipped,
    /// Page is stamped with the assigned number.
    Numbered(i32),
}

impl PageLabel {
    /// The assigned number, if the page receives one.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_numbering::engine::PageLabel;
    ///
    /// assert_eq!(PageLabel::Numbered(4).number(), Some(4));
    /// assert_eq!(PageLabel::Skipped.number(), None);
    /// assert_eq!(PageLabel::Ignored.number(), None);
    /// ```
    pub fn number(self) -> Option<i32> {
        match self {
            Self::Numbered(n) => Some(n),
            Self::Ignored | Self::Skipped => None,
        }
    }
}

/// The result of renumbering a page sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingResult {
    /// One label per input page, in input order.
    pub labels: Vec<PageLabel>,
    /// The last consumed number: `first_number - 1` plus the count of
    /// non-ignored pages.
    pub total: i32,
}

/// Assign numbers to an ordered sequence of zero-based page indexes.
///
/// Only the numbering fields of the configuration participate; the
/// presentation fields are irrelevant here. The returned labels are in
/// input order and always match the input length.
///
/// # Examples
///
/// ```
/// use pdf_numbering::config::NumberingConfig;
/// use pdf_numbering::engine::{renumber, PageLabel};
///
/// let config = NumberingConfig::new().with_ignore_pages([0]);
/// let result = renumber([0, 1, 2], &config);
/// assert_eq!(
///     result.labels,
///     vec![PageLabel::Ignored, PageLabel::Numbered(1), PageLabel::Numbered(2)],
/// );
/// assert_eq!(result.total, 2);
/// ```
pub fn renumber(
    pages: impl IntoIterator<Item = usize>,
    config: &NumberingConfig,
) -> NumberingResult {
    let mut current = config.first_number;
    let labels = pages
        .into_iter()
        .map(|page| {
            if config.ignore_pages.contains(&page) {
                PageLabel::Ignored
            } else if config.skip_pages.contains(&page) {
                current += 1;
                PageLabel::Skipped
            } else {
                let label = PageLabel::Numbered(current);
                current += 1;
                label
            }
        })
        .collect();
    NumberingResult {
        labels,
        total: current - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(result: &NumberingResult) -> Vec<Option<i32>> {
        result.labels.iter().map(|label| label.number()).collect()
    }

    #[test]
    fn test_default_numbering() {
        let result = renumber([0, 1, 2], &NumberingConfig::new());
        assert_eq!(numbers(&result), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn test_ignoring_reduces_total() {
        let config = NumberingConfig::new().with_ignore_pages([2]);
        let result = renumber([0, 1, 2], &config);
        assert_eq!(numbers(&result), vec![Some(1), Some(2), None]);
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_skipping_keeps_total() {
        let config = NumberingConfig::new().with_skip_pages([2]);
        let result = renumber([0, 1, 2], &config);
        assert_eq!(numbers(&result), vec![Some(1), Some(2), None]);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn test_ignoring_shifts_later_numbers() {
        let config = NumberingConfig::new().with_ignore_pages([0]);
        let result = renumber([0, 1, 2], &config);
        assert_eq!(numbers(&result), vec![None, Some(1), Some(2)]);
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_skipping_consumes_the_slot() {
        let config = NumberingConfig::new().with_skip_pages([0]);
        let result = renumber([0, 1, 2], &config);
        assert_eq!(numbers(&result), vec![None, Some(2), Some(3)]);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn test_first_number_offset() {
        let config = NumberingConfig::new().with_first_number(42);
        let result = renumber([0, 1, 2], &config);
        assert_eq!(numbers(&result), vec![Some(42), Some(43), Some(44)]);
        assert_eq!(result.total, 44);
    }

    #[test]
    fn test_first_number_may_be_non_positive() {
        let config = NumberingConfig::new().with_first_number(-1);
        let result = renumber([0, 1, 2], &config);
        assert_eq!(numbers(&result), vec![Some(-1), Some(0), Some(1)]);
        assert_eq!(result.total, 1);
    }

    #[test]
    fn test_ignore_wins_over_skip() {
        let overlap = NumberingConfig::new()
            .with_ignore_pages([1])
            .with_skip_pages([1]);
        let ignore_only = NumberingConfig::new().with_ignore_pages([1]);
        assert_eq!(
            renumber([0, 1, 2], &overlap),
            renumber([0, 1, 2], &ignore_only),
        );
        assert_eq!(renumber([0, 1, 2], &overlap).labels[1], PageLabel::Ignored);
    }

    #[test]
    fn test_empty_sequence() {
        let config = NumberingConfig::new().with_first_number(7);
        let result = renumber([], &config);
        assert!(result.labels.is_empty());
        assert_eq!(result.total, 6);
    }

    #[test]
    fn test_all_pages_ignored() {
        let config = NumberingConfig::new().with_ignore_pages([0, 1, 2]);
        let result = renumber([0, 1, 2], &config);
        assert_eq!(numbers(&result), vec![None, None, None]);
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_result_length_matches_input() {
        let config = NumberingConfig::new()
            .with_ignore_pages([1, 3])
            .with_skip_pages([0]);
        let result = renumber(0..10, &config);
        assert_eq!(result.labels.len(), 10);
    }

    #[test]
    fn test_numbers_stay_within_bounds() {
        let config = NumberingConfig::new()
            .with_first_number(5)
            .with_ignore_pages([2, 4]);
        let result = renumber(0..8, &config);
        // Six non-ignored pages, numbered 5..=10.
        for label in &result.labels {
            if let Some(n) = label.number() {
                assert!((5..=10).contains(&n));
            }
        }
        assert_eq!(result.total, 10);
    }
}
