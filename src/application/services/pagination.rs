//! # Pagination
//!
//! Fixed-size, 1-indexed pages over a ranked sequence.
//!
//! A page past the end is empty rather than an error, and the reported
//! totals are the same whichever page is requested.
//!
//! # Examples
//!
//! ```
//! use product_aggregator::application::services::pagination::Paginator;
//!
//! let paginator = Paginator::default();
//! let page = paginator.paginate((1..=12).collect::<Vec<u32>>(), 2);
//!
//! assert_eq!(page.items, vec![11, 12]);
//! assert_eq!(page.total_pages, 2);
//! assert_eq!(page.total_items, 12);
//! ```

use crate::infrastructure::config::DEFAULT_PAGE_SIZE;
use std::num::NonZeroUsize;

/// One page of a ranked sequence plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The items on this page, at most `page_size`.
    pub items: Vec<T>,
    /// The 1-indexed page number.
    pub current_page: u32,
    /// `ceil(total_items / page_size)`.
    pub total_pages: usize,
    /// Length of the whole sequence.
    pub total_items: usize,
    /// Items per page.
    pub page_size: usize,
}

impl<T> Page<T> {
    /// Returns true if the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slices ranked sequences into pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl Paginator {
    /// Creates a paginator with the given page size.
    #[must_use]
    pub const fn new(page_size: NonZeroUsize) -> Self {
        Self { page_size }
    }

    /// Creates a paginator, returning `None` for a zero page size.
    #[must_use]
    pub fn try_new(page_size: usize) -> Option<Self> {
        NonZeroUsize::new(page_size).map(Self::new)
    }

    /// Returns the page size.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Returns `ceil(total_items / page_size)`.
    #[must_use]
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size.get())
    }

    /// Returns the requested page. Page `0` is treated as page `1`.
    #[must_use]
    pub fn paginate<T>(&self, ranked: Vec<T>, page: u32) -> Page<T> {
        let page = page.max(1);
        let page_size = self.page_size.get();
        let total_items = ranked.len();

        let start = usize::try_from(page - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(page_size);

        let items = if start >= total_items {
            Vec::new()
        } else {
            ranked.into_iter().skip(start).take(page_size).collect()
        };

        Page {
            items,
            current_page: page,
            total_pages: self.total_pages(total_items),
            total_items,
            page_size,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sequence(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    #[test]
    fn first_page_of_fifteen() {
        let page = Paginator::default().paginate(sequence(15), 1);
        assert_eq!(page.items, sequence(10));
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_items, 15);
        assert_eq!(page.page_size, 10);
    }

    #[test]
    fn last_partial_page() {
        let page = Paginator::default().paginate(sequence(15), 2);
        assert_eq!(page.items, vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn out_of_range_page_is_empty_with_totals() {
        let page = Paginator::default().paginate(sequence(12), 5);
        assert!(page.is_empty());
        assert_eq!(page.current_page, 5);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_items, 12);
    }

    #[test]
    fn empty_sequence_has_zero_pages() {
        let page = Paginator::default().paginate(Vec::<u8>::new(), 1);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_items, 0);
    }

    #[test]
    fn exact_multiple_of_page_size() {
        let page = Paginator::default().paginate(sequence(20), 2);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn page_zero_is_first_page() {
        let page = Paginator::default().paginate(sequence(3), 0);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items, vec![0, 1, 2]);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let page = Paginator::default().paginate(sequence(3), u32::MAX);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn custom_page_size() {
        let paginator = Paginator::try_new(4).unwrap();
        let page = paginator.paginate(sequence(10), 3);
        assert_eq!(page.items, vec![8, 9]);
        assert_eq!(page.total_pages, 3);
        assert!(Paginator::try_new(0).is_none());
    }

    proptest! {
        #[test]
        fn page_length_and_totals_are_consistent(total in 0usize..300, page in 1u32..40) {
            let result = Paginator::default().paginate(sequence(total), page);
            let start = (page as usize - 1) * 10;

            prop_assert_eq!(result.total_pages, (total + 9) / 10);
            prop_assert_eq!(result.total_items, total);
            prop_assert_eq!(result.items.len(), 10.min(total.saturating_sub(start)));
            if let Some(first) = result.items.first() {
                prop_assert_eq!(*first, start);
            }
        }
    }
}
