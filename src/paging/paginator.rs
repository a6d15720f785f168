//! 1-based pagination.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Page (1-based) containing the item at 1-based `position`.
///
/// ```
/// use vnfood_core::paging::page_for_position;
///
/// assert_eq!(page_for_position(15, 10), 2);
/// assert_eq!(page_for_position(10, 10), 1);
/// assert_eq!(page_for_position(11, 10), 2);
/// ```
#[must_use]
pub fn page_for_position(position: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0);
    position.max(1).div_ceil(page_size)
}

/// Page cursor over a list of `total` items.
///
/// The page is always in `1..=max(page_count, 1)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    page_size: usize,
    page: usize,
    total: usize,
}

impl Paginator {
    /// Panics if `page_size` is zero.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page_size must be at least 1");
        Self {
            page_size,
            page: 1,
            total: 0,
        }
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of non-empty pages (0 for an empty list).
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Whether a page selector should be shown.
    #[must_use]
    pub fn has_pages(&self) -> bool {
        self.page_count() > 1
    }

    /// Update the list length, pulling the page back if it ran off the end.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page = self.page.min(self.last_page());
    }

    /// Jump to a page, clamped to the valid range. Returns the page
    /// actually selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.last_page());
        self.page
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Index range of the current page.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    /// The current page of `items`.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    fn last_page(&self) -> usize {
        self.page_count().max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_three_items() {
        let items: Vec<u32> = (0..23).collect();
        let mut pager = Paginator::new(10);
        pager.set_total(items.len());
        assert_eq!(pager.page_count(), 3);

        let sizes: Vec<usize> = (1..=3)
            .map(|p| {
                pager.set_page(p);
                pager.slice(&items).len()
            })
            .collect();
        assert_eq!(sizes, vec![10, 10, 3]);
        assert_eq!(pager.slice(&items)[0], 20);
    }

    #[test]
    fn test_page_clamps() {
        let mut pager = Paginator::new(10);
        pager.set_total(23);
        assert_eq!(pager.set_page(9), 3);
        assert_eq!(pager.set_page(0), 1);

        pager.set_page(3);
        pager.set_total(12);
        assert_eq!(pager.page(), 2);

        pager.set_total(0);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.range(), 0..0);
        assert!(!pager.has_pages());
    }

    #[test]
    fn test_position_to_page() {
        assert_eq!(page_for_position(1, 10), 1);
        assert_eq!(page_for_position(15, 10), 2);
        assert_eq!(page_for_position(23, 10), 3);
        assert_eq!(page_for_position(3, 1), 3);
    }
}
