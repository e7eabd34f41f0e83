//! Pagination state machine.
//!
//! Holds the committed page and page size, derives total pages from the
//! upstream filtered count, and clamps immediately when the count shrinks.
//! Navigation is pure state transition; the scroll-to-top that accompanies
//! a page change is a presentation concern invoked by the caller.

/// Pagination controller for one list view.
///
/// Invariant, re-established by [`Pager::sync`] after every upstream
/// change: `1 <= current_page <= total_pages`, where
/// `total_pages = max(1, ceil(filtered_len / page_size))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    page_size: usize,
    total_pages: usize,
}

impl Pager {
    /// Create a pager on page 1 over an empty collection.
    ///
    /// A zero `page_size` is clamped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_pages: 1,
        }
    }

    /// The committed page, 1-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Derived page count, always at least 1.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Recompute `total_pages` for a new filtered count and clamp the
    /// current page down if the range shrank beneath it.
    ///
    /// Must run in the same logical step as the filter change - a render
    /// must never observe an out-of-range page slicing an empty window.
    pub fn sync(&mut self, filtered_len: usize) {
        self.total_pages = filtered_len.div_ceil(self.page_size).max(1);
        if self.current_page > self.total_pages {
            self.current_page = self.total_pages;
        }
    }

    /// Request navigation to page `page`.
    ///
    /// Out-of-range requests are silently ignored. Returns whether the
    /// committed page changed, so the caller knows to fire its
    /// scroll-to-top side effect.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Navigate to the next page, if any.
    pub fn next_page(&mut self) -> bool {
        self.set_page(self.current_page + 1)
    }

    /// Navigate to the previous page, if any.
    pub fn prev_page(&mut self) -> bool {
        // current_page is at least 1; avoid underflow on page 1.
        self.current_page
            .checked_sub(1)
            .is_some_and(|page| self.set_page(page))
    }

    /// Reset to page 1 (used when the raw collection is replaced).
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.total_pages = 1;
    }

    /// The current page's window into an already filtered+sorted slice.
    ///
    /// Empty when the slice is shorter than the page start, which can only
    /// happen transiently if the caller forgot to [`Pager::sync`].
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(items.len());
        if start >= items.len() {
            &[]
        } else {
            &items[start..end]
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "pager_tests.rs"]
mod tests;
