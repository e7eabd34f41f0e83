//! Buffered jump-to-page numeric entry.
//!
//! The raw text the user types is buffered separately from the committed
//! page number. The buffer only commits on explicit confirmation (Enter or
//! blur); invalid or out-of-range input reverts the buffer to the last
//! committed page instead of clearing it. Partial input never navigates.

use crate::state::Pager;

/// State machine for the direct page-entry text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageJumpInput {
    buffer: String,
}

impl PageJumpInput {
    /// Create a buffer showing the pager's committed page.
    pub fn new(pager: &Pager) -> Self {
        Self {
            buffer: pager.current_page().to_string(),
        }
    }

    /// The raw text currently displayed in the box.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer with the user's raw input. Never navigates.
    pub fn set_text(&mut self, raw: impl Into<String>) {
        self.buffer = raw.into();
    }

    /// Confirm the buffer (Enter key).
    ///
    /// A parseable in-range number commits to the pager; anything else
    /// reverts the buffer to the committed page. Returns whether the
    /// committed page changed.
    pub fn confirm(&mut self, pager: &mut Pager) -> bool {
        match self.parsed_in_range(pager) {
            Some(page) => {
                let moved = pager.set_page(page);
                self.buffer = pager.current_page().to_string();
                moved
            }
            None => {
                self.revert(pager);
                false
            }
        }
    }

    /// Focus left the box (blur).
    ///
    /// Same validation as [`PageJumpInput::confirm`]: a stale invalid
    /// buffer must not survive, it visually reverts to the committed page.
    pub fn blur(&mut self, pager: &mut Pager) -> bool {
        self.confirm(pager)
    }

    /// Re-display the committed page after external navigation (next/prev
    /// buttons, clamp-on-shrink).
    pub fn refresh(&mut self, pager: &Pager) {
        self.buffer = pager.current_page().to_string();
    }

    fn revert(&mut self, pager: &Pager) {
        self.buffer = pager.current_page().to_string();
    }

    fn parsed_in_range(&self, pager: &Pager) -> Option<usize> {
        let page: usize = self.buffer.trim().parse().ok()?;
        (page >= 1 && page <= pager.total_pages()).then_some(page)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "page_input_tests.rs"]
mod tests;
