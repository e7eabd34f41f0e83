//! Page-level list controller.
//!
//! One `ListView` is the local state of one admin screen: the raw
//! collection fetched from the service, the active filter/sort query, the
//! pager, and the page-jump buffer. Every read of [`ListView::visible`]
//! recomputes `filter -> stable sort -> page slice` from the raw
//! collection, so a status mutated in place shows up on the next render
//! with no extra bookkeeping.
//!
//! The collection is injected, never a module-level constant, so the whole
//! controller is testable in isolation.

use crate::model::{Listable, RecordId};
use crate::query::{self, Constraint, DateWindow, FilterQuery, SortKey, SuggestConfig};
use crate::service::DirectoryService;
use crate::state::{PageJumpInput, Pager};
use crate::workflow::{
    apply_transition, ConfirmationGate, RetryPolicy, TransitionError, TransitionOutcome,
};
use chrono::{DateTime, Utc};

/// List-screen state over one record kind.
#[derive(Debug, Clone)]
pub struct ListView<R: Listable> {
    records: Vec<R>,
    query: FilterQuery<R::Status, R::Kind>,
    sort: SortKey,
    pager: Pager,
    page_input: PageJumpInput,
    suggest_config: SuggestConfig,
}

impl<R: Listable + Clone> ListView<R> {
    /// Empty view with the given page size and default suggestion tuning.
    pub fn new(page_size: usize) -> Self {
        Self::with_suggest_config(page_size, SuggestConfig::default())
    }

    /// Empty view with explicit suggestion tuning.
    pub fn with_suggest_config(page_size: usize, suggest_config: SuggestConfig) -> Self {
        let pager = Pager::new(page_size);
        let page_input = PageJumpInput::new(&pager);
        Self {
            records: Vec::new(),
            query: FilterQuery::default(),
            sort: SortKey::default(),
            pager,
            page_input,
            suggest_config,
        }
    }

    // ===== Collection lifecycle =====

    /// Replace the raw collection (initial fetch or explicit refresh).
    ///
    /// Filter, sort, and pagination are ephemeral UI state scoped to one
    /// collection: all of them reset to defaults here.
    pub fn replace_collection(&mut self, records: Vec<R>, now: DateTime<Utc>) {
        self.records = records;
        self.query = FilterQuery::default();
        self.sort = SortKey::default();
        self.pager.reset();
        self.resync(now);
    }

    /// Fetch the collection from the service and install it.
    ///
    /// On failure the previous collection is cleared: the screen falls
    /// back to an explicit empty/error state rather than rendering stale
    /// or partially-populated data.
    pub fn load_from<S: DirectoryService<R>>(
        &mut self,
        service: &S,
        now: DateTime<Utc>,
    ) -> Result<(), crate::service::ServiceError> {
        match service.fetch_collection() {
            Ok(records) => {
                self.replace_collection(records, now);
                Ok(())
            }
            Err(err) => {
                self.replace_collection(Vec::new(), now);
                Err(err)
            }
        }
    }

    /// The raw collection, unfiltered.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    // ===== Query mutation =====

    /// Set the free-text search term.
    pub fn set_search_term(&mut self, term: impl Into<String>, now: DateTime<Utc>) {
        self.query.term = term.into();
        self.resync(now);
    }

    /// Adopt an autocomplete suggestion: the active term becomes exactly
    /// the suggestion string, so the next render matches at least the
    /// record(s) it was derived from. The caller closes its panel.
    pub fn apply_suggestion(&mut self, suggestion: &str, now: DateTime<Utc>) {
        self.set_search_term(suggestion, now);
    }

    /// Pin or clear the status facet.
    pub fn set_status_filter(&mut self, status: Constraint<R::Status>, now: DateTime<Utc>) {
        self.query.status = status;
        self.resync(now);
    }

    /// Pin or clear the type facet.
    pub fn set_kind_filter(&mut self, kind: Constraint<R::Kind>, now: DateTime<Utc>) {
        self.query.kind = kind;
        self.resync(now);
    }

    /// Set the relative date window.
    pub fn set_date_window(&mut self, window: DateWindow, now: DateTime<Utc>) {
        self.query.window = window;
        self.resync(now);
    }

    /// Set the sort key. Does not affect the filtered count.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// The active query.
    pub fn query(&self) -> &FilterQuery<R::Status, R::Kind> {
        &self.query
    }

    /// The active sort key.
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    // ===== Derived views =====

    /// Records matching the active query, in insertion order.
    pub fn filtered(&self, now: DateTime<Utc>) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| query::matches(*r, &self.query, now))
            .collect()
    }

    /// Count of records matching the active query.
    pub fn filtered_len(&self, now: DateTime<Utc>) -> usize {
        self.records
            .iter()
            .filter(|r| query::matches(*r, &self.query, now))
            .count()
    }

    /// The current page of the filtered, sorted collection.
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<&R> {
        let mut filtered = self.filtered(now);
        // Stable sort: ties and SortKey::Unsorted keep insertion order.
        filtered.sort_by(|a, b| query::compare(*a, *b, self.sort));
        self.pager.page_slice(&filtered).to_vec()
    }

    /// Autocomplete candidates for the active term, generated from the
    /// raw collection regardless of status/date filters.
    pub fn suggestions(&self) -> Vec<String> {
        query::suggest(&self.records, &self.query.term, &self.suggest_config)
    }

    // ===== Pagination =====

    /// The pager (read-only; navigate through the methods below).
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Navigate to an absolute page. Out-of-range requests are ignored.
    /// Returns whether the page changed (the caller scrolls to top).
    pub fn set_page(&mut self, page: usize) -> bool {
        let moved = self.pager.set_page(page);
        self.page_input.refresh(&self.pager);
        moved
    }

    /// Navigate forward one page.
    pub fn next_page(&mut self) -> bool {
        let moved = self.pager.next_page();
        self.page_input.refresh(&self.pager);
        moved
    }

    /// Navigate back one page.
    pub fn prev_page(&mut self) -> bool {
        let moved = self.pager.prev_page();
        self.page_input.refresh(&self.pager);
        moved
    }

    /// Raw text in the jump-to-page box.
    pub fn page_input_text(&self) -> &str {
        self.page_input.text()
    }

    /// Buffer keystrokes in the jump-to-page box. Never navigates.
    pub fn type_page_input(&mut self, raw: impl Into<String>) {
        self.page_input.set_text(raw);
    }

    /// Commit the jump-to-page box (Enter). Returns whether the page
    /// changed; invalid input reverts the box.
    pub fn confirm_page_input(&mut self) -> bool {
        self.page_input.confirm(&mut self.pager)
    }

    /// Commit-or-revert the jump-to-page box on focus loss.
    pub fn blur_page_input(&mut self) -> bool {
        self.page_input.blur(&mut self.pager)
    }

    // ===== Status workflow =====

    /// Run the optimistic status workflow against one record, then re-sync
    /// pagination (the mutation may move the record out of an active
    /// status filter, shrinking the filtered set).
    pub fn transition_status<S, G>(
        &mut self,
        id: &RecordId,
        target: R::Status,
        service: &S,
        gate: &G,
        policy: &RetryPolicy,
        now: DateTime<Utc>,
    ) -> Result<TransitionOutcome, TransitionError>
    where
        S: DirectoryService<R>,
        G: ConfirmationGate,
    {
        let result = apply_transition(&mut self.records, id, target, service, gate, policy);
        self.resync(now);
        result
    }

    // ===== Internal =====

    /// Re-derive `total_pages` from the current filtered count and clamp
    /// the page in the same logical step, then refresh the jump box.
    fn resync(&mut self, now: DateTime<Utc>) {
        let len = self.filtered_len(now);
        self.pager.sync(len);
        self.page_input.refresh(&self.pager);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "list_view_tests.rs"]
mod tests;
