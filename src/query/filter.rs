//! Query predicate evaluation.
//!
//! [`matches`] is the single predicate every list screen filters with. It is
//! pure and total: `now` is passed in rather than read from the clock, and
//! malformed or partial records degrade to non-matching fields instead of
//! panicking, because the predicate runs on every record on every keystroke.

use crate::model::Listable;
use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

// ===== Constraint =====

/// A filter facet that is either unconstrained or pinned to one value.
///
/// The absence of a constraint is a distinct variant, not a sentinel value
/// mixed into the enum being filtered - so a status legitimately named
/// "all" could never be confused with "no filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint<T> {
    /// No constraint: every value is admitted.
    Any,
    /// Only records with exactly this value are admitted.
    Only(T),
}

impl<T> Default for Constraint<T> {
    fn default() -> Self {
        Constraint::Any
    }
}

impl<T: PartialEq> Constraint<T> {
    /// Whether `value` satisfies the constraint.
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Constraint::Any => true,
            Constraint::Only(wanted) => value == Some(wanted),
        }
    }
}

// ===== DateWindow =====

/// Relative date-range filter.
///
/// Month-based windows subtract calendar months, not fixed 30-day blocks:
/// "last month" from March 31 reaches back to the end of February.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateWindow {
    /// No date constraint.
    #[default]
    AnyTime,
    /// Last 7 days.
    PastWeek,
    /// Last calendar month.
    PastMonth,
    /// Last 3 calendar months.
    PastQuarter,
    /// Last 6 calendar months.
    PastHalfYear,
}

impl DateWindow {
    /// The cutoff instant for this window, or `None` when unconstrained.
    ///
    /// Records at or after the cutoff pass the filter. Calendar underflow
    /// (only reachable near the representable minimum) clamps to the
    /// minimum instant rather than failing.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let months_back = |n: u32| {
            now.checked_sub_months(Months::new(n))
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        };
        match self {
            DateWindow::AnyTime => None,
            DateWindow::PastWeek => Some(now - Duration::days(7)),
            DateWindow::PastMonth => Some(months_back(1)),
            DateWindow::PastQuarter => Some(months_back(3)),
            DateWindow::PastHalfYear => Some(months_back(6)),
        }
    }
}

// ===== FilterQuery =====

/// The active search/filter constraints of one list screen.
///
/// `S` and `K` are the record's status and kind enums. A default query
/// (empty term, everything `Any`) matches every record.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery<S, K> {
    /// Free-text search term. Empty means no text constraint.
    pub term: String,
    /// Status facet.
    pub status: Constraint<S>,
    /// Type facet (product/service), where the entity has one.
    pub kind: Constraint<K>,
    /// Relative date-range facet.
    pub window: DateWindow,
}

impl<S, K> Default for FilterQuery<S, K> {
    fn default() -> Self {
        Self {
            term: String::new(),
            status: Constraint::Any,
            kind: Constraint::Any,
            window: DateWindow::AnyTime,
        }
    }
}

impl<S, K> FilterQuery<S, K> {
    /// Whether any constraint is active.
    pub fn is_empty(&self) -> bool
    where
        S: PartialEq,
        K: PartialEq,
    {
        self.term.trim().is_empty()
            && self.status == Constraint::Any
            && self.kind == Constraint::Any
            && self.window == DateWindow::AnyTime
    }
}

/// Evaluate the full predicate: the AND of all active constraints.
///
/// Cheap equality checks (status, kind, date) short-circuit before the
/// substring scan. Text matching is case-insensitive substring OR across
/// the record's searchable fields.
pub fn matches<R: Listable>(
    record: &R,
    query: &FilterQuery<R::Status, R::Kind>,
    now: DateTime<Utc>,
) -> bool {
    if !query.status.admits(Some(&record.status())) {
        return false;
    }
    if !query.kind.admits(record.kind().as_ref()) {
        return false;
    }
    if let Some(cutoff) = query.window.cutoff(now) {
        if record.timestamp() < cutoff {
            return false;
        }
    }
    matches_term(record, &query.term)
}

/// Text-only part of the predicate: true when `term` is blank or any
/// searchable field contains it case-insensitively.
pub fn matches_term<R: Listable>(record: &R, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let mut fields = Vec::new();
    record.collect_search_fields(&mut fields);
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
