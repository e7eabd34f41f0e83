//! Traits shared by every listable record kind.
//!
//! The query pipeline, pagination, suggestions, and the status workflow are
//! all generic over [`Listable`]. Entity-specific detail payload (addresses,
//! line items, contact blocks) stays opaque to the core; only the fields
//! named here are ever read by it.

use crate::model::RecordId;
use crate::query::SortKey;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A closed, entity-specific status set.
///
/// Implemented by `UserStatus`, `BusinessStatus`, and `OrderStatus`. The
/// workflow uses [`StatusValue::is_destructive`] to decide whether a
/// transition needs an explicit confirmation gate, and
/// [`StatusValue::alternatives`] to derive the destination list a UI offers
/// (every state other than the current one).
pub trait StatusValue: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Human-readable label, as shown in badges and invoices.
    fn label(&self) -> &'static str;

    /// Whether entering this status warrants a confirmation prompt.
    fn is_destructive(&self) -> bool;

    /// Every member of the status set, in display order.
    fn all() -> &'static [Self];

    /// Every status other than `self` - the valid transition targets.
    fn alternatives(self) -> Vec<Self> {
        Self::all().iter().copied().filter(|s| *s != self).collect()
    }
}

/// The type facet used where a collection mixes product and service entries.
///
/// Users and orders have no type facet; they use the uninhabited [`NoKind`].
pub trait KindValue: Copy + Eq + fmt::Debug {}

/// Uninhabited kind for record types without a type facet.
///
/// A `Constraint<NoKind>` can only ever be `Any`, so the evaluator's kind
/// check is statically a no-op for users and orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoKind {}

impl KindValue for NoKind {}

/// One item in a listable collection.
///
/// The contract every record kind satisfies so the core can filter, sort,
/// paginate, suggest, and mutate status without knowing the entity.
pub trait Listable {
    /// The record's status enum.
    type Status: StatusValue;
    /// The record's type facet, or [`NoKind`].
    type Kind: KindValue;

    /// Opaque unique identifier, stable for the record's lifetime.
    fn id(&self) -> &RecordId;

    /// Current status value.
    fn status(&self) -> Self::Status;

    /// Replace the status value. Only the status workflow calls this.
    fn set_status(&mut self, status: Self::Status);

    /// The type facet, if the entity has one.
    fn kind(&self) -> Option<Self::Kind> {
        None
    }

    /// Timestamp used for relative date-range filtering.
    fn timestamp(&self) -> DateTime<Utc>;

    /// Push every searchable string field, in suggestion-priority order.
    ///
    /// Missing optional fields are skipped. Implementations never panic on
    /// partial records - the evaluator runs on every record on every
    /// keystroke and must be total.
    fn collect_search_fields<'a>(&'a self, out: &mut Vec<&'a str>);

    /// The field compared under `key`, or `""` when the record has no such
    /// field. Missing values sorting as empty string keeps the comparator a
    /// total order.
    fn sort_text(&self, key: SortKey) -> &str;
}

/// Count records per status value.
///
/// Backs the quick-stat cards the admin screens render above each list.
pub fn status_counts<R: Listable>(records: &[R]) -> HashMap<R::Status, usize> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(record.status()).or_insert(0) += 1;
    }
    counts
}
