//! Sort comparator for list views.
//!
//! Composed after filtering; callers use a stable sort so `Unsorted` (and
//! ties under any key) preserve insertion order.

use crate::model::Listable;
use std::cmp::Ordering;

/// Supported sort keys.
///
/// Some screens reuse the sort dropdown for status shortcuts; those map to
/// `Unsorted` here and to a status constraint in the filter, keeping the
/// comparator a true total order for every key that claims to sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Preserve insertion order.
    #[default]
    Unsorted,
    /// Lexicographic by the record's name field.
    Name,
    /// Lexicographic by the record's city/location field.
    City,
}

/// Compare two records under `key`.
///
/// Case-insensitive lexicographic comparison; records missing the sort
/// field compare as empty string and therefore sort first. Total, never
/// panics.
pub fn compare<R: Listable>(a: &R, b: &R, key: SortKey) -> Ordering {
    match key {
        SortKey::Unsorted => Ordering::Equal,
        SortKey::Name | SortKey::City => {
            let left = a.sort_text(key).to_lowercase();
            let right = b.sort_text(key).to_lowercase();
            left.cmp(&right)
        }
    }
}
