//! The pure query pipeline: predicate evaluation, sorting, suggestions.
//!
//! Every function here is total and side-effect free; list screens
//! recompute `filter -> sort -> paginate` from the raw collection on every
//! render.

pub mod filter;
pub mod sort;
pub mod suggest;

pub use filter::{matches, matches_term, Constraint, DateWindow, FilterQuery};
pub use sort::{compare, SortKey};
pub use suggest::{suggest, SuggestConfig};
