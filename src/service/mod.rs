//! The opaque remote data boundary.
//!
//! The core depends on exactly three operations: fetch the full raw
//! collection, fetch one record, and update one record's status. Any
//! JSON-over-HTTP client, RPC stub, or in-memory store satisfying
//! [`DirectoryService`] plugs in; the crate ships [`InMemoryDirectory`]
//! for tests and embedding.

use crate::model::{Listable, RecordId};
use thiserror::Error;

pub mod memory;

pub use memory::InMemoryDirectory;

/// Errors surfaced by the remote boundary.
///
/// Carries enough information for a user-facing message; the transport
/// detail behind `reason` is whatever the implementation produces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No record with this id exists on the server.
    #[error("No record found for id {id}")]
    NotFound {
        /// The id that was requested.
        id: RecordId,
    },

    /// The server understood the request and refused it (authorization,
    /// validation, state conflicts). Retrying will not help.
    #[error("Request rejected: {reason}")]
    Rejected {
        /// Server-provided rejection detail.
        reason: String,
    },

    /// Transport-level failure (timeout, connection refused, 5xx).
    /// Safe to retry: status updates are idempotent at the status level.
    #[error("Service unavailable: {reason}")]
    Unavailable {
        /// Transport failure detail.
        reason: String,
    },
}

impl ServiceError {
    /// Whether a bounded retry is worthwhile.
    pub fn is_transient(&self) -> bool {
        matches!(self, ServiceError::Unavailable { .. })
    }
}

/// The remote collection-and-mutation boundary.
///
/// Implementations are invoked from a single-threaded event context; a
/// call runs to completion from the core's perspective and resolution is
/// observed via the returned `Result`.
pub trait DirectoryService<R: Listable> {
    /// Return the full raw collection the caller is authorized to see.
    fn fetch_collection(&self) -> Result<Vec<R>, ServiceError>;

    /// Return a single record for a detail view.
    fn fetch_by_id(&self, id: &RecordId) -> Result<R, ServiceError>;

    /// Persist a status change. Success carries no payload - the caller's
    /// optimistic value is already correct.
    fn update_status(&self, id: &RecordId, status: R::Status) -> Result<(), ServiceError>;
}
