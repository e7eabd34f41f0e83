//! Record identifier newtype with a smart constructor.
//!
//! Identifiers are opaque and validated non-empty at construction time.
//! The raw constructor is never exported - use the smart constructor only.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when an identifier fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Record identifier must be non-empty")]
pub struct InvalidRecordId;

/// Unique identifier for a listable record (user, business, or order).
///
/// Stable for the record's lifetime. The string form is whatever the remote
/// service issued (`"USR-101"`, `"ORD-2024-001"`, a Mongo ObjectId, ...);
/// this type only guarantees it is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Smart constructor: validates the identifier is non-empty.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRecordId> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidRecordId)
        } else {
            Ok(Self(s))
        }
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RecordId {
    type Error = InvalidRecordId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> String {
        id.0
    }
}
