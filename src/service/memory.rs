//! In-memory directory service.
//!
//! Backs tests and offline embedding. Failures are scripted: the next N
//! updates or fetches can be made to fail, which is how the rollback path
//! of the status workflow is exercised.

use crate::model::{Listable, RecordId};
use crate::service::{DirectoryService, ServiceError};
use std::cell::RefCell;

/// An in-memory [`DirectoryService`] over a cloneable record collection.
///
/// Single-threaded by design, matching the event-loop concurrency model of
/// the core; interior mutability is a `RefCell`, not a lock.
#[derive(Debug)]
pub struct InMemoryDirectory<R> {
    inner: RefCell<Inner<R>>,
}

#[derive(Debug)]
struct Inner<R> {
    records: Vec<R>,
    fail_updates: u32,
    fail_fetches: u32,
    updates_applied: usize,
}

impl<R: Listable + Clone> InMemoryDirectory<R> {
    /// Create a directory seeded with `records` as server truth.
    pub fn new(records: Vec<R>) -> Self {
        Self {
            inner: RefCell::new(Inner {
                records,
                fail_updates: 0,
                fail_fetches: 0,
                updates_applied: 0,
            }),
        }
    }

    /// Make the next `n` status updates fail with `Unavailable`.
    pub fn fail_next_updates(&self, n: u32) {
        self.inner.borrow_mut().fail_updates = n;
    }

    /// Make the next `n` collection/record fetches fail with `Unavailable`.
    pub fn fail_next_fetches(&self, n: u32) {
        self.inner.borrow_mut().fail_fetches = n;
    }

    /// How many status updates the server has accepted.
    pub fn updates_applied(&self) -> usize {
        self.inner.borrow().updates_applied
    }

    /// Server-side status of a record, for asserting against optimistic
    /// local state in tests.
    pub fn status_of(&self, id: &RecordId) -> Option<R::Status> {
        self.inner
            .borrow()
            .records
            .iter()
            .find(|r| r.id() == id)
            .map(|r| r.status())
    }
}

impl<R: Listable + Clone> DirectoryService<R> for InMemoryDirectory<R> {
    fn fetch_collection(&self) -> Result<Vec<R>, ServiceError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_fetches > 0 {
            inner.fail_fetches -= 1;
            return Err(ServiceError::Unavailable {
                reason: "scripted fetch failure".to_string(),
            });
        }
        Ok(inner.records.clone())
    }

    fn fetch_by_id(&self, id: &RecordId) -> Result<R, ServiceError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_fetches > 0 {
            inner.fail_fetches -= 1;
            return Err(ServiceError::Unavailable {
                reason: "scripted fetch failure".to_string(),
            });
        }
        inner
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound { id: id.clone() })
    }

    fn update_status(&self, id: &RecordId, status: R::Status) -> Result<(), ServiceError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_updates > 0 {
            inner.fail_updates -= 1;
            return Err(ServiceError::Unavailable {
                reason: "scripted update failure".to_string(),
            });
        }
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ServiceError::NotFound { id: id.clone() })?;
        record.set_status(status);
        inner.updates_applied += 1;
        Ok(())
    }
}
