//! Optimistic status-transition workflow.
//!
//! A transition applies the target status to the in-memory record first,
//! so the rendered list reflects the change with no perceptible latency,
//! then invokes the remote boundary. On remote failure the local
//! collection is reconciled back to server truth: a full refetch, falling
//! back to reverting the single record when the refetch itself fails.
//!
//! Destructive targets pass through a confirmation gate before anything is
//! touched; a declined gate aborts silently. A record never queues
//! concurrent transitions - in this single-threaded model a second request
//! simply runs after the first, and last-write-wins on the optimistic
//! value because status updates are idempotent at the status level.

use crate::model::{Listable, RecordId, StatusValue};
use crate::service::{DirectoryService, ServiceError};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

// ===== Confirmation gate =====

/// Confirmation prompt for destructive transitions.
///
/// The embedding UI decides how to ask (modal, native dialog); the
/// workflow only cares about the yes/no answer.
pub trait ConfirmationGate {
    /// Ask the user to confirm. `true` proceeds, `false` aborts silently.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that approves every prompt. For non-interactive embeddings and
/// non-destructive flows.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmationGate for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Gate that declines every prompt. Test double.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDecline;

impl ConfirmationGate for AlwaysDecline {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

// ===== Retry policy =====

/// Bounded retry for the remote mutation call.
///
/// Only transient errors ([`ServiceError::is_transient`]) are retried;
/// rejections and unknown-record errors fail immediately. The default is
/// 3 attempts with a fixed 200ms backoff - never an unbounded wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Clamped to at least 1.
    pub max_attempts: u32,
    /// Fixed delay between attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(200),
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no delay. For tests and embeddings with their own
    /// retry layer.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
        }
    }
}

// ===== Outcome and errors =====

/// How a transition request resolved when nothing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Status applied locally and accepted by the server.
    Applied,
    /// Target equals the current status; the remote boundary was not
    /// invoked.
    Unchanged,
    /// The user declined the confirmation gate; nothing was touched.
    Declined,
}

/// Which reconciliation ran after a remote failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// The whole collection was refetched from the server.
    Refetched,
    /// The refetch failed too; the single record was reverted to its
    /// prior status.
    Reverted,
}

impl fmt::Display for Recovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recovery::Refetched => f.write_str("collection refetched"),
            Recovery::Reverted => f.write_str("record reverted"),
        }
    }
}

/// A transition that could not be applied.
///
/// By the time a `Remote` error reaches the caller, reconciliation has
/// already run - the local collection matches server truth (or the prior
/// local value, see [`Recovery`]). The caller's only job is to surface
/// the message.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// No record with this id exists in the local collection.
    #[error("No record {id} in the local collection")]
    UnknownRecord {
        /// The id that was requested.
        id: RecordId,
    },

    /// The remote boundary rejected the update; local state was
    /// reconciled.
    #[error("Update for {id} failed ({recovery}): {source}")]
    Remote {
        /// The record whose update failed.
        id: RecordId,
        /// Which reconciliation ran.
        recovery: Recovery,
        /// The underlying service error.
        #[source]
        source: ServiceError,
    },
}

// ===== Workflow =====

/// Apply a status transition to one record of the raw collection.
///
/// The procedure of the transition state machine:
///
/// 1. gate destructive targets; declined means [`TransitionOutcome::Declined`]
///    and an untouched collection;
/// 2. skip self-transitions ([`TransitionOutcome::Unchanged`]);
/// 3. write the target status optimistically;
/// 4. call the remote boundary with bounded retry;
/// 5. on success, done - no refetch required for correctness;
/// 6. on failure, reconcile (refetch, else revert) and return the error
///    for user display.
pub fn apply_transition<R, S, G>(
    records: &mut Vec<R>,
    id: &RecordId,
    target: R::Status,
    service: &S,
    gate: &G,
    policy: &RetryPolicy,
) -> Result<TransitionOutcome, TransitionError>
where
    R: Listable,
    S: DirectoryService<R>,
    G: ConfirmationGate,
{
    let record = records
        .iter_mut()
        .find(|r| r.id() == id)
        .ok_or_else(|| TransitionError::UnknownRecord { id: id.clone() })?;

    let prior = record.status();
    if prior == target {
        return Ok(TransitionOutcome::Unchanged);
    }

    if target.is_destructive() {
        let prompt = format!(
            "Are you sure you want to mark {id} as {}?",
            target.label().to_lowercase()
        );
        if !gate.confirm(&prompt) {
            tracing::debug!(%id, status = target.label(), "transition declined at gate");
            return Ok(TransitionOutcome::Declined);
        }
    }

    // Optimistic update: the next render shows the new status immediately.
    record.set_status(target);

    match update_with_retry(service, id, target, policy) {
        Ok(()) => {
            tracing::info!(%id, status = target.label(), "status transition applied");
            Ok(TransitionOutcome::Applied)
        }
        Err(source) => {
            let recovery = reconcile(records, id, prior, service);
            tracing::warn!(
                %id,
                status = target.label(),
                error = %source,
                %recovery,
                "status transition failed; local state reconciled"
            );
            Err(TransitionError::Remote {
                id: id.clone(),
                recovery,
                source,
            })
        }
    }
}

/// Call `update_status` up to `policy.max_attempts` times, sleeping
/// `policy.backoff` between attempts. Non-transient errors fail fast.
fn update_with_retry<R, S>(
    service: &S,
    id: &RecordId,
    target: R::Status,
    policy: &RetryPolicy,
) -> Result<(), ServiceError>
where
    R: Listable,
    S: DirectoryService<R>,
{
    let attempts = policy.max_attempts.max(1);
    let mut last_err = None;
    for attempt in 1..=attempts {
        match service.update_status(id, target) {
            Ok(()) => return Ok(()),
            Err(err) => {
                let transient = err.is_transient();
                last_err = Some(err);
                if !transient || attempt == attempts {
                    break;
                }
                tracing::debug!(%id, attempt, "transient update failure, retrying");
                if !policy.backoff.is_zero() {
                    std::thread::sleep(policy.backoff);
                }
            }
        }
    }
    // Loop always runs at least once, so an error is recorded here.
    Err(last_err.unwrap_or_else(|| ServiceError::Unavailable {
        reason: "no attempt made".to_string(),
    }))
}

/// Resolve local state back to server truth after a failed update.
///
/// Canonical strategy: replace the whole collection from a refetch. When
/// the refetch itself fails, fall back to reverting the one record to its
/// prior status so the UI is at worst showing the pre-transition state.
fn reconcile<R, S>(records: &mut Vec<R>, id: &RecordId, prior: R::Status, service: &S) -> Recovery
where
    R: Listable,
    S: DirectoryService<R>,
{
    match service.fetch_collection() {
        Ok(fresh) => {
            *records = fresh;
            Recovery::Refetched
        }
        Err(fetch_err) => {
            tracing::warn!(%id, error = %fetch_err, "reconciliation refetch failed, reverting record");
            if let Some(record) = records.iter_mut().find(|r| r.id() == id) {
                record.set_status(prior);
            }
            Recovery::Reverted
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
