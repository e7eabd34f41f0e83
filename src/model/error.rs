//! Top-level error taxonomy.
//!
//! Each module defines its own `thiserror` enum; this module composes them
//! into [`AppError`] via `From` so call sites propagate with `?` and the
//! embedding shell matches on one type.
//!
//! Recovery policy by failure class:
//!
//! - **Validation errors** (page-jump input, malformed search text) never
//!   become `Err` at all - they are absorbed locally by reverting to the
//!   last valid state.
//! - **Mutation errors** surface to the user and have already triggered
//!   reconciliation by the time the caller sees them.
//! - **Fetch errors** surface, and the screen falls back to an explicit
//!   empty/error state rather than operating on a stale collection.
//!
//! The pure functions in `query` and `export` are total and never appear
//! here: missing fields degrade to empty string or `false`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::service::ServiceError;
use crate::workflow::TransitionError;
use thiserror::Error;

/// Unified application error for the embedding shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// The remote boundary failed on a fetch. Fatal for the screen: fall
    /// back to an explicit empty/error state, do not render stale data.
    #[error("Directory service error: {0}")]
    Service(#[from] ServiceError),

    /// A status transition failed. Reconciliation already ran; the message
    /// is for the user, the local collection matches server truth again.
    #[error("Status transition failed: {0}")]
    Transition(#[from] TransitionError),

    /// Configuration file was present but unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber initialization failed.
    #[error("Logging setup error: {0}")]
    Logging(#[from] LoggingError),
}
