//! marketdesk
//!
//! List-management core for a marketplace directory admin client.
//!
//! Every admin screen in the product (user management, business management,
//! order history, business-order dashboard) is the same machine underneath:
//! a raw record collection fetched once from a remote service, a filter/sort
//! query over it, a pagination window into the result, an autocomplete feed
//! derived from the raw collection, and status mutations applied optimistically
//! against the service with rollback on failure. This crate is that machine,
//! with rendering left entirely to the embedding UI.
//!
//! Architecture follows Pure Core / Impure Shell: everything in [`query`],
//! [`state`], and [`export`] is pure and synchronous; the only effectful
//! pieces are the [`service`] boundary and the [`workflow`] that drives it.

pub mod config;
pub mod export;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod state;
pub mod workflow;
