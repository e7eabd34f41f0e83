//! List-screen state machines (pure).
//!
//! All transitions here are synchronous and run to completion within one
//! UI event tick; the only asynchronous collaborator (the remote service)
//! is reached through [`crate::workflow`].

pub mod list_view;
pub mod page_input;
pub mod pager;

pub use list_view::ListView;
pub use page_input::PageJumpInput;
pub use pager::Pager;
