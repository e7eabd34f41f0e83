//! Document export.
//!
//! Currently a single artifact: the plain-text invoice built from an
//! order record. See [`invoice`].

pub mod invoice;

pub use invoice::{invoice_file_name, render_invoice};
