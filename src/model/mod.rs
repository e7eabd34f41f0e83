//! Domain records and the traits the core is generic over.

pub mod business;
pub mod error;
pub mod identifiers;
pub mod order;
pub mod record;
pub mod user;

pub use business::{Business, BusinessKind, BusinessStatus, OwnerContact};
pub use error::AppError;
pub use identifiers::{InvalidRecordId, RecordId};
pub use order::{
    CustomerRef, LineItem, Order, OrderStats, OrderStatus, PaymentMethod, PriceBreakdown, Rupees,
};
pub use record::{status_counts, KindValue, Listable, NoKind, StatusValue};
pub use user::{User, UserRole, UserStatus};
