//! Order records as listed by the order-history and business-order screens.

use crate::model::record::{Listable, NoKind, StatusValue};
use crate::model::RecordId;
use crate::query::SortKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Payment accepted, not yet dispatched.
    Processing,
    /// Dispatched to the courier.
    Shipped,
    /// Delivered to the customer.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
}

impl StatusValue for OrderStatus {
    fn label(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    fn is_destructive(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }

    fn all() -> &'static [Self] {
        &[
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }
}

/// Whole-rupee money amount.
///
/// The platform prices everything in whole rupees; fractional paise never
/// appear on invoices.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupees(pub i64);

impl Rupees {
    /// The zero amount.
    pub const ZERO: Rupees = Rupees(0);

    /// Multiply a unit price by a quantity.
    pub fn times(self, quantity: u32) -> Rupees {
        Rupees(self.0 * i64::from(quantity))
    }
}

impl Add for Rupees {
    type Output = Rupees;

    fn add(self, rhs: Rupees) -> Rupees {
        Rupees(self.0 + rhs.0)
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Rupees>>(iter: I) -> Rupees {
        iter.fold(Rupees::ZERO, Add::add)
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit card.
    CreditCard,
    /// Debit card.
    DebitCard,
    /// UPI transfer.
    Upi,
    /// Cash on delivery.
    CashOnDelivery,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        };
        f.write_str(label)
    }
}

/// The customer an order belongs to, denormalized onto the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRef {
    /// The customer's user record id.
    pub user_id: RecordId,
    /// Customer display name.
    pub name: String,
    /// Customer email.
    pub email: String,
    /// Customer phone.
    pub phone: Option<String>,
}

/// One purchased line on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name.
    pub name: String,
    /// Product category.
    pub category: String,
    /// Unit price.
    pub unit_price: Rupees,
    /// Units purchased.
    pub quantity: u32,
}

impl LineItem {
    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Rupees {
        self.unit_price.times(self.quantity)
    }
}

/// Price components of an order.
///
/// The order total is never stored; [`PriceBreakdown::total`] derives it so
/// the components and the displayed total cannot drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Sum of line totals.
    pub subtotal: Rupees,
    /// Delivery charge.
    pub delivery_charge: Rupees,
    /// Tax.
    pub tax: Rupees,
    /// Discount applied, if any.
    pub discount: Rupees,
}

impl PriceBreakdown {
    /// The amount charged: `subtotal + delivery_charge + tax - discount`.
    pub fn total(&self) -> Rupees {
        Rupees(self.subtotal.0 + self.delivery_charge.0 + self.tax.0 - self.discount.0)
    }
}

/// An order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier, e.g. `ORD-2024-001`.
    pub id: RecordId,
    /// The ordering customer.
    pub customer: CustomerRef,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// When the order was (or is expected to be) delivered.
    pub delivery_date: Option<DateTime<Utc>>,
    /// Current fulfilment status.
    pub status: OrderStatus,
    /// Payment method used.
    pub payment_method: PaymentMethod,
    /// Gateway transaction id, absent for cash on delivery.
    pub transaction_id: Option<String>,
    /// Delivery address as a single display string.
    pub delivery_address: String,
    /// Purchased lines. Never empty on a well-formed order.
    pub items: Vec<LineItem>,
    /// Price components.
    pub pricing: PriceBreakdown,
}

impl Listable for Order {
    type Status = OrderStatus;
    type Kind = NoKind;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.placed_at
    }

    fn collect_search_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(self.id.as_str());
        out.push(self.customer.user_id.as_str());
        out.push(&self.customer.name);
        for item in &self.items {
            out.push(&item.name);
        }
    }

    fn sort_text(&self, key: SortKey) -> &str {
        match key {
            SortKey::Name => &self.customer.name,
            // Orders carry a free-form address, not a structured city.
            SortKey::City | SortKey::Unsorted => "",
        }
    }
}

/// Aggregates for the dashboard stat cards above the order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStats {
    /// Order count, all statuses.
    pub total_orders: usize,
    /// Revenue across non-cancelled orders.
    pub total_revenue: Rupees,
    /// Delivered order count.
    pub delivered_orders: usize,
    /// Distinct customers across all orders.
    pub unique_customers: usize,
}

impl OrderStats {
    /// Compute aggregates over a raw order collection.
    pub fn compute(orders: &[Order]) -> OrderStats {
        let total_revenue = orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(|o| o.pricing.total())
            .sum();
        let delivered_orders = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Delivered)
            .count();
        let unique_customers = orders
            .iter()
            .map(|o| o.customer.user_id.as_str())
            .collect::<HashSet<_>>()
            .len();
        OrderStats {
            total_orders: orders.len(),
            total_revenue,
            delivered_orders,
            unique_customers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order(id: &str, user: &str, status: OrderStatus, subtotal: i64) -> Order {
        Order {
            id: RecordId::new(id).expect("valid id"),
            customer: CustomerRef {
                user_id: RecordId::new(user).expect("valid id"),
                name: "Priya Patel".to_string(),
                email: "priya.patel@email.com".to_string(),
                phone: None,
            },
            placed_at: Utc.with_ymd_and_hms(2024, 11, 4, 9, 0, 0).unwrap(),
            delivery_date: None,
            status,
            payment_method: PaymentMethod::Upi,
            transaction_id: None,
            delivery_address: "456 Park Avenue, Mumbai, Maharashtra".to_string(),
            items: vec![LineItem {
                name: "Handcrafted Leather Wallet".to_string(),
                category: "Fashion & Accessories".to_string(),
                unit_price: Rupees(subtotal),
                quantity: 1,
            }],
            pricing: PriceBreakdown {
                subtotal: Rupees(subtotal),
                delivery_charge: Rupees(40),
                tax: Rupees(10),
                discount: Rupees::ZERO,
            },
        }
    }

    #[test]
    fn line_total_is_price_times_quantity() {
        let item = LineItem {
            name: "Artisan Coffee House Blend".to_string(),
            category: "Café & Restaurant".to_string(),
            unit_price: Rupees(299),
            quantity: 3,
        };
        assert_eq!(item.line_total(), Rupees(897));
    }

    #[test]
    fn breakdown_total_sums_components_minus_discount() {
        let pricing = PriceBreakdown {
            subtotal: Rupees(1299),
            delivery_charge: Rupees(50),
            tax: Rupees(65),
            discount: Rupees(100),
        };
        assert_eq!(pricing.total(), Rupees(1314));
    }

    #[test]
    fn stats_exclude_cancelled_revenue() {
        let orders = vec![
            order("ORD-1", "USR-101", OrderStatus::Delivered, 1000),
            order("ORD-2", "USR-102", OrderStatus::Cancelled, 9999),
            order("ORD-3", "USR-101", OrderStatus::Processing, 500),
        ];
        let stats = OrderStats::compute(&orders);
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.total_revenue, Rupees(1000 + 40 + 10 + 500 + 40 + 10));
        assert_eq!(stats.delivered_orders, 1);
        assert_eq!(stats.unique_customers, 2);
    }

    #[test]
    fn search_fields_include_item_names() {
        let o = order("ORD-2024-002", "USR-102", OrderStatus::Processing, 1299);
        let mut fields = Vec::new();
        o.collect_search_fields(&mut fields);
        assert_eq!(
            fields,
            vec![
                "ORD-2024-002",
                "USR-102",
                "Priya Patel",
                "Handcrafted Leather Wallet"
            ]
        );
    }

    #[test]
    fn rupees_display_uses_currency_sign() {
        assert_eq!(Rupees(2499).to_string(), "₹2499");
    }
}
