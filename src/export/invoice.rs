//! Plain-text invoice rendering.
//!
//! Pure and deterministic: the same order always renders byte-identical
//! text, there is no I/O and no clock access. The embedding UI turns the
//! string into a download named `Invoice_{order id}.txt`.

use crate::model::{Order, Rupees, StatusValue};
use std::fmt;

const HEAVY_RULE: &str =
    "═══════════════════════════════════════════════════════════════";
const LIGHT_RULE: &str =
    "───────────────────────────────────────────────────────────────";

/// Width of the label column in the price breakdown block.
const AMOUNT_COLUMN: usize = 53;

/// Render an order as the fixed-layout invoice document.
///
/// The total line is printed from [`PriceBreakdown::total`], never from a
/// stored figure, so it cannot disagree with the components above it.
pub fn render_invoice(order: &Order) -> String {
    Invoice(order).to_string()
}

/// Display adapter so the layout composes with `?` instead of pushing
/// strings around.
struct Invoice<'a>(&'a Order);

impl fmt::Display for Invoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.0;

        writeln!(f, "{HEAVY_RULE}")?;
        writeln!(f, "                          INVOICE")?;
        writeln!(f, "{HEAVY_RULE}")?;
        writeln!(f)?;
        writeln!(f, "Order ID: {}", order.id)?;
        writeln!(f, "Order Date: {}", order.placed_at.format("%-d %B %Y"))?;
        if let Some(delivered) = order.delivery_date {
            writeln!(f, "Delivery Date: {}", delivered.format("%-d %B %Y"))?;
        }
        writeln!(f)?;
        writeln!(f, "Status: {}", order.status.label())?;
        writeln!(f, "Payment Method: {}", order.payment_method)?;
        if let Some(transaction_id) = order.transaction_id.as_deref() {
            writeln!(f, "Transaction ID: {transaction_id}")?;
        }
        writeln!(f)?;

        writeln!(f, "{LIGHT_RULE}")?;
        writeln!(f, "CUSTOMER")?;
        writeln!(f, "{LIGHT_RULE}")?;
        writeln!(f, "Name: {}", order.customer.name)?;
        writeln!(f, "User ID: {}", order.customer.user_id)?;
        writeln!(f, "Email: {}", order.customer.email)?;
        if let Some(phone) = order.customer.phone.as_deref() {
            writeln!(f, "Phone: {phone}")?;
        }
        writeln!(f)?;

        writeln!(f, "{LIGHT_RULE}")?;
        writeln!(f, "DELIVERY ADDRESS")?;
        writeln!(f, "{LIGHT_RULE}")?;
        writeln!(f, "{}", order.delivery_address)?;
        writeln!(f)?;

        writeln!(f, "{LIGHT_RULE}")?;
        writeln!(f, "ORDER ITEMS")?;
        writeln!(f, "{LIGHT_RULE}")?;
        for (index, item) in order.items.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, item.name)?;
            writeln!(f, "   Category: {}", item.category)?;
            writeln!(f, "   Price: {} × {}", item.unit_price, item.quantity)?;
            writeln!(f, "   Total: {}", item.line_total())?;
        }
        writeln!(f)?;

        writeln!(f, "{LIGHT_RULE}")?;
        writeln!(f, "PRICE BREAKDOWN")?;
        writeln!(f, "{LIGHT_RULE}")?;
        write_amount(f, "Subtotal:", order.pricing.subtotal)?;
        write_amount(f, "Delivery Charge:", order.pricing.delivery_charge)?;
        write_amount(f, "Tax:", order.pricing.tax)?;
        if order.pricing.discount > Rupees::ZERO {
            writeln!(
                f,
                "{:<width$}-{}",
                "Discount:",
                order.pricing.discount,
                width = AMOUNT_COLUMN
            )?;
        }
        writeln!(f)?;

        writeln!(f, "{HEAVY_RULE}")?;
        write_amount(f, "TOTAL AMOUNT:", order.pricing.total())?;
        writeln!(f, "{HEAVY_RULE}")?;
        writeln!(f)?;
        writeln!(f, "Thank you for your order!")
    }
}

fn write_amount(f: &mut fmt::Formatter<'_>, label: &str, amount: Rupees) -> fmt::Result {
    writeln!(f, "{label:<AMOUNT_COLUMN$}{amount}")
}

/// Suggested download filename for an order's invoice.
pub fn invoice_file_name(order: &Order) -> String {
    format!("Invoice_{}.txt", order.id)
}
