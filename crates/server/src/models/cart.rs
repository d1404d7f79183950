//! Shopping cart domain types.
//!
//! A cart exists only while it has items: it is created lazily on the first
//! add and deleted when its last item is removed. The empty cart is
//! represented by absence, never by a zero-item row.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use cartwright_core::{CartId, ProductId, UserId, format_usd, line_total};

/// A user's cart row.
#[derive(Debug, Clone, Copy, Serialize, FromRow)]
pub struct Cart {
    /// Unique cart ID.
    pub id: CartId,
    /// Owning user. At most one cart per user at any time.
    pub user_id: UserId,
}

/// One line within a cart.
///
/// At most one row exists per (`cart_id`, `product_id`) pair; repeat adds
/// increment `quantity` instead of inserting a second row.
#[derive(Debug, Clone, Copy, Serialize, FromRow)]
pub struct CartItem {
    /// Cart this line belongs to.
    pub cart_id: CartId,
    /// Product on this line.
    pub product_id: ProductId,
    /// Positive quantity.
    pub quantity: i32,
}

/// A cart together with its current lines.
#[derive(Debug, Clone, Serialize)]
pub struct CartSnapshot {
    /// Unique cart ID.
    pub id: CartId,
    /// Owning user.
    pub user_id: UserId,
    /// Current lines (never empty; an empty cart does not persist).
    pub items: Vec<CartItem>,
}

/// One priced line of a checkout computation.
#[derive(Debug, Clone, Serialize)]
pub struct LineItem {
    /// Product name at computation time.
    pub product_name: String,
    /// Quantity on the line.
    pub quantity: i32,
    /// Unit price at computation time.
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    /// quantity × `unit_price`, full precision.
    #[serde(with = "rust_decimal::serde::str")]
    pub line_total: Decimal,
}

/// The result of a checkout computation.
///
/// Checkout is a read-only query: no order is created and the cart is not
/// cleared.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSummary {
    /// Cart the total was computed for.
    pub cart_id: CartId,
    /// Priced line breakdown.
    pub items: Vec<LineItem>,
    /// Exact decimal sum of all line totals.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    /// `total_amount` formatted as currency, rounded once at this boundary.
    pub formatted_total: String,
}

impl CheckoutSummary {
    /// Build a summary from joined (product name, quantity, unit price) rows.
    ///
    /// Line totals and the grand total are computed at full decimal
    /// precision; the formatted total is the only rounded value.
    #[must_use]
    pub fn from_lines(cart_id: CartId, lines: Vec<(String, i32, Decimal)>) -> Self {
        let items: Vec<LineItem> = lines
            .into_iter()
            .map(|(product_name, quantity, unit_price)| LineItem {
                product_name,
                quantity,
                unit_price,
                line_total: line_total(quantity, unit_price),
            })
            .collect();

        let total_amount: Decimal = items.iter().map(|item| item.line_total).sum();

        Self {
            cart_id,
            items,
            total_amount,
            formatted_total: format_usd(total_amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_checkout_summary_exact_total() {
        let summary = CheckoutSummary::from_lines(
            CartId::new(1),
            vec![
                ("Widget".to_string(), 2, dec!(3.50)),
                ("Gadget".to_string(), 1, dec!(10.00)),
            ],
        );

        assert_eq!(summary.total_amount, dec!(17.00));
        assert_eq!(summary.formatted_total, "$17.00");
        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.items[0].line_total, dec!(7.00));
        assert_eq!(summary.items[1].line_total, dec!(10.00));
    }

    #[test]
    fn test_checkout_summary_no_truncation_before_sum() {
        // 3 x 0.45 + 1 x 0.65 = 2.00 exactly; a float or truncating
        // implementation would drift.
        let summary = CheckoutSummary::from_lines(
            CartId::new(2),
            vec![
                ("Bolt".to_string(), 3, dec!(0.45)),
                ("Nut".to_string(), 1, dec!(0.65)),
            ],
        );

        assert_eq!(summary.total_amount, dec!(2.00));
        assert_eq!(summary.formatted_total, "$2.00");
    }

    #[test]
    fn test_checkout_summary_rounds_only_when_formatting() {
        let summary = CheckoutSummary::from_lines(
            CartId::new(3),
            vec![("Fraction".to_string(), 3, dec!(3.335))],
        );

        // Full precision retained on the summary itself.
        assert_eq!(summary.total_amount, dec!(10.005));
        // Rounded once at the formatting boundary.
        assert_eq!(summary.formatted_total, "$10.01");
    }
}
