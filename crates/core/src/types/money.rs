//! Exact money arithmetic and currency formatting.
//!
//! Prices are stored as `NUMERIC` in `PostgreSQL` and carried through as
//! [`rust_decimal::Decimal`]. Totals are summed at full precision; rounding
//! happens exactly once, at the currency-formatting boundary.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits in formatted currency output.
const CURRENCY_SCALE: u32 = 2;

/// Compute the line total for a cart line: quantity × unit price.
///
/// The result keeps full decimal precision; no rounding is applied.
#[must_use]
pub fn line_total(quantity: i32, unit_price: Decimal) -> Decimal {
    Decimal::from(quantity) * unit_price
}

/// Format a decimal amount as a US-dollar string, e.g. `"$17.00"`.
///
/// Rounds to 2 decimal places using midpoint-away-from-zero, the
/// conventional rule for currency display. This is the only place an amount
/// is rounded; callers must pass the full-precision value.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_line_total_exact() {
        assert_eq!(line_total(2, dec!(3.50)), dec!(7.00));
        assert_eq!(line_total(3, dec!(0.10)), dec!(0.30));
    }

    #[test]
    fn test_sum_preserves_precision() {
        // 2 x 3.50 + 1 x 10.00 = 17.00; no truncation at the integer
        // boundary before summation.
        let total = line_total(2, dec!(3.50)) + line_total(1, dec!(10.00));
        assert_eq!(total, dec!(17.00));
        assert_eq!(format_usd(total), "$17.00");
    }

    #[test]
    fn test_format_usd_pads_fraction() {
        assert_eq!(format_usd(dec!(5)), "$5.00");
        assert_eq!(format_usd(dec!(0.5)), "$0.50");
    }

    #[test]
    fn test_format_usd_rounds_once_at_boundary() {
        // Three lines of 0.333... style amounts only round in the final
        // formatted output, not per line.
        let total = line_total(3, dec!(3.335));
        assert_eq!(total, dec!(10.005));
        assert_eq!(format_usd(total), "$10.01");
    }

    #[test]
    fn test_format_usd_midpoint_away_from_zero() {
        assert_eq!(format_usd(dec!(2.345)), "$2.35");
        assert_eq!(format_usd(dec!(2.344)), "$2.34");
    }
}
