//! Currency rounding helper.
//!
//! All monetary sub-results are rounded to two decimal places immediately
//! after they are computed, before being combined into the net pay.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to two decimal places.
///
/// Midpoints round away from zero, matching standard currency rounding:
/// 0.005 becomes 0.01 and -0.005 becomes -0.01.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("3076.9230769").unwrap();
/// assert_eq!(round_currency(amount), Decimal::from_str("3076.92").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round_currency(dec("646.1538")), dec("646.15"));
    }

    #[test]
    fn test_rounds_up_above_midpoint() {
        assert_eq!(round_currency(dec("461.538461")), dec("461.54"));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_currency(dec("2.005")), dec("2.01"));
        assert_eq!(round_currency(dec("-2.005")), dec("-2.01"));
    }

    #[test]
    fn test_already_rounded_amount_is_unchanged() {
        assert_eq!(round_currency(dec("1000.00")), dec("1000.00"));
    }

    #[test]
    fn test_zero_is_unchanged() {
        assert_eq!(round_currency(Decimal::ZERO), Decimal::ZERO);
    }
}
