//! Minor-unit conversion and rounding policy.
//!
//! All rounding in the engine is half-up (midpoint away from zero) so that
//! identical inputs always produce identical line items. When decimals are
//! disabled, amounts are rounded to whole major units *before* the minor
//! conversion, so every produced amount is a multiple of 100 minor units.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts a major-unit amount to integer minor units.
///
/// With `use_decimals` the amount is scaled by 100 and rounded half-up to a
/// whole minor unit; without it the amount is rounded half-up to a whole
/// major unit first, so no sub-unit remainder can appear.
///
/// Returns `None` when the amount cannot be represented as `i64` minor
/// units.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::to_minor_units;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("100.555").unwrap();
/// assert_eq!(to_minor_units(amount, true), Some(10056));
/// assert_eq!(to_minor_units(amount, false), Some(10100));
/// ```
pub fn to_minor_units(amount: Decimal, use_decimals: bool) -> Option<i64> {
    let minor = if use_decimals {
        amount
            .checked_mul(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    } else {
        amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)?
    };
    minor.to_i64()
}

/// Rounds `percentage` percent of an already-converted minor-unit total.
///
/// The share keeps the quantum of the conversion mode: whole minor units
/// when decimals are enabled, multiples of 100 otherwise. `total_minor` has
/// already passed [`to_minor_units`], and percentages are bounded by
/// validation, so the conversion back to `i64` always succeeds; the result
/// saturates rather than panicking if it ever did not.
pub(crate) fn round_minor_share(total_minor: i64, percentage: Decimal, use_decimals: bool) -> i64 {
    let share = Decimal::from(total_minor) * percentage / Decimal::ONE_HUNDRED;
    let rounded = if use_decimals {
        share.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    } else {
        (share / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            * Decimal::ONE_HUNDRED
    };
    rounded.to_i64().unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_decimal_mode_scales_then_rounds() {
        assert_eq!(to_minor_units(dec("50000"), true), Some(5_000_000));
        assert_eq!(to_minor_units(dec("100.555"), true), Some(10056));
        assert_eq!(to_minor_units(dec("0.005"), true), Some(1));
    }

    #[test]
    fn test_whole_unit_mode_rounds_major_first() {
        assert_eq!(to_minor_units(dec("100.555"), false), Some(10100));
        assert_eq!(to_minor_units(dec("100.49"), false), Some(10000));
        assert_eq!(to_minor_units(dec("100.5"), false), Some(10100));
    }

    #[test]
    fn test_half_up_at_midpoint() {
        assert_eq!(to_minor_units(dec("0.125"), true), Some(13));
        assert_eq!(to_minor_units(dec("2.5"), false), Some(300));
    }

    #[test]
    fn test_out_of_range_returns_none() {
        let huge = Decimal::MAX;
        assert_eq!(to_minor_units(huge, true), None);
    }

    #[test]
    fn test_share_rounding_decimal_mode() {
        // 33.34% of 10000 minor = 3334.0
        assert_eq!(round_minor_share(10_000, dec("33.34"), true), 3334);
        // 33.33% of 10000 minor = 3333.0
        assert_eq!(round_minor_share(10_000, dec("33.33"), true), 3333);
        // 12.5% of 1001 minor = 125.125 -> 125
        assert_eq!(round_minor_share(1001, dec("12.5"), true), 125);
    }

    #[test]
    fn test_share_rounding_whole_unit_mode_keeps_quantum() {
        // 33.33% of 1000000 minor = 333300 minor = 3333 major
        assert_eq!(round_minor_share(1_000_000, dec("33.33"), false), 333_300);
        // 5% of 10150 minor = 507.5 minor -> 5.075 major -> 5 major
        assert_eq!(round_minor_share(10_150, dec("5"), false), 500);
        assert_eq!(round_minor_share(10_150, dec("5"), false) % 100, 0);
    }

    #[test]
    fn test_zero_percentage_share_is_zero() {
        assert_eq!(round_minor_share(10_000, Decimal::ZERO, true), 0);
        assert_eq!(round_minor_share(10_000, Decimal::ZERO, false), 0);
    }
}
