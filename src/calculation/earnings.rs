//! Earnings allocation.
//!
//! Each earning receives a half-up-rounded share of gross pay; the last
//! earning in declaration order absorbs the rounding residual so the line
//! items always sum to gross exactly. The residual policy is deliberate:
//! all rounding noise lands on one designated line instead of being lost.

use crate::models::{EarningComponent, EarningLine};

use super::rounding::round_minor_share;

/// Allocates gross pay across the earning components.
///
/// `gross_minor` must already be converted with the same `use_decimals`
/// mode; the returned lines sum to it exactly.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::allocate_earnings;
/// use payslip_engine::models::EarningComponent;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let earnings = vec![
///     EarningComponent {
///         key: "basic".to_string(),
///         label: "Basic Salary".to_string(),
///         percentage: Decimal::from_str("100").unwrap(),
///     },
/// ];
/// let lines = allocate_earnings(10_000_000, &earnings, false);
/// assert_eq!(lines[0].amount_minor, 10_000_000);
/// ```
pub fn allocate_earnings(
    gross_minor: i64,
    earnings: &[EarningComponent],
    use_decimals: bool,
) -> Vec<EarningLine> {
    let mut lines = Vec::with_capacity(earnings.len());
    let mut allocated: i64 = 0;

    for (index, earning) in earnings.iter().enumerate() {
        let amount_minor = if index + 1 == earnings.len() {
            gross_minor - allocated
        } else {
            round_minor_share(gross_minor, earning.percentage, use_decimals)
        };
        allocated += amount_minor;

        lines.push(EarningLine {
            key: earning.key.clone(),
            label: earning.label.clone(),
            amount_minor,
        });
    }

    lines
}
