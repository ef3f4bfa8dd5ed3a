//! Deductions allocation.
//!
//! Fixed deductions convert directly to minor units; percent deductions take
//! a half-up-rounded share of gross. Because the line items must sum to
//! `gross - net` exactly, the rounding residual is absorbed by the first
//! percent-mode deduction (where the drift originates), or by the last
//! deduction when every line is fixed.

use crate::models::{DeductionComponent, DeductionLine, DeductionMode};

use super::rounding::{round_minor_share, to_minor_units};

/// Allocates the deduction components against the resolved gross.
///
/// `gross_minor` and `net_pay_minor` must be converted with the same
/// `use_decimals` mode; the returned lines sum to
/// `gross_minor - net_pay_minor` exactly.
pub fn allocate_deductions(
    gross_minor: i64,
    net_pay_minor: i64,
    deductions: &[DeductionComponent],
    use_decimals: bool,
) -> Vec<DeductionLine> {
    let target_total = gross_minor - net_pay_minor;

    let mut lines: Vec<DeductionLine> = deductions
        .iter()
        .map(|deduction| {
            let amount_minor = match deduction.mode {
                DeductionMode::Fixed => {
                    // Bounded by gross, which already fits in i64 minor units.
                    to_minor_units(deduction.value, use_decimals).unwrap_or(i64::MAX)
                }
                DeductionMode::Percent => {
                    round_minor_share(gross_minor, deduction.value, use_decimals)
                }
                // Unreachable after validation.
                DeductionMode::Unknown => 0,
            };
            DeductionLine {
                key: deduction.key.clone(),
                label: deduction.label.clone(),
                amount_minor,
            }
        })
        .collect();

    let allocated: i64 = lines.iter().map(|l| l.amount_minor).sum();
    let residual = target_total - allocated;

    if residual != 0 && !lines.is_empty() {
        let absorber = deductions
            .iter()
            .position(|d| d.mode == DeductionMode::Percent)
            .unwrap_or(lines.len() - 1);
        lines[absorber].amount_minor += residual;
    }

    lines
}
