//! Gross pay resolution.
//!
//! The caller specifies net pay, not gross, and deductions may be a
//! percentage of gross. Fixed deductions are amount-independent and percent
//! deductions are linear in gross, so with `F` the sum of fixed amounts and
//! `P` the summed percent rates as a fraction:
//!
//! ```text
//! net = gross - (F + P * gross)   =>   gross = (net + F) / (1 - P)
//! ```
//!
//! The division happens in `Decimal` arithmetic before any minor-unit
//! rounding.

use rust_decimal::Decimal;

use crate::models::{DeductionMode, PayrollConfig, ValidationError, ValidationErrorKind};

fn out_of_range() -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::InvalidNetPay,
        "payroll.netPay",
        "computed amounts are outside the representable range",
    )
}

/// Back-solves gross pay in major units from the net target and deductions.
///
/// Fails with `deduction-percent-exceeds-gross` when the percent deductions
/// claim 100% or more of gross, and with `invalid-net-pay` when the checked
/// arithmetic cannot represent the result.
pub fn solve_gross(config: &PayrollConfig) -> Result<Decimal, ValidationError> {
    let mut fixed_total = Decimal::ZERO;
    let mut percent_total = Decimal::ZERO;

    for deduction in &config.deductions {
        match deduction.mode {
            DeductionMode::Fixed => {
                fixed_total = fixed_total
                    .checked_add(deduction.value)
                    .ok_or_else(out_of_range)?;
            }
            DeductionMode::Percent => {
                percent_total = percent_total
                    .checked_add(deduction.value)
                    .ok_or_else(out_of_range)?;
            }
            // Unreachable after validation; treated as fixed 0 contribution.
            DeductionMode::Unknown => {}
        }
    }

    let percent_fraction = percent_total / Decimal::ONE_HUNDRED;
    if percent_fraction >= Decimal::ONE {
        return Err(ValidationError::new(
            ValidationErrorKind::DeductionPercentExceedsGross,
            "payroll.deductions",
            format!(
                "percentage deductions total {}% of gross; they must stay below 100%",
                percent_total.normalize()
            ),
        ));
    }

    config
        .net_pay
        .checked_add(fixed_total)
        .and_then(|n| n.checked_div(Decimal::ONE - percent_fraction))
        .ok_or_else(out_of_range)
}
