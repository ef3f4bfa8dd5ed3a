//! The payroll calculation engine.
//!
//! This module turns a declarative payroll configuration into a consistent
//! set of integer minor-unit line items: validation of the configuration,
//! back-solving gross pay from the net target, half-up minor-unit
//! conversion, and residual-absorbing allocation of earnings and
//! deductions.

mod deductions;
mod earnings;
mod gross;
mod rounding;
mod validation;

pub use deductions::allocate_deductions;
pub use earnings::allocate_earnings;
pub use gross::solve_gross;
pub use rounding::to_minor_units;
pub use validation::{percentage_sum_epsilon, validate};

use crate::models::{
    CalculationResult, PayrollConfig, PayslipCalculated, ValidationError, ValidationErrorKind,
};

fn out_of_range() -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::InvalidNetPay,
        "payroll.netPay",
        "computed amounts are outside the representable range",
    )
}

/// Calculates a payslip from a payroll configuration.
///
/// Pure and stateless: identical inputs produce identical results, and all
/// failure is communicated through the returned error list. On success the
/// result satisfies the reconciliation invariants exactly:
/// `net == gross - deductions`, earnings sum to gross, and deductions sum
/// to the deduction total.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate;
/// use payslip_engine::models::PayrollConfig;
///
/// let config: PayrollConfig = serde_json::from_str(r#"{
///     "payDate": "2026-01-31",
///     "currency": "PKR",
///     "netPay": 90000,
///     "useDecimals": false,
///     "earnings": [{"key": "basic", "label": "Basic Salary", "percentage": 100}],
///     "deductions": [{"key": "tax", "label": "Income Tax", "mode": "fixed", "value": 10000}]
/// }"#).unwrap();
///
/// let result = calculate(&config);
/// let calculated = result.calculated.unwrap();
/// assert_eq!(calculated.gross_pay_minor, 10_000_000);
/// assert_eq!(calculated.net_pay_minor, 9_000_000);
/// assert_eq!(calculated.total_deductions_minor, 1_000_000);
/// ```
pub fn calculate(config: &PayrollConfig) -> CalculationResult {
    let errors = validate(config);
    if !errors.is_empty() {
        return CalculationResult::failure(errors);
    }

    let gross = match solve_gross(config) {
        Ok(gross) => gross,
        Err(error) => return CalculationResult::failure(vec![error]),
    };

    let (Some(net_pay_minor), Some(gross_pay_minor)) = (
        to_minor_units(config.net_pay, config.use_decimals),
        to_minor_units(gross, config.use_decimals),
    ) else {
        return CalculationResult::failure(vec![out_of_range()]);
    };

    let earnings = allocate_earnings(gross_pay_minor, &config.earnings, config.use_decimals);
    let deductions = allocate_deductions(
        gross_pay_minor,
        net_pay_minor,
        &config.deductions,
        config.use_decimals,
    );
    let total_deductions_minor: i64 = deductions.iter().map(|d| d.amount_minor).sum();

    CalculationResult::success(PayslipCalculated {
        earnings,
        deductions,
        gross_pay_minor,
        total_deductions_minor,
        net_pay_minor,
    })
}
