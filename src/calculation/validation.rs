//! Validation phase of the payroll calculation.
//!
//! Every check runs and every failure is reported, so a caller can surface
//! all problems in one pass instead of fixing them one at a time.

use rust_decimal::Decimal;

use crate::models::{DeductionMode, PayrollConfig, ValidationError, ValidationErrorKind};

/// Tolerance on the earnings percentage sum, to absorb floating-point entry
/// error in hand-typed percentages like 33.33/33.33/33.34.
pub fn percentage_sum_epsilon() -> Decimal {
    Decimal::new(1, 2)
}

/// Validates a payroll configuration, returning every failure found.
///
/// An empty result means the configuration may proceed to resolution.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::validate;
/// use payslip_engine::models::PayrollConfig;
///
/// let config: PayrollConfig = serde_json::from_str(r#"{
///     "payDate": "2026-01-31",
///     "currency": "PKR",
///     "netPay": 0,
///     "useDecimals": false,
///     "earnings": []
/// }"#).unwrap();
///
/// let errors = validate(&config);
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate(config: &PayrollConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.net_pay <= Decimal::ZERO {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidNetPay,
            "payroll.netPay",
            "net pay must be greater than zero",
        ));
    }

    let sum = config.earnings_percentage_sum();
    if (sum - Decimal::ONE_HUNDRED).abs() > percentage_sum_epsilon() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EarningsPercentageMismatch,
            "payroll.earnings",
            format!(
                "earning percentages must sum to 100% (currently {}%)",
                sum.normalize()
            ),
        ));
    }

    for (index, earning) in config.earnings.iter().enumerate() {
        if earning.percentage < Decimal::ZERO {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidEarningPercentage,
                format!("payroll.earnings[{index}].percentage"),
                format!(
                    "earning '{}' has a negative percentage ({})",
                    earning.label,
                    earning.percentage.normalize()
                ),
            ));
        }
    }

    for (index, deduction) in config.deductions.iter().enumerate() {
        if deduction.value < Decimal::ZERO {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDeductionValue,
                format!("payroll.deductions[{index}].value"),
                format!(
                    "deduction '{}' has a negative value ({})",
                    deduction.label,
                    deduction.value.normalize()
                ),
            ));
        }

        if deduction.mode == DeductionMode::Unknown {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDeductionMode,
                format!("payroll.deductions[{index}].mode"),
                format!(
                    "deduction '{}' has an unrecognized mode (expected \"fixed\" or \"percent\")",
                    deduction.label
                ),
            ));
        }
    }

    errors
}
