//! Calculation result models for the payslip engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures: resolved minor-unit line items, the reconciled totals, and
//! the validation error entries reported for rejected configurations.

use serde::{Deserialize, Serialize};

/// Identifies the class of a validation failure.
///
/// # Example
///
/// ```
/// use payslip_engine::models::ValidationErrorKind;
///
/// let json = serde_json::to_string(&ValidationErrorKind::InvalidNetPay).unwrap();
/// assert_eq!(json, "\"invalid-net-pay\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationErrorKind {
    /// Net pay is missing, non-positive, or outside the representable range.
    InvalidNetPay,
    /// Earning percentages do not sum to 100 (or no earnings were supplied).
    EarningsPercentageMismatch,
    /// An individual earning percentage is negative.
    InvalidEarningPercentage,
    /// An individual deduction value is negative.
    InvalidDeductionValue,
    /// A deduction mode string was not recognized.
    InvalidDeductionMode,
    /// Percentage deductions claim 100% or more of gross pay.
    DeductionPercentExceedsGross,
    /// The company name is empty in a generate request.
    MissingCompanyName,
    /// The employee full name is empty in a generate request.
    MissingEmployeeName,
}

/// A single validation failure tied to one input field.
///
/// All simultaneous failures are reported together so a UI can highlight
/// every problem at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The class of failure.
    pub kind: ValidationErrorKind,
    /// Path of the offending input, e.g. `payroll.deductions[2].value`.
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(
        kind: ValidationErrorKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A resolved earning line item in integer minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningLine {
    /// The component key from the configuration.
    pub key: String,
    /// The component display label.
    pub label: String,
    /// The allocated amount in integer minor units.
    pub amount_minor: i64,
}

/// A resolved deduction line item in integer minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionLine {
    /// The component key from the configuration.
    pub key: String,
    /// The component display label.
    pub label: String,
    /// The deducted amount in integer minor units.
    pub amount_minor: i64,
}

/// The fully resolved payslip figures.
///
/// Every successful calculation satisfies, by construction:
/// `net_pay_minor == gross_pay_minor - total_deductions_minor`, the earning
/// amounts sum to `gross_pay_minor`, and the deduction amounts sum to
/// `total_deductions_minor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipCalculated {
    /// Resolved earning line items, in declaration order.
    pub earnings: Vec<EarningLine>,
    /// Resolved deduction line items, in declaration order.
    pub deductions: Vec<DeductionLine>,
    /// Gross pay in integer minor units.
    pub gross_pay_minor: i64,
    /// Total deductions in integer minor units.
    pub total_deductions_minor: i64,
    /// Net pay in integer minor units, fixed from the caller's input.
    pub net_pay_minor: i64,
}

/// The outcome of a payroll calculation: either resolved figures or a
/// complete list of validation failures, never both.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{CalculationResult, ValidationError, ValidationErrorKind};
///
/// let result = CalculationResult::failure(vec![ValidationError::new(
///     ValidationErrorKind::InvalidNetPay,
///     "payroll.netPay",
///     "net pay must be greater than zero",
/// )]);
/// assert!(!result.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The resolved figures, or `None` when any validation failed.
    pub calculated: Option<PayslipCalculated>,
    /// Every validation failure found; empty on success.
    pub errors: Vec<ValidationError>,
}

impl CalculationResult {
    /// Wraps resolved figures in a successful result.
    pub fn success(calculated: PayslipCalculated) -> Self {
        Self {
            calculated: Some(calculated),
            errors: Vec::new(),
        }
    }

    /// Wraps a non-empty error list in a failed result.
    pub fn failure(errors: Vec<ValidationError>) -> Self {
        Self {
            calculated: None,
            errors,
        }
    }

    /// Returns true if the calculation produced resolved figures.
    pub fn is_valid(&self) -> bool {
        self.calculated.is_some() && self.errors.is_empty()
    }
}
