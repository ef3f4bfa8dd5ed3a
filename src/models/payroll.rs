//! Payroll configuration model and related types.
//!
//! This module defines the declarative payroll input: the net pay target,
//! currency presentation options, and the ordered earning and deduction
//! components the calculator resolves into minor-unit line items.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Date presentation style used on the rendered payslip and in filenames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormatStyle {
    /// Ordinal day with short month and two-digit year, e.g. `1st-Jan-26`.
    #[default]
    OrdinalShort,
    /// Zero-padded day with short month and full year, e.g. `01-Jan-2026`.
    Alt,
}

/// How a deduction component's `value` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionMode {
    /// `value` is a fixed amount in major currency units.
    Fixed,
    /// `value` is a percentage of gross pay.
    Percent,
    /// An unrecognized mode string.
    ///
    /// Unknown modes survive deserialization so the validation phase can
    /// report them as an `invalid-deduction-mode` entry in the error list
    /// instead of rejecting the whole request at the serde boundary.
    Unknown,
}

impl<'de> Deserialize<'de> for DeductionMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "fixed" => DeductionMode::Fixed,
            "percent" => DeductionMode::Percent,
            _ => DeductionMode::Unknown,
        })
    }
}

/// A single earning component, expressed as a percentage of gross pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningComponent {
    /// Caller-owned identifier carried through to the output line.
    pub key: String,
    /// Display label, e.g. "Basic Salary".
    pub label: String,
    /// Percentage of gross pay allocated to this component.
    pub percentage: Decimal,
}

/// A single deduction component, either fixed or a percentage of gross.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionComponent {
    /// Caller-owned identifier carried through to the output line.
    pub key: String,
    /// Display label, e.g. "Income Tax".
    pub label: String,
    /// How `value` is interpreted.
    pub mode: DeductionMode,
    /// Fixed major-unit amount, or percentage of gross, per `mode`.
    pub value: Decimal,
}

/// The payroll configuration supplied by the caller.
///
/// Net pay is the authoritative input: the calculator back-solves gross pay
/// from it and the deduction rules, then allocates earnings against the
/// resolved gross.
///
/// # Example
///
/// ```
/// use payslip_engine::models::PayrollConfig;
///
/// let json = r#"{
///     "payDate": "2026-01-31",
///     "currency": "PKR",
///     "netPay": 90000,
///     "useDecimals": false,
///     "earnings": [{"key": "basic", "label": "Basic Salary", "percentage": 100}],
///     "deductions": [{"key": "tax", "label": "Income Tax", "mode": "fixed", "value": 10000}]
/// }"#;
/// let config: PayrollConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.currency, "PKR");
/// assert_eq!(config.earnings.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollConfig {
    /// The pay date shown on the payslip (never used by the calculator).
    pub pay_date: NaiveDate,
    /// Free-text currency label, display only.
    pub currency: String,
    /// The take-home amount in major currency units.
    pub net_pay: Decimal,
    /// When false, every computed amount is rounded to whole major units.
    pub use_decimals: bool,
    /// Date presentation style for the payslip and filename.
    #[serde(default)]
    pub date_format_style: DateFormatStyle,
    /// Ordered earning components; percentages must sum to 100.
    #[serde(default)]
    pub earnings: Vec<EarningComponent>,
    /// Ordered deduction components.
    #[serde(default)]
    pub deductions: Vec<DeductionComponent>,
}

impl PayrollConfig {
    /// Returns the sum of all earning percentages as entered.
    pub fn earnings_percentage_sum(&self) -> Decimal {
        self.earnings.iter().map(|e| e.percentage).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "payDate": "2026-01-31",
            "currency": "PKR",
            "netPay": 90000,
            "useDecimals": false,
            "dateFormatStyle": "ordinal-short",
            "earnings": [
                {"key": "basic", "label": "Basic Salary", "percentage": 60},
                {"key": "hra", "label": "House Rent Allowance", "percentage": 40}
            ],
            "deductions": [
                {"key": "tax", "label": "Income Tax", "mode": "fixed", "value": 10000},
                {"key": "pf", "label": "Provident Fund", "mode": "percent", "value": 5}
            ]
        }"#;

        let config: PayrollConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.pay_date, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
        assert_eq!(config.net_pay, dec("90000"));
        assert!(!config.use_decimals);
        assert_eq!(config.date_format_style, DateFormatStyle::OrdinalShort);
        assert_eq!(config.earnings[1].key, "hra");
        assert_eq!(config.deductions[0].mode, DeductionMode::Fixed);
        assert_eq!(config.deductions[1].mode, DeductionMode::Percent);
        assert_eq!(config.deductions[1].value, dec("5"));
    }

    #[test]
    fn test_date_format_style_defaults_to_ordinal_short() {
        let json = r#"{
            "payDate": "2026-01-31",
            "currency": "USD",
            "netPay": 1000,
            "useDecimals": true
        }"#;

        let config: PayrollConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.date_format_style, DateFormatStyle::OrdinalShort);
        assert!(config.earnings.is_empty());
        assert!(config.deductions.is_empty());
    }

    #[test]
    fn test_date_format_style_alt() {
        let style: DateFormatStyle = serde_json::from_str("\"alt\"").unwrap();
        assert_eq!(style, DateFormatStyle::Alt);
        assert_eq!(serde_json::to_string(&style).unwrap(), "\"alt\"");
    }

    #[test]
    fn test_unrecognized_deduction_mode_becomes_unknown() {
        let json = r#"{"key": "x", "label": "X", "mode": "weekly", "value": 1}"#;
        let deduction: DeductionComponent = serde_json::from_str(json).unwrap();
        assert_eq!(deduction.mode, DeductionMode::Unknown);
    }

    #[test]
    fn test_deduction_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&DeductionMode::Fixed).unwrap(),
            "\"fixed\""
        );
        assert_eq!(
            serde_json::to_string(&DeductionMode::Percent).unwrap(),
            "\"percent\""
        );
    }

    #[test]
    fn test_net_pay_accepts_decimal_string() {
        let json = r#"{
            "payDate": "2026-01-31",
            "currency": "EUR",
            "netPay": "1234.56",
            "useDecimals": true
        }"#;

        let config: PayrollConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.net_pay, dec("1234.56"));
    }

    #[test]
    fn test_earnings_percentage_sum() {
        let json = r#"{
            "payDate": "2026-01-31",
            "currency": "USD",
            "netPay": 100,
            "useDecimals": true,
            "earnings": [
                {"key": "a", "label": "A", "percentage": 33.34},
                {"key": "b", "label": "B", "percentage": 33.33},
                {"key": "c", "label": "C", "percentage": 33.33}
            ]
        }"#;

        let config: PayrollConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.earnings_percentage_sum(), dec("100.00"));
    }
}
