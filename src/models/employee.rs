//! Employee model for payslip details.

use serde::{Deserialize, Serialize};

/// The employee the payslip is issued to.
///
/// Only the full name and address are required; the remaining identity and
/// banking fields are rendered when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Full name as printed on the payslip.
    pub full_name: String,
    /// Address, one entry per printed line.
    #[serde(default)]
    pub address_lines: Vec<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Bank name for the salary transfer line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// Bank account number or IBAN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    /// Internal employee identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Job title or designation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// National identity number (e.g. CNIC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
}
