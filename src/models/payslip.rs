//! Payslip payload and persisted record models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Company, Employee, PayrollConfig, PayslipCalculated};

/// Everything the caller submits to generate a payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipPayload {
    /// The issuing company.
    pub company: Company,
    /// The employee the payslip is for.
    pub employee: Employee,
    /// The payroll configuration to resolve.
    pub payroll: PayrollConfig,
}

/// A persisted payslip: the accepted payload plus its resolved figures and
/// record metadata.
///
/// The payload fields are flattened so the stored document keeps the same
/// shape as the submitted one, with `calculated`, `createdAt`, and `id`
/// appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipRecord {
    /// The accepted payload, flattened into the record.
    #[serde(flatten)]
    pub payload: PayslipPayload,
    /// The resolved minor-unit figures.
    pub calculated: PayslipCalculated,
    /// When the record was persisted.
    pub created_at: DateTime<Utc>,
    /// Opaque record identifier.
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> PayslipPayload {
        let json = r#"{
            "company": {"name": "Acme"},
            "employee": {"fullName": "Jane Doe"},
            "payroll": {
                "payDate": "2026-01-31",
                "currency": "PKR",
                "netPay": 90000,
                "useDecimals": false,
                "earnings": [{"key": "basic", "label": "Basic Salary", "percentage": 100}],
                "deductions": []
            }
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_record_flattens_payload() {
        let record = PayslipRecord {
            payload: sample_payload(),
            calculated: PayslipCalculated {
                earnings: vec![],
                deductions: vec![],
                gross_pay_minor: 9_000_000,
                total_deductions_minor: 0,
                net_pay_minor: 9_000_000,
            },
            created_at: DateTime::parse_from_rfc3339("2026-01-31T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            id: Uuid::nil(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"company\":{"));
        assert!(json.contains("\"employee\":{"));
        assert!(json.contains("\"payroll\":{"));
        assert!(!json.contains("\"payload\""));
        assert!(json.contains("\"createdAt\":\"2026-01-31T10:00:00Z\""));
        assert!(json.contains("\"id\":\"00000000-0000-0000-0000-000000000000\""));
    }

    #[test]
    fn test_record_round_trip() {
        let record = PayslipRecord {
            payload: sample_payload(),
            calculated: PayslipCalculated {
                earnings: vec![],
                deductions: vec![],
                gross_pay_minor: 9_000_000,
                total_deductions_minor: 0,
                net_pay_minor: 9_000_000,
            },
            created_at: Utc::now(),
            id: Uuid::new_v4(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: PayslipRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
