//! Request types for the payslip engine API.
//!
//! This module defines the JSON request structure for the
//! `/payslip/generate` endpoint. The live-preview `/calculate` endpoint
//! takes a bare [`crate::models::PayrollConfig`] body.

use serde::{Deserialize, Serialize};

use crate::models::PayslipPayload;

/// Request body for the `/payslip/generate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The payslip payload to validate, calculate, and persist.
    pub payload: PayslipPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_generate_request() {
        let json = r#"{
            "payload": {
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
            }
        }"#;

        let request: GenerateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.payload.company.name, "Acme");
        assert_eq!(request.payload.employee.full_name, "Jane Doe");
        assert_eq!(request.payload.payroll.currency, "PKR");
    }

    #[test]
    fn test_missing_payload_is_rejected() {
        let result: Result<GenerateRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
