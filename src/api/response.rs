//! Response types for the payslip engine API.
//!
//! This module defines the success and error response structures and the
//! mapping from infrastructure errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{PayslipRecord, ValidationError};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a record not found error response.
    pub fn record_not_found(id: Uuid) -> Self {
        Self::with_details(
            "RECORD_NOT_FOUND",
            format!("Payslip record not found: {}", id),
            "No payslip has been generated with this identifier",
        )
    }
}

/// Error body returned by `/payslip/generate` when the payload or the
/// payroll configuration is rejected: every failure, reported together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorsResponse {
    /// All validation failures found in the request.
    pub errors: Vec<ValidationError>,
}

/// Success body returned by `/payslip/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Suggested download filename for the rendered document.
    pub filename: String,
    /// The persisted payslip record.
    pub record: PayslipRecord,
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::StoreIo { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Payslip store failure",
                    format!("I/O failure at {}: {}", path, message),
                ),
            },
            EngineError::StoreParse { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Payslip store failure",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RecordNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::record_not_found(id),
            },
        }
    }
}
