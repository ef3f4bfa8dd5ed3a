//! HTTP request handlers for the payslip engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate;
use crate::error::EngineError;
use crate::format::payslip_filename;
use crate::models::{PayslipPayload, PayrollConfig, ValidationError, ValidationErrorKind};

use super::request::GenerateRequest;
use super::response::{ApiError, ApiErrorResponse, ErrorsResponse, GenerateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/payslip/generate", post(generate_handler))
        .route("/payslip/:id", get(get_payslip_handler))
        .with_state(state)
}

fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for the POST /calculate endpoint.
///
/// Live-preview calculation: always returns the full result, errors
/// included, so a form UI can highlight every problem on each edit.
async fn calculate_handler(
    payload: Result<Json<PayrollConfig>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let config = match payload {
        Ok(Json(config)) => config,
        Err(rejection) => {
            let error = rejection_to_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let result = calculate(&config);
    info!(
        correlation_id = %correlation_id,
        valid = result.is_valid(),
        error_count = result.errors.len(),
        "Preview calculation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for the POST /payslip/generate endpoint.
///
/// Validates the payload and the payroll configuration, persists the
/// resolved record, and returns it along with the download filename.
async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing generate request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_to_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let payload = request.payload;
    let mut errors = validate_payload(&payload);
    let result = calculate(&payload.payroll);
    errors.extend(result.errors);

    let Some(calculated) = result.calculated.filter(|_| errors.is_empty()) else {
        warn!(
            correlation_id = %correlation_id,
            error_count = errors.len(),
            "Generate request rejected"
        );
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ErrorsResponse { errors }),
        )
            .into_response();
    };

    let filename = payslip_filename(
        &payload.employee.full_name,
        payload.payroll.pay_date,
        payload.payroll.date_format_style,
    );

    match state.store().save(payload, calculated) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                payslip_id = %record.id,
                gross_pay_minor = record.calculated.gross_pay_minor,
                net_pay_minor = record.calculated.net_pay_minor,
                "Payslip record persisted"
            );
            (
                StatusCode::OK,
                [
                    ("content-type", "application/json".to_string()),
                    ("x-payslip-id", record.id.to_string()),
                ],
                Json(GenerateResponse { filename, record }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Failed to persist payslip record"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the GET /payslip/{id} endpoint.
async fn get_payslip_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store().get(id) {
        Ok(Some(record)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(record),
        )
            .into_response(),
        Ok(None) => {
            warn!(payslip_id = %id, "Payslip record not found");
            ApiErrorResponse::from(EngineError::RecordNotFound { id }).into_response()
        }
        Err(err) => {
            warn!(payslip_id = %id, error = %err, "Failed to read payslip record");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Applies the payload-level gates: a payslip cannot be generated without a
/// company name and an employee name.
fn validate_payload(payload: &PayslipPayload) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if payload.company.name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingCompanyName,
            "company.name",
            "company name is required",
        ));
    }

    if payload.employee.full_name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingEmployeeName,
            "employee.fullName",
            "employee full name is required",
        ));
    }

    errors
}
