//! HTTP API module for the payslip engine.
//!
//! This module provides the REST endpoints for live-preview calculation,
//! payslip generation, and record retrieval.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::GenerateRequest;
pub use response::{ApiError, ErrorsResponse, GenerateResponse};
pub use state::AppState;
