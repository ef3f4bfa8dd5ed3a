//! Error types for the payslip engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the persistence and API layers. Calculation failures are never
//! represented here; the calculator reports them as a value-level error
//! list (see [`crate::models::ValidationError`]).

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the payslip engine's fallible infrastructure.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::StoreIo {
///     path: "/data/payslips.json".to_string(),
///     message: "permission denied".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Payslip store I/O failure at '/data/payslips.json': permission denied"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The payslip store could not be read or written.
    #[error("Payslip store I/O failure at '{path}': {message}")]
    StoreIo {
        /// The path of the store file involved.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// The payslip store file exists but could not be parsed.
    #[error("Failed to parse payslip store '{path}': {message}")]
    StoreParse {
        /// The path of the store file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No payslip record exists for the requested identifier.
    #[error("Payslip record not found: {id}")]
    RecordNotFound {
        /// The identifier that was not found.
        id: Uuid,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
