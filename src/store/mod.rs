//! Persistence for accepted payslip records.
//!
//! Storage is an injected interface rather than a process-wide singleton,
//! so the calculator and the store stay independently testable.

mod json_file;

pub use json_file::JsonFileStore;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{PayslipCalculated, PayslipPayload, PayslipRecord};

/// Storage interface for payslip records, keyed by an opaque identifier.
pub trait PayslipStore: Send + Sync {
    /// Persists an accepted payload with its resolved figures and returns
    /// the stored record (including its assigned id and timestamp).
    fn save(
        &self,
        payload: PayslipPayload,
        calculated: PayslipCalculated,
    ) -> EngineResult<PayslipRecord>;

    /// Fetches a previously stored record, or `None` if the id is unknown.
    fn get(&self, id: Uuid) -> EngineResult<Option<PayslipRecord>>;
}
