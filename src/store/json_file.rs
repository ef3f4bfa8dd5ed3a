//! JSON document file store.
//!
//! Records live in a single pretty-printed JSON document,
//! `{"payslips": [...]}`. The parent directory and the file are created on
//! first use, and the read-modify-write cycle is serialized behind a lock
//! so concurrent saves cannot interleave.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayslipCalculated, PayslipPayload, PayslipRecord};

use super::PayslipStore;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    payslips: Vec<PayslipRecord>,
}

/// File-backed [`PayslipStore`] keeping all records in one JSON document.
///
/// # Example
///
/// ```no_run
/// use payslip_engine::store::JsonFileStore;
///
/// let store = JsonFileStore::new("./data/payslips.json");
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store backed by the given document path. Nothing is
    /// touched on disk until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: std::io::Error) -> EngineError {
        EngineError::StoreIo {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }

    fn read_document(&self) -> EngineResult<StoreDocument> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&raw).map_err(|e| EngineError::StoreParse {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn write_document(&self, document: &StoreDocument) -> EngineResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let raw = serde_json::to_string_pretty(document).map_err(|e| EngineError::StoreParse {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        fs::write(&self.path, raw).map_err(|e| self.io_error(e))
    }
}

impl PayslipStore for JsonFileStore {
    fn save(
        &self,
        payload: PayslipPayload,
        calculated: PayslipCalculated,
    ) -> EngineResult<PayslipRecord> {
        let record = PayslipRecord {
            payload,
            calculated,
            created_at: Utc::now(),
            id: Uuid::new_v4(),
        };

        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut document = self.read_document()?;
        document.payslips.push(record.clone());
        self.write_document(&document)?;

        Ok(record)
    }

    fn get(&self, id: Uuid) -> EngineResult<Option<PayslipRecord>> {
        let document = self.read_document()?;
        Ok(document.payslips.into_iter().find(|p| p.id == id))
    }
}
