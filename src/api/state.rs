//! Application state for the payslip engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::PayslipStore;

/// Shared application state.
///
/// Carries the injected payslip store so handlers stay independent of the
/// concrete persistence backend.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn PayslipStore>,
}

impl AppState {
    /// Creates a new application state with the given store.
    pub fn new(store: impl PayslipStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the payslip store.
    pub fn store(&self) -> &dyn PayslipStore {
        self.store.as_ref()
    }
}
