use super::StorageBackend;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the phone book is
/// single-threaded, which lets `save` keep the `&self` signature.
#[derive(Default)]
pub struct MemBackend {
    snapshot: RefCell<Option<Vec<Record>>>,
    saves: Cell<usize>,
    simulate_load_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that starts out holding `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let backend = Self::new();
        *backend.snapshot.borrow_mut() = Some(records);
        backend
    }

    /// Enable load error simulation, as if the data were corrupt.
    pub fn set_simulate_load_error(&self, simulate: bool) {
        self.simulate_load_error.set(simulate);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Last saved snapshot, `None` if nothing was ever stored.
    pub fn snapshot(&self) -> Option<Vec<Record>> {
        self.snapshot.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Vec<Record>> {
        if self.simulate_load_error.get() {
            return Err(PhonebookError::Store("Simulated load error".to_string()));
        }
        Ok(self.snapshot.borrow().clone().unwrap_or_default())
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(PhonebookError::Store("Simulated write error".to_string()));
        }
        *self.snapshot.borrow_mut() = Some(records.to_vec());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
