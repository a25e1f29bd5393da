use super::backend::StorageBackend;
use crate::error::{Result, TrackerError};
use crate::model::Record;
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since tracker is single-threaded,
/// which lets `StorageBackend` keep `&self` on every method.
#[derive(Default)]
pub struct MemBackend {
    records: RefCell<Vec<Record>>,
    last_id: RefCell<u64>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with records exactly as given, ids included.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RefCell::new(records),
            last_id: RefCell::new(0),
            simulate_write_error: RefCell::new(false),
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.borrow().clone())
    }

    fn save_records(&self, records: &[Record]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(TrackerError::Store("Simulated write error".to_string()));
        }
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }

    fn load_last_id(&self) -> Result<u64> {
        Ok(*self.last_id.borrow())
    }

    fn save_last_id(&self, last_id: u64) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(TrackerError::Store("Simulated write error".to_string()));
        }
        *self.last_id.borrow_mut() = last_id;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://data.json")
    }
}
