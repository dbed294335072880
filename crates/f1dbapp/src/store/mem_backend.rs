use super::backend::StorageBackend;
use crate::error::{F1dbError, Result};
use crate::schema::DatasetKey;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since f1db is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    documents: RefCell<HashMap<DatasetKey, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to place an arbitrary document, bypassing the store.
    pub fn put_raw(&self, key: DatasetKey, contents: &str) {
        self.documents
            .borrow_mut()
            .insert(key, contents.to_string());
    }

    /// Test helper to inspect the document as it would be on disk.
    pub fn raw(&self, key: DatasetKey) -> Option<String> {
        self.documents.borrow().get(&key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read_dataset(&self, key: DatasetKey) -> Result<Option<String>> {
        Ok(self.documents.borrow().get(&key).cloned())
    }

    fn write_dataset(&self, key: DatasetKey, contents: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(F1dbError::Store("Simulated write error".to_string()));
        }
        self.documents
            .borrow_mut()
            .insert(key, contents.to_string());
        Ok(())
    }

    fn dataset_path(&self, key: DatasetKey) -> PathBuf {
        PathBuf::from(format!("memory://{}", key.file_name()))
    }
}
