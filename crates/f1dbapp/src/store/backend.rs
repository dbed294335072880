use crate::error::Result;
use crate::schema::DatasetKey;
use std::path::PathBuf;

/// Abstract interface for raw dataset I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (parsing, validation, coercion).
pub trait StorageBackend {
    /// Read the raw JSON document of a dataset.
    /// Returns Ok(None) if the dataset has never been written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_dataset(&self, key: DatasetKey) -> Result<Option<String>>;

    /// Replace the whole document of a dataset.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_dataset(&self, key: DatasetKey, contents: &str) -> Result<()>;

    /// Location of the dataset document.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn dataset_path(&self, key: DatasetKey) -> PathBuf;
}
