use std::path::PathBuf;
use thiserror::Error;

use crate::store::Rejection;

#[derive(Error, Debug)]
pub enum F1dbError {
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Unknown dataset name: {0} (expected one of: Drivers, Constructors, Race Results)")]
    UnknownDisplayName(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Malformed store {}: {reason}", path.display())]
    MalformedStore { path: PathBuf, reason: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Missing required fields: {}", missing.join(", "))]
    Validation { missing: Vec<String> },

    #[error("Index {index} out of range (dataset has {len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Bulk import partially failed: {accepted} accepted, {} rejected", rejected.len())]
    PartialBulkFailure {
        accepted: usize,
        rejected: Vec<Rejection>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, F1dbError>;
