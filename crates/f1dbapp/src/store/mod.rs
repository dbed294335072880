//! # Storage Layer
//!
//! This module defines the storage abstraction for f1db. The [`DataStore`] trait
//! is the record store contract the command layer works against;
//! [`RecordStore`] implements it on top of any [`backend::StorageBackend`].
//!
//! ## Whole-File Cycles
//!
//! Every dataset is one JSON document. Every operation is a full cycle:
//!
//! 1. **Load**: read and parse the whole document (absent file = empty dataset).
//! 2. **Mutate**: append, replace, delete or duplicate in memory.
//! 3. **Save**: rewrite the whole document. Incoming records are normalized
//!    against the schema first; records loaded from the file are written back
//!    as read.
//!
//! There are no partial writes and no incremental updates. Writes go through a
//! temporary file and a rename, so a crash never leaves a truncated document.
//!
//! ## Known Gap: Concurrent Writers
//!
//! Cycles are not locked against each other. Two processes editing the same
//! dataset race, and the later save wins. The editor assumes a single user.
//!
//! ## Failure Semantics
//!
//! When a save fails, the caller's in-memory view is not rolled back; it may now
//! differ from the disk. Reloading is always safe.
//!
//! ## Document Format
//!
//! ```text
//! data/
//! ├── f1db-drivers.json              # [ {...}, {...} ]
//! ├── f1db-constructors.json
//! └── f1db-races-race-results.json
//! ```
//!
//! Documents are UTF-8, pretty printed with 2-space indentation, with non-ASCII
//! text written as is. The top level is always an array of objects.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production backend, one file per dataset.
//! - [`mem_backend::MemBackend`]: For testing logic without filesystem I/O.

use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

use crate::error::{F1dbError, Result};
use crate::model::Record;
use crate::schema::DatasetKey;
use crate::validation::MissingFields;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
mod record_store;

pub use record_store::{CopySuffixes, RecordStore};

/// A bulk-import element that failed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    /// Position of the element in the submitted payload
    pub index: usize,
    pub missing: MissingFields,
}

/// Outcome of a bulk import. Partial success is a normal outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkReport {
    /// Records appended, as stored (after coercion), in payload order
    pub accepted: Vec<Record>,
    /// Dataset index of the first accepted record
    pub first_index: usize,
    pub rejected: Vec<Rejection>,
}

impl BulkReport {
    pub fn is_partial(&self) -> bool {
        !self.accepted.is_empty() && !self.rejected.is_empty()
    }

    /// Treat any rejection as a failure of the import as a whole.
    ///
    /// Accepted records stay saved either way.
    pub fn into_strict(self) -> Result<Self> {
        if self.rejected.is_empty() {
            Ok(self)
        } else {
            Err(F1dbError::PartialBulkFailure {
                accepted: self.accepted.len(),
                rejected: self.rejected,
            })
        }
    }
}

/// Abstract interface for record storage.
///
/// All mutating operations are complete load/mutate/save cycles.
pub trait DataStore {
    /// Load a dataset. A dataset that was never written is empty.
    fn load(&self, key: DatasetKey) -> Result<Vec<Record>>;

    /// Persist a whole dataset as given.
    fn save(&mut self, key: DatasetKey, records: &[Record]) -> Result<()>;

    /// Validate, coerce and append a record. Returns the record as stored.
    fn append(&mut self, key: DatasetKey, record: Record) -> Result<Record>;

    /// Validate each record independently and append the valid ones.
    fn bulk_append(&mut self, key: DatasetKey, records: Vec<Record>) -> Result<BulkReport>;

    /// Validate and overwrite the record at `index`. Returns the record as stored.
    fn replace(&mut self, key: DatasetKey, index: usize, record: Record) -> Result<Record>;

    /// Remove and return the record at `index`.
    fn delete(&mut self, key: DatasetKey, index: usize) -> Result<Record>;

    /// Append a copy of the record at `index` with its `id`/`name` annotated.
    fn duplicate(&mut self, key: DatasetKey, index: usize) -> Result<Record>;

    /// Overwrite the whole dataset without validation.
    fn replace_all(&mut self, key: DatasetKey, records: Vec<Record>) -> Result<()>;

    /// The dataset document exactly as it is written to disk.
    fn serialize_whole(&self, key: DatasetKey) -> Result<Vec<u8>>;

    /// Where the dataset lives.
    fn dataset_path(&self, key: DatasetKey) -> PathBuf;
}

/// Parse an external payload: a single JSON object or an array of objects.
pub fn parse_payload(raw: &str) -> Result<Vec<Record>> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| F1dbError::MalformedPayload(e.to_string()))?;

    let elements = match value {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        _ => {
            return Err(F1dbError::MalformedPayload(
                "expected a JSON object or an array of objects".to_string(),
            ))
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(i, element)| {
            if !element.is_object() {
                return Err(F1dbError::MalformedPayload(format!(
                    "element {} is not a JSON object",
                    i
                )));
            }
            serde_json::from_value(element)
                .map_err(|e| F1dbError::MalformedPayload(format!("element {}: {}", i, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_single_object_becomes_one_record() {
        let records = parse_payload(r#"{"id": "a"}"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text("id"), Some("a"));
    }

    #[test]
    fn payload_array_keeps_order() {
        let records = parse_payload(r#"[{"id": "a"}, {"id": "b"}]"#).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.text("id").unwrap()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn payload_empty_array_is_fine() {
        assert!(parse_payload("[]").unwrap().is_empty());
    }

    #[test]
    fn payload_rejects_scalars_and_invalid_json() {
        assert!(matches!(
            parse_payload("42"),
            Err(F1dbError::MalformedPayload(_))
        ));
        assert!(matches!(
            parse_payload("[{\"id\": 1}, 2]"),
            Err(F1dbError::MalformedPayload(_))
        ));
        assert!(matches!(
            parse_payload("{not json"),
            Err(F1dbError::MalformedPayload(_))
        ));
    }

    #[test]
    fn strict_report_fails_on_rejections() {
        let report = BulkReport {
            accepted: vec![Record::new()],
            first_index: 0,
            rejected: vec![Rejection {
                index: 1,
                missing: MissingFields::default(),
            }],
        };
        assert!(report.is_partial());
        match report.into_strict() {
            Err(F1dbError::PartialBulkFailure { accepted, rejected }) => {
                assert_eq!(accepted, 1);
                assert_eq!(rejected[0].index, 1);
            }
            other => panic!("Expected PartialBulkFailure, got {:?}", other),
        }
    }
}
