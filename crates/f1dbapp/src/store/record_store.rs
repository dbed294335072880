use super::backend::StorageBackend;
use super::{BulkReport, DataStore, Rejection};
use crate::coerce::normalize_record;
use crate::error::{F1dbError, Result};
use crate::model::Record;
use crate::schema::DatasetKey;
use crate::validation::validate;
use crate::value::Scalar;
use std::path::PathBuf;

/// Suffixes appended to the `id` and `name` of a duplicated record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySuffixes {
    pub id: String,
    pub name: String,
}

impl Default for CopySuffixes {
    fn default() -> Self {
        Self {
            id: "-copy".to_string(),
            name: " (copy)".to_string(),
        }
    }
}

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    copy_suffixes: CopySuffixes,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            copy_suffixes: CopySuffixes::default(),
        }
    }

    pub fn with_copy_suffixes(mut self, suffixes: CopySuffixes) -> Self {
        self.copy_suffixes = suffixes;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(F1dbError::IndexOutOfRange { index, len })
        }
    }

    fn validated(key: DatasetKey, record: &Record) -> Result<Record> {
        let schema = key.schema();
        let missing = validate(schema, record);
        if !missing.is_empty() {
            return Err(F1dbError::Validation {
                missing: missing.into_vec(),
            });
        }
        Ok(normalize_record(schema, record))
    }

    /// Records are written exactly as held. Coercion happens where a record
    /// enters the store, so records loaded from disk and left alone keep their
    /// bytes.
    fn render(records: &[Record]) -> Result<String> {
        serde_json::to_string_pretty(records).map_err(F1dbError::Serialization)
    }
}

impl<B: StorageBackend> DataStore for RecordStore<B> {
    fn load(&self, key: DatasetKey) -> Result<Vec<Record>> {
        let Some(content) = self.backend.read_dataset(key)? else {
            tracing::debug!(dataset = %key, "no document yet, starting empty");
            return Ok(Vec::new());
        };

        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(|e| F1dbError::MalformedStore {
                path: self.backend.dataset_path(key),
                reason: e.to_string(),
            })?;
        tracing::debug!(dataset = %key, records = records.len(), "loaded");
        Ok(records)
    }

    fn save(&mut self, key: DatasetKey, records: &[Record]) -> Result<()> {
        let content = Self::render(records)?;
        self.backend.write_dataset(key, &content)?;
        tracing::debug!(dataset = %key, records = records.len(), "saved");
        Ok(())
    }

    fn append(&mut self, key: DatasetKey, record: Record) -> Result<Record> {
        let stored = Self::validated(key, &record)?;
        let mut records = self.load(key)?;
        records.push(stored.clone());
        self.save(key, &records)?;
        Ok(stored)
    }

    fn bulk_append(&mut self, key: DatasetKey, records: Vec<Record>) -> Result<BulkReport> {
        let mut existing = self.load(key)?;
        let mut report = BulkReport {
            first_index: existing.len(),
            ..Default::default()
        };

        for (index, record) in records.into_iter().enumerate() {
            let missing = validate(key.schema(), &record);
            if missing.is_empty() {
                report.accepted.push(normalize_record(key.schema(), &record));
            } else {
                tracing::warn!(dataset = %key, index, missing = %missing, "rejected bulk record");
                report.rejected.push(Rejection { index, missing });
            }
        }

        if !report.accepted.is_empty() {
            existing.extend(report.accepted.iter().cloned());
            self.save(key, &existing)?;
        }
        Ok(report)
    }

    fn replace(&mut self, key: DatasetKey, index: usize, record: Record) -> Result<Record> {
        let stored = Self::validated(key, &record)?;
        let mut records = self.load(key)?;
        Self::check_index(index, records.len())?;
        records[index] = stored.clone();
        self.save(key, &records)?;
        Ok(stored)
    }

    fn delete(&mut self, key: DatasetKey, index: usize) -> Result<Record> {
        let mut records = self.load(key)?;
        Self::check_index(index, records.len())?;
        let removed = records.remove(index);
        self.save(key, &records)?;
        Ok(removed)
    }

    fn duplicate(&mut self, key: DatasetKey, index: usize) -> Result<Record> {
        let mut records = self.load(key)?;
        Self::check_index(index, records.len())?;

        let mut copy = records[index].clone();
        if let Some(Scalar::Text(id)) = copy.get_mut("id") {
            id.push_str(&self.copy_suffixes.id);
        }
        if let Some(Scalar::Text(name)) = copy.get_mut("name") {
            name.push_str(&self.copy_suffixes.name);
        }

        records.push(copy.clone());
        self.save(key, &records)?;
        Ok(copy)
    }

    fn replace_all(&mut self, key: DatasetKey, records: Vec<Record>) -> Result<()> {
        tracing::debug!(dataset = %key, records = records.len(), "replacing whole dataset");
        let schema = key.schema();
        let normalized: Vec<Record> = records
            .iter()
            .map(|record| normalize_record(schema, record))
            .collect();
        self.save(key, &normalized)
    }

    fn serialize_whole(&self, key: DatasetKey) -> Result<Vec<u8>> {
        let records = self.load(key)?;
        Ok(Self::render(&records)?.into_bytes())
    }

    fn dataset_path(&self, key: DatasetKey) -> PathBuf {
        self.backend.dataset_path(key)
    }
}
