use super::backend::StorageBackend;
use crate::error::{F1dbError, Result};
use crate::schema::DatasetKey;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores each dataset as `<data_dir>/<file name>.json`.
pub struct FsBackend {
    data_dir: PathBuf,
}

impl FsBackend {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(F1dbError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_dataset(&self, key: DatasetKey) -> Result<Option<String>> {
        let path = self.dataset_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            // Not UTF-8, so not JSON either
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(F1dbError::MalformedStore {
                path,
                reason: e.to_string(),
            }),
            Err(e) => Err(F1dbError::Io(e)),
        }
    }

    fn write_dataset(&self, key: DatasetKey, contents: &str) -> Result<()> {
        self.ensure_dir()?;

        let target_path = self.dataset_path(key);

        // Atomic Write
        let tmp_path = self
            .data_dir
            .join(format!(".{}-{}.tmp", key.file_stem(), Uuid::new_v4()));
        fs::write(&tmp_path, contents).map_err(F1dbError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &target_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(F1dbError::Io(e));
        }

        Ok(())
    }

    fn dataset_path(&self, key: DatasetKey) -> PathBuf {
        self.data_dir.join(key.file_name())
    }
}
