//! # Configuration
//!
//! f1db configuration is managed by [`confique`], which handles layered loading
//! from TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `F1DB_DATA_DIR`.
//! 2. **Working directory**: `./f1db.toml`.
//! 3. **User config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! The CLI `--data-dir` flag is applied on top of the loaded value.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | `data` | Directory holding the dataset documents |
//! | `id_copy_suffix` | `-copy` | Appended to `id` when duplicating |
//! | `name_copy_suffix` | ` (copy)` | Appended to `name` when duplicating |

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{F1dbError, Result};
use crate::store::CopySuffixes;

pub const CONFIG_FILE: &str = "f1db.toml";

/// Configuration for f1db, stored in `f1db.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct F1dbConfig {
    /// Directory holding the dataset documents. Relative paths are resolved
    /// against the working directory.
    #[config(env = "F1DB_DATA_DIR", default = "data")]
    pub data_dir: PathBuf,

    #[config(default = "-copy")]
    pub id_copy_suffix: String,

    #[config(default = " (copy)")]
    pub name_copy_suffix: String,
}

impl Default for F1dbConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            id_copy_suffix: "-copy".to_string(),
            name_copy_suffix: " (copy)".to_string(),
        }
    }
}

impl F1dbConfig {
    /// Load the full hierarchy for a process running in `cwd`.
    pub fn load(cwd: &Path) -> Result<Self> {
        let mut files = vec![cwd.join(CONFIG_FILE)];
        if let Some(dirs) = ProjectDirs::from("", "f1db", "f1db") {
            files.push(dirs.config_dir().join(CONFIG_FILE));
        }
        Self::load_from(&files)
    }

    /// Load from the environment and the given files, highest priority first.
    /// Missing files are skipped.
    pub fn load_from(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file);
        }
        let config = builder
            .load()
            .map_err(|e| F1dbError::Config(e.to_string()))?;
        tracing::debug!(data_dir = %config.data_dir.display(), "configuration loaded");
        Ok(config)
    }

    /// The data directory, anchored at `cwd` when relative.
    pub fn data_dir_in(&self, cwd: &Path) -> PathBuf {
        if self.data_dir.is_absolute() {
            self.data_dir.clone()
        } else {
            cwd.join(&self.data_dir)
        }
    }

    pub fn copy_suffixes(&self) -> CopySuffixes {
        CopySuffixes {
            id: self.id_copy_suffix.clone(),
            name: self.name_copy_suffix.clone(),
        }
    }
}
