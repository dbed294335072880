//! # Command Layer
//!
//! This module contains the **core business logic** of f1db. Each command lives in
//! its own submodule and implements plain Rust functions over a [`DataStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Turn raw user input into drafts and submit them
//! - Run store operations and translate their outcome into messages
//! - Return structured [`CmdResult`]s with affected and listed records
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Any I/O beyond the store**: No stdout, stderr or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. Records are carried as
//! [`ListedRecord`], which pairs a record with its store index and label, so
//! every client shows the same index a later `edit` or `delete` expects.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use the
//! in-memory backend and check `CmdResult` contents and error conditions.
//!
//! ## Command Modules
//!
//! - [`list`]: Filtered listing with a dataset summary
//! - [`show`]: One record
//! - [`form`]: Form descriptors for a new or existing record
//! - [`add`]: Build a record from field inputs and append it
//! - [`edit`]: Apply field inputs to a stored record
//! - [`delete`]: Remove a record
//! - [`duplicate`]: Append an annotated copy of a record
//! - [`import`]: Bulk append from a JSON payload
//! - [`replace_all`]: Overwrite a dataset from a JSON payload
//! - [`export`]: The dataset document for download
//! - [`datasets`]: Registered datasets and where they live

use crate::error::{F1dbError, Result};
use crate::form::FormField;
use crate::schema::DatasetKey;
use crate::store::DataStore;
use crate::views::{DatasetSummary, ListedRecord};
use serde::Serialize;
use std::path::PathBuf;

pub mod add;
pub mod datasets;
pub mod delete;
pub mod duplicate;
pub mod edit;
pub mod export;
pub mod form;
pub mod import;
pub mod list;
pub mod replace_all;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A registered dataset and its document.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub key: DatasetKey,
    pub display_name: &'static str,
    pub path: PathBuf,
    /// None when the document could not be read
    pub records: Option<usize>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<ListedRecord>,
    pub listed_records: Vec<ListedRecord>,
    pub summary: Option<DatasetSummary>,
    pub form_fields: Vec<FormField>,
    pub datasets: Vec<DatasetInfo>,
    /// Raw document bytes (for `export`)
    pub document: Option<Vec<u8>>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<ListedRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<ListedRecord>) -> Self {
        self.listed_records = records;
        self
    }
}

/// A raw `field=value` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub field: String,
    pub raw: String,
}

impl FieldInput {
    pub fn new(field: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            raw: raw.into(),
        }
    }

    /// Parse `field=value`. The value may itself contain `=` and may be empty.
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((field, raw)) if !field.trim().is_empty() => Ok(Self::new(field.trim(), raw)),
            _ => Err(F1dbError::InvalidInput {
                field: s.to_string(),
                reason: "expected field=value".to_string(),
            }),
        }
    }
}

/// Load a dataset and check that `index` addresses a record.
pub(crate) fn load_at<S: DataStore>(
    store: &S,
    key: DatasetKey,
    index: usize,
) -> Result<crate::model::Record> {
    let mut records = store.load(key)?;
    if index >= records.len() {
        return Err(F1dbError::IndexOutOfRange {
            index,
            len: records.len(),
        });
    }
    Ok(records.swap_remove(index))
}
