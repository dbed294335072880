//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all f1db operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (dataset names to keys, `field=value` strings to inputs,
//!   raw JSON text to records)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! The API explicitly avoids:
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Dataset Names
//!
//! Every method takes the dataset as the user typed it: a display name
//! (`"Race Results"`) or a key (`"race-results"`). Resolution happens here, once,
//! through [`crate::dataset::resolve_any`].
//!
//! ## Generic Over DataStore
//!
//! `F1dbApi<S: DataStore>` is generic over the storage backend:
//! - Production: `F1dbApi<RecordStore<FsBackend>>`
//! - Testing: `F1dbApi<RecordStore<MemBackend>>`
//!
//! ## Testing Strategy
//!
//! API tests verify dispatch and input normalization. Command logic is tested in
//! the command modules, storage behavior in the store modules.

use crate::commands::{self, CmdResult, FieldInput};
use crate::dataset::resolve_any;
use crate::error::Result;
use crate::form::FormContext;
use crate::schema::DatasetKey;
use crate::store::{parse_payload, DataStore};
use crate::views::RecordFilter;

/// The main API facade for f1db operations.
///
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct F1dbApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> F1dbApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list(&self, dataset: &str, filter: &RecordFilter) -> Result<CmdResult> {
        let key = dataset_key(dataset)?;
        commands::list::run(&self.store, key, filter)
    }

    pub fn show(&self, dataset: &str, index: usize) -> Result<CmdResult> {
        let key = dataset_key(dataset)?;
        commands::show::run(&self.store, key, index)
    }

    pub fn form(&self, dataset: &str, index: Option<usize>) -> Result<CmdResult> {
        let key = dataset_key(dataset)?;
        commands::form::run(&self.store, key, index)
    }

    pub fn add<I: AsRef<str>>(&mut self, dataset: &str, assignments: &[I]) -> Result<CmdResult> {
        let key = dataset_key(dataset)?;
        let inputs = parse_assignments(assignments)?;
        commands::add::run(&mut self.store, key, &inputs)
    }

    pub fn edit<I: AsRef<str>>(
        &mut self,
        dataset: &str,
        index: usize,
        assignments: &[I],
    ) -> Result<CmdResult> {
        let key = dataset_key(dataset)?;
        let inputs = parse_assignments(assignments)?;
        commands::edit::run(&mut self.store, key, index, &inputs)
    }

    pub fn delete(&mut self, dataset: &str, index: usize) -> Result<CmdResult> {
        let key = dataset_key(dataset)?;
        commands::delete::run(&mut self.store, key, index)
    }

    pub fn duplicate(&mut self, dataset: &str, index: usize) -> Result<CmdResult> {
        let key = dataset_key(dataset)?;
        commands::duplicate::run(&mut self.store, key, index)
    }

    /// Bulk import whatever was pasted into `ctx`.
    pub fn import(
        &mut self,
        dataset: &str,
        ctx: &FormContext,
        strict: bool,
    ) -> Result<CmdResult> {
        let key = dataset_key(dataset)?;
        commands::import::run_paste(&mut self.store, key, ctx, strict)
    }

    /// Replace the whole dataset with the records in `payload` (JSON text).
    pub fn replace_all(&mut self, dataset: &str, payload: &str) -> Result<CmdResult> {
        let key = dataset_key(dataset)?;
        let records = parse_payload(payload)?;
        commands::replace_all::run(&mut self.store, key, records)
    }

    pub fn export(&self, dataset: &str) -> Result<CmdResult> {
        let key = dataset_key(dataset)?;
        commands::export::run(&self.store, key)
    }

    pub fn datasets(&self) -> Result<CmdResult> {
        commands::datasets::run(&self.store)
    }
}

fn dataset_key(dataset: &str) -> Result<DatasetKey> {
    resolve_any(dataset).map(|(key, _)| key)
}

/// Parse `field=value` arguments, in order.
pub fn parse_assignments<I: AsRef<str>>(assignments: &[I]) -> Result<Vec<FieldInput>> {
    assignments
        .iter()
        .map(|a| FieldInput::parse(a.as_ref()))
        .collect()
}
