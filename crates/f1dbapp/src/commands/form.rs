use crate::commands::{load_at, CmdResult};
use crate::error::Result;
use crate::form::form_fields;
use crate::schema::DatasetKey;
use crate::store::DataStore;

/// Form descriptors for a new record, or for the record at `index`.
pub fn run<S: DataStore>(store: &S, key: DatasetKey, index: Option<usize>) -> Result<CmdResult> {
    let current = index.map(|i| load_at(store, key, i)).transpose()?;
    Ok(CmdResult {
        form_fields: form_fields(key.schema(), current.as_ref()),
        ..Default::default()
    })
}
