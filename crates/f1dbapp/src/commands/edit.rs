use crate::commands::{load_at, CmdMessage, CmdResult, FieldInput};
use crate::error::Result;
use crate::form::Draft;
use crate::schema::DatasetKey;
use crate::store::DataStore;
use crate::views::ListedRecord;

/// Apply `inputs` to the stored record at `index`, submit and replace it.
pub fn run<S: DataStore>(
    store: &mut S,
    key: DatasetKey,
    index: usize,
    inputs: &[FieldInput],
) -> Result<CmdResult> {
    let current = load_at(store, key, index)?;
    let mut draft = Draft::from_record(key.schema(), &current);
    for input in inputs {
        draft.set_raw(&input.field, &input.raw)?;
    }
    let record = draft.submit()?;

    let stored = store.replace(key, index, record)?;
    let listed = ListedRecord::new(key, index, stored);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record updated ({}): {}",
        index, listed.label
    )));
    Ok(result.with_affected_records(vec![listed]))
}
