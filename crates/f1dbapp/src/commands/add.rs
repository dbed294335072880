use crate::commands::{CmdMessage, CmdResult, FieldInput};
use crate::error::Result;
use crate::form::Draft;
use crate::schema::DatasetKey;
use crate::store::DataStore;
use crate::views::ListedRecord;

/// Fill a blank form with `inputs`, submit it and append the record.
pub fn run<S: DataStore>(
    store: &mut S,
    key: DatasetKey,
    inputs: &[FieldInput],
) -> Result<CmdResult> {
    let mut draft = Draft::new(key.schema());
    for input in inputs {
        draft.set_raw(&input.field, &input.raw)?;
    }
    let record = draft.submit()?;

    let index = store.load(key)?.len();
    let stored = store.append(key, record)?;
    let listed = ListedRecord::new(key, index, stored);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record added ({}): {}",
        index, listed.label
    )));
    Ok(result.with_affected_records(vec![listed]))
}
