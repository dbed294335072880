use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::schema::DatasetKey;
use crate::store::DataStore;
use crate::views::ListedRecord;

pub fn run<S: DataStore>(store: &mut S, key: DatasetKey, index: usize) -> Result<CmdResult> {
    let copy = store.duplicate(key, index)?;
    let new_index = store.load(key)?.len().saturating_sub(1);
    let listed = ListedRecord::new(key, new_index, copy);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record {} duplicated as ({}): {}",
        index, new_index, listed.label
    )));
    Ok(result.with_affected_records(vec![listed]))
}
