use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::schema::DatasetKey;
use crate::store::DataStore;
use crate::views::ListedRecord;

pub fn run<S: DataStore>(store: &mut S, key: DatasetKey, index: usize) -> Result<CmdResult> {
    let removed = store.delete(key, index)?;
    let listed = ListedRecord::new(key, index, removed);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record deleted ({}): {}",
        index, listed.label
    )));
    Ok(result.with_affected_records(vec![listed]))
}
