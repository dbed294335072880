use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::FormContext;
use crate::model::Record;
use crate::schema::DatasetKey;
use crate::store::DataStore;
use crate::views::ListedRecord;

/// Bulk append `records`, validating each one on its own.
///
/// Invalid records are reported as warnings and skipped. With `strict`, any
/// rejection turns into [`crate::error::F1dbError::PartialBulkFailure`]; the
/// valid records are saved either way.
pub fn run<S: DataStore>(
    store: &mut S,
    key: DatasetKey,
    records: Vec<Record>,
    strict: bool,
) -> Result<CmdResult> {
    let report = store.bulk_append(key, records)?;

    let mut result = CmdResult::default();
    if report.accepted.is_empty() && report.rejected.is_empty() {
        result.add_message(CmdMessage::info("Nothing to import."));
    }
    if !report.accepted.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "Imported {} record(s) into {}",
            report.accepted.len(),
            key.display_name()
        )));
    }
    for rejection in &report.rejected {
        result.add_message(CmdMessage::warning(format!(
            "Record {} skipped, missing required fields: {}",
            rejection.index, rejection.missing
        )));
    }

    let report = if strict { report.into_strict()? } else { report };
    let first_index = report.first_index;
    let affected = report
        .accepted
        .into_iter()
        .enumerate()
        .map(|(i, record)| ListedRecord::new(key, first_index + i, record))
        .collect();
    Ok(result.with_affected_records(affected))
}

/// Import whatever was pasted into `ctx`. The paste buffer is left in place.
pub fn run_paste<S: DataStore>(
    store: &mut S,
    key: DatasetKey,
    ctx: &FormContext,
    strict: bool,
) -> Result<CmdResult> {
    let records = ctx.parse_paste()?;
    run(store, key, records, strict)
}
