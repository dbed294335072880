use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::schema::DatasetKey;
use crate::store::DataStore;
use crate::validation::validate;

/// Overwrite the whole dataset. Records are not validated; incomplete ones are
/// only counted in a warning.
pub fn run<S: DataStore>(
    store: &mut S,
    key: DatasetKey,
    records: Vec<Record>,
) -> Result<CmdResult> {
    let incomplete = records
        .iter()
        .filter(|record| !validate(key.schema(), record).is_empty())
        .count();
    let count = records.len();
    store.replace_all(key, records)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Replaced {} with {} record(s)",
        key.display_name(),
        count
    )));
    if incomplete > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} record(s) are missing required fields",
            incomplete
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mem_store, sample_driver};
    use crate::value::Scalar;

    #[test]
    fn replaces_everything_and_warns_on_incomplete() {
        let mut store = mem_store();
        store.append(DatasetKey::Drivers, sample_driver("a")).unwrap();

        let partial = Record::new().with("id", Scalar::text("z"));
        let result = run(
            &mut store,
            DatasetKey::Drivers,
            vec![sample_driver("x"), partial],
        )
        .unwrap();

        assert_eq!(result.messages[0].content, "Replaced Drivers with 2 record(s)");
        assert_eq!(
            result.messages[1].content,
            "1 record(s) are missing required fields"
        );
        let records = store.load(DatasetKey::Drivers).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].text("id"), Some("z"));
    }

    #[test]
    fn empty_upload_clears_the_dataset() {
        let mut store = mem_store();
        store.append(DatasetKey::Drivers, sample_driver("a")).unwrap();
        run(&mut store, DatasetKey::Drivers, Vec::new()).unwrap();
        assert!(store.load(DatasetKey::Drivers).unwrap().is_empty());
    }
}
