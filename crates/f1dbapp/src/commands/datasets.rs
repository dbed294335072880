use crate::commands::{CmdMessage, CmdResult, DatasetInfo};
use crate::error::Result;
use crate::schema::DatasetKey;
use crate::store::DataStore;

/// Every registered dataset with its path and record count.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for key in DatasetKey::all() {
        let records = match store.load(key) {
            Ok(records) => Some(records.len()),
            Err(e) => {
                result.add_message(CmdMessage::warning(format!(
                    "{}: {}",
                    key.display_name(),
                    e
                )));
                None
            }
        };
        result.datasets.push(DatasetInfo {
            key,
            display_name: key.display_name(),
            path: store.dataset_path(key),
            records,
        });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::RecordStore;
    use crate::test_utils::sample_driver;
    use std::path::PathBuf;

    #[test]
    fn lists_all_datasets_with_counts() {
        let backend = MemBackend::new();
        backend.put_raw(DatasetKey::Constructors, "{broken");
        let mut store = RecordStore::with_backend(backend);
        store.append(DatasetKey::Drivers, sample_driver("a")).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.datasets.len(), 3);
        assert_eq!(result.datasets[0].records, Some(1));
        assert_eq!(result.datasets[1].records, None);
        assert_eq!(result.datasets[2].records, Some(0));
        assert_eq!(
            result.datasets[2].path,
            PathBuf::from("memory://f1db-races-race-results.json")
        );
        assert_eq!(result.messages.len(), 1);
    }
}
