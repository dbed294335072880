use crate::commands::{load_at, CmdResult};
use crate::error::Result;
use crate::schema::DatasetKey;
use crate::store::DataStore;
use crate::views::ListedRecord;

pub fn run<S: DataStore>(store: &S, key: DatasetKey, index: usize) -> Result<CmdResult> {
    let record = load_at(store, key, index)?;
    Ok(CmdResult::default().with_listed_records(vec![ListedRecord::new(key, index, record)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::F1dbError;
    use crate::test_utils::{mem_store, sample_constructor};

    #[test]
    fn shows_the_record_at_index() {
        let mut store = mem_store();
        let key = DatasetKey::Constructors;
        store.append(key, sample_constructor("ferrari")).unwrap();
        store.append(key, sample_constructor("mclaren")).unwrap();

        let result = run(&store, key, 1).unwrap();
        assert_eq!(result.listed_records[0].index, 1);
        assert_eq!(result.listed_records[0].record.text("id"), Some("mclaren"));
    }

    #[test]
    fn out_of_range_index_fails() {
        let store = mem_store();
        assert!(matches!(
            run(&store, DatasetKey::Drivers, 0),
            Err(F1dbError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }
}
