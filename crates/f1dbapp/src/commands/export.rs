use crate::commands::CmdResult;
use crate::error::Result;
use crate::schema::DatasetKey;
use crate::store::DataStore;

/// The dataset document, byte for byte as it is stored.
pub fn run<S: DataStore>(store: &S, key: DatasetKey) -> Result<CmdResult> {
    let document = store.serialize_whole(key)?;
    tracing::debug!(dataset = %key, bytes = document.len(), "exported");
    Ok(CmdResult {
        document: Some(document),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::parse_payload;
    use crate::test_utils::{mem_store, sample_driver};

    #[test]
    fn export_parses_back_to_the_dataset() {
        let mut store = mem_store();
        store.append(DatasetKey::Drivers, sample_driver("a")).unwrap();
        store.append(DatasetKey::Drivers, sample_driver("b")).unwrap();

        let document = run(&store, DatasetKey::Drivers).unwrap().document.unwrap();
        let parsed: Vec<Record> = parse_payload(std::str::from_utf8(&document).unwrap()).unwrap();
        assert_eq!(parsed, store.load(DatasetKey::Drivers).unwrap());
    }

    #[test]
    fn export_of_empty_dataset_is_empty_array() {
        let store = mem_store();
        let document = run(&store, DatasetKey::RaceResults).unwrap().document.unwrap();
        assert_eq!(document, b"[]");
    }
}
