use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::schema::DatasetKey;
use crate::store::DataStore;
use crate::views::{DatasetSummary, RecordFilter};

pub fn run<S: DataStore>(
    store: &S,
    key: DatasetKey,
    filter: &RecordFilter,
) -> Result<CmdResult> {
    let records = store.load(key)?;
    let listed = filter.apply(key, &records);

    let mut result = CmdResult {
        summary: Some(DatasetSummary::of(key, &records)),
        ..Default::default()
    };
    if records.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} yet.",
            key.display_name().to_lowercase()
        )));
    } else if listed.is_empty() {
        result.add_message(CmdMessage::info("No records match the filter."));
    }

    Ok(result.with_listed_records(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mem_store, sample_driver};
    use crate::views::SummaryMetric;

    #[test]
    fn lists_every_record_with_its_index() {
        let mut store = mem_store();
        store.append(DatasetKey::Drivers, sample_driver("a")).unwrap();
        store.append(DatasetKey::Drivers, sample_driver("b")).unwrap();

        let result = run(&store, DatasetKey::Drivers, &RecordFilter::default()).unwrap();
        assert_eq!(result.listed_records.len(), 2);
        assert_eq!(result.listed_records[1].index, 1);
        assert_eq!(result.listed_records[1].label, "B (b)");
        assert!(result.messages.is_empty());
        assert_eq!(
            result.summary.unwrap().metric,
            SummaryMetric::ActiveDrivers(2)
        );
    }

    #[test]
    fn summary_covers_whole_dataset_when_filtered() {
        let mut store = mem_store();
        store.append(DatasetKey::Drivers, sample_driver("lewis-hamilton")).unwrap();
        store.append(DatasetKey::Drivers, sample_driver("max-verstappen")).unwrap();

        let filter = RecordFilter {
            name_contains: Some("max".to_string()),
            ..Default::default()
        };
        let result = run(&store, DatasetKey::Drivers, &filter).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].index, 1);
        assert_eq!(result.summary.unwrap().total, 2);
    }

    #[test]
    fn empty_dataset_reports_info() {
        let store = mem_store();
        let result = run(&store, DatasetKey::RaceResults, &RecordFilter::default()).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "No race results yet.");
    }

    #[test]
    fn no_match_reports_info() {
        let mut store = mem_store();
        store.append(DatasetKey::Drivers, sample_driver("a")).unwrap();
        let filter = RecordFilter {
            name_contains: Some("zzz".to_string()),
            ..Default::default()
        };
        let result = run(&store, DatasetKey::Drivers, &filter).unwrap();
        assert_eq!(result.messages[0].content, "No records match the filter.");
    }
}
