//! Read-only views over a loaded dataset: labels, filtering and summaries.
//!
//! Filtering never renumbers records. A [`ListedRecord`] always carries the
//! record's position in the stored sequence, which is the index every mutating
//! operation expects.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::model::Record;
use crate::schema::DatasetKey;
use crate::value::Scalar;

/// One-line human label for a record.
pub fn record_label(key: DatasetKey, record: &Record) -> String {
    let field = |name: &str| {
        record
            .get(name)
            .map(Scalar::to_string)
            .unwrap_or_default()
    };
    match key {
        DatasetKey::Drivers | DatasetKey::Constructors => {
            format!("{} ({})", field("name"), field("id"))
        }
        DatasetKey::RaceResults => {
            format!("Race {} - Driver {}", field("raceId"), field("driverId"))
        }
    }
}

/// A record together with its store index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedRecord {
    pub index: usize,
    pub label: String,
    pub record: Record,
}

impl ListedRecord {
    pub fn new(key: DatasetKey, index: usize, record: Record) -> Self {
        Self {
            index,
            label: record_label(key, &record),
            record,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Case-insensitive substring of `name`
    pub name_contains: Option<String>,
    /// Exact value of `year`
    pub year: Option<i64>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.name_contains.is_none() && self.year.is_none()
    }

    pub fn matches(&self, record: &Record) -> bool {
        if let Some(needle) = &self.name_contains {
            let needle = needle.to_lowercase();
            let name = record.text("name").unwrap_or_default().to_lowercase();
            if !name.contains(&needle) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if record.get("year").and_then(Scalar::as_i64) != Some(year) {
                return false;
            }
        }
        true
    }

    /// Apply the filter, keeping store indexes.
    pub fn apply(&self, key: DatasetKey, records: &[Record]) -> Vec<ListedRecord> {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .map(|(index, record)| ListedRecord::new(key, index, record.clone()))
            .collect()
    }
}

/// The dataset-specific headline number of a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "metric", content = "value", rename_all = "kebab-case")]
pub enum SummaryMetric {
    /// Drivers without a date of death
    ActiveDrivers(usize),
    Constructors(usize),
    /// Distinct `raceId` values
    Races(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub dataset: DatasetKey,
    pub total: usize,
    pub metric: SummaryMetric,
}

impl DatasetSummary {
    pub fn of(key: DatasetKey, records: &[Record]) -> Self {
        let metric = match key {
            DatasetKey::Drivers => SummaryMetric::ActiveDrivers(
                records
                    .iter()
                    .filter(|r| match r.get("dateOfDeath") {
                        None | Some(Scalar::Null) => true,
                        Some(value) => value.is_empty_text(),
                    })
                    .count(),
            ),
            DatasetKey::Constructors => SummaryMetric::Constructors(records.len()),
            DatasetKey::RaceResults => SummaryMetric::Races(
                records
                    .iter()
                    .filter_map(|r| r.get("raceId"))
                    .filter(|v| !v.is_null())
                    .map(Scalar::to_string)
                    .collect::<BTreeSet<_>>()
                    .len(),
            ),
        };
        Self {
            dataset: key,
            total: records.len(),
            metric,
        }
    }
}

impl SummaryMetric {
    pub fn label(&self) -> &'static str {
        match self {
            SummaryMetric::ActiveDrivers(_) => "Active drivers",
            SummaryMetric::Constructors(_) => "Constructors",
            SummaryMetric::Races(_) => "Races",
        }
    }

    pub fn value(&self) -> usize {
        match self {
            SummaryMetric::ActiveDrivers(n)
            | SummaryMetric::Constructors(n)
            | SummaryMetric::Races(n) => *n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_constructor, sample_driver, sample_race_result};

    #[test]
    fn labels_per_dataset() {
        assert_eq!(
            record_label(DatasetKey::Drivers, &sample_driver("max-verstappen")),
            "Max Verstappen (max-verstappen)"
        );
        assert_eq!(
            record_label(DatasetKey::Constructors, &sample_constructor("mclaren")),
            "McLaren (mclaren)"
        );
        assert_eq!(
            record_label(
                DatasetKey::RaceResults,
                &sample_race_result(1100, "lando-norris")
            ),
            "Race 1100 - Driver lando-norris"
        );
    }

    #[test]
    fn label_tolerates_missing_fields() {
        assert_eq!(record_label(DatasetKey::Drivers, &Record::new()), " ()");
    }

    #[test]
    fn name_filter_is_case_insensitive_and_keeps_indexes() {
        let records = vec![
            sample_driver("lewis-hamilton"),
            sample_driver("max-verstappen"),
            sample_driver("jos-verstappen"),
        ];
        let filter = RecordFilter {
            name_contains: Some("VERSTAP".to_string()),
            ..Default::default()
        };
        let listed = filter.apply(DatasetKey::Drivers, &records);
        let indexes: Vec<_> = listed.iter().map(|l| l.index).collect();
        assert_eq!(indexes, vec![1, 2]);
    }

    #[test]
    fn year_filter_matches_exactly() {
        let records = vec![
            sample_race_result(1, "a"),
            sample_race_result(2, "b").with("year", Scalar::Integer(2023)),
        ];
        let filter = RecordFilter {
            year: Some(2023),
            ..Default::default()
        };
        let listed = filter.apply(DatasetKey::RaceResults, &records);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].index, 1);
    }

    #[test]
    fn empty_filter_lists_everything() {
        let records = vec![sample_driver("a"), sample_driver("b")];
        let filter = RecordFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(DatasetKey::Drivers, &records).len(), 2);
    }

    #[test]
    fn driver_summary_counts_living_drivers() {
        let records = vec![
            sample_driver("a"),
            sample_driver("b").with("dateOfDeath", Scalar::text("1994-05-01")),
            sample_driver("c").with("dateOfDeath", Scalar::text("")),
        ];
        let summary = DatasetSummary::of(DatasetKey::Drivers, &records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.metric, SummaryMetric::ActiveDrivers(2));
    }

    #[test]
    fn race_summary_counts_distinct_races() {
        let records = vec![
            sample_race_result(1100, "a"),
            sample_race_result(1100, "b"),
            sample_race_result(1101, "a"),
        ];
        let summary = DatasetSummary::of(DatasetKey::RaceResults, &records);
        assert_eq!(summary.metric, SummaryMetric::Races(2));
        assert_eq!(summary.metric.value(), 2);
        assert_eq!(summary.metric.label(), "Races");
    }

    #[test]
    fn constructor_summary_is_the_count() {
        let records = vec![sample_constructor("a")];
        assert_eq!(
            DatasetSummary::of(DatasetKey::Constructors, &records).metric,
            SummaryMetric::Constructors(1)
        );
    }
}
