//! # Domain Model: Records and Datasets
//!
//! A [`Record`] is one JSON object of a dataset file: an ordered map from field
//! name to [`Scalar`]. Records carry no identity of their own. They are
//! addressed by their position in the dataset, and by convention labelled for
//! humans through their `id` (or `raceId` + `driverId`) fields. Those fields are
//! not keys: two records may share an `id`.
//!
//! ## Shape
//!
//! - Key order is preserved from the file, so a load/save cycle writes the same
//!   document back.
//! - A record need not contain every schema field. Absent optional fields stay
//!   absent; absent required fields are caught by validation.
//! - Fields unknown to the schema are kept untouched.
//!
//! ## Datasets
//!
//! A dataset is simply `Vec<Record>`. Its order is the persisted order:
//! appends go to the end, deletes and replaces address positions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::Scalar;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Scalar>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Scalar> {
        self.fields.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Set a field. Existing fields keep their position; new fields go last.
    pub fn insert(&mut self, name: impl Into<String>, value: Scalar) -> Option<Scalar> {
        self.fields.insert(name.into(), value)
    }

    /// Builder-style [`Record::insert`].
    pub fn with(mut self, name: impl Into<String>, value: Scalar) -> Self {
        self.insert(name, value);
        self
    }

    /// Remove a field, keeping the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<Scalar> {
        self.fields.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Scalar)> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Text value of a field, if it holds text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Scalar::as_str)
    }
}

impl FromIterator<(String, Scalar)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Scalar)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Scalar);
    type IntoIter = indexmap::map::IntoIter<String, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_key_order_through_json() {
        let raw = r#"{"zeta":1,"alpha":"a","mid":null}"#;
        let record: Record = serde_json::from_str(raw).unwrap();
        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(serde_json::to_string(&record).unwrap(), raw);
    }

    #[test]
    fn insert_keeps_position_of_existing_field() {
        let mut record = Record::new()
            .with("id", Scalar::text("a"))
            .with("name", Scalar::text("A"));
        record.insert("id", Scalar::text("b"));
        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys, vec!["id", "name"]);
        assert_eq!(record.text("id"), Some("b"));
    }

    #[test]
    fn remove_keeps_order() {
        let mut record = Record::new()
            .with("a", Scalar::Integer(1))
            .with("b", Scalar::Integer(2))
            .with("c", Scalar::Integer(3));
        assert_eq!(record.remove("b"), Some(Scalar::Integer(2)));
        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn nested_values_are_rejected() {
        let raw = r#"{"id":"x","tags":["a"]}"#;
        assert!(serde_json::from_str::<Record>(raw).is_err());
    }
}
