//! # Required-Field Validation
//!
//! A record is valid when every required field of its schema is present and is
//! not the empty string. That is the whole rule: validation does not check
//! kinds. A required field holding `0`, `false`, `null` or any date counts as
//! present, and coercion takes care of shapes when the record is saved.
//!
//! Forms gate saving on this check, so it has to stay exactly this loose.

use serde::Serialize;
use std::fmt;

use crate::model::Record;
use crate::schema::Schema;

/// Required fields that were absent or empty, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MissingFields(Vec<String>);

impl MissingFields {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// Check `record` against `schema`.
///
/// Returns the missing required fields; an empty result means the record may be saved.
pub fn validate(schema: &Schema, record: &Record) -> MissingFields {
    MissingFields(
        schema
            .required_fields()
            .filter(|name| match record.get(name) {
                None => true,
                Some(value) => value.is_empty_text(),
            })
            .map(str::to_string)
            .collect(),
    )
}
