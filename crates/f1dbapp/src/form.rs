//! # Forms
//!
//! One generic interpreter turns any [`Schema`] into an input form. There is no
//! per-dataset form code: field order, labels, input kinds and defaults all come
//! from the registry.
//!
//! ## Lifecycle
//!
//! A [`Draft`] holds typed values while a user edits them. [`Draft::submit`]
//! either yields a storable [`Record`] or hands the draft back inside
//! [`Rejected`] together with the missing fields, so the user can fix them
//! without losing what was typed.
//!
//! ```text
//! Draft --submit--> Record --store--> persisted
//!   ^                 |
//!   +---- Rejected <--+ (missing required fields)
//! ```
//!
//! ## Defaults
//!
//! | Kind | New record default |
//! |------|--------------------|
//! | Text | empty string |
//! | Integer / Float | 0 |
//! | Date | today when required, none otherwise |
//! | Boolean | false |
//! | Enum | first choice |

use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::coerce::{from_storage, parse_input, to_storage};
use crate::error::{F1dbError, Result};
use crate::model::Record;
use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::store::parse_payload;
use crate::validation::{validate, MissingFields};
use crate::value::FieldValue;

/// Descriptor of one form input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    /// Field name, with ` *` for required fields
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub choices: &'static [&'static str],
    /// Preselected choice for enum fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
    pub value: FieldValue,
    /// Increment of numeric inputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

/// Build the form for `schema`, prefilled from `current` when editing.
pub fn form_fields(schema: &Schema, current: Option<&Record>) -> Vec<FormField> {
    form_fields_on(schema, current, Local::now().date_naive())
}

/// [`form_fields`] with an explicit date for "today".
pub fn form_fields_on(
    schema: &Schema,
    current: Option<&Record>,
    today: NaiveDate,
) -> Vec<FormField> {
    schema
        .fields
        .iter()
        .map(|spec| {
            let value = current
                .and_then(|record| record.get(spec.name))
                .map(|scalar| from_storage(spec, scalar))
                .unwrap_or_else(|| default_value(spec, today));
            FormField {
                name: spec.name,
                label: spec.label(),
                kind: spec.kind,
                required: spec.required,
                choices: spec.choices,
                selected: (spec.kind == FieldKind::Enum)
                    .then(|| spec.choice_index(&value.to_string())),
                value,
                step: match spec.kind {
                    FieldKind::Integer => Some(1.0),
                    FieldKind::Float => Some(0.1),
                    _ => None,
                },
            }
        })
        .collect()
}

fn default_value(spec: &FieldSpec, today: NaiveDate) -> FieldValue {
    match spec.kind {
        FieldKind::Text => FieldValue::text(""),
        FieldKind::Integer => FieldValue::Integer(0),
        FieldKind::Float => FieldValue::Float(0.0),
        FieldKind::Date if spec.required => FieldValue::Date(today),
        FieldKind::Date => FieldValue::Null,
        FieldKind::Boolean => FieldValue::Boolean(false),
        FieldKind::Enum => spec
            .choices
            .first()
            .map_or(FieldValue::Null, |choice| FieldValue::text(*choice)),
    }
}

/// Typed values being edited for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    schema: &'static Schema,
    values: IndexMap<&'static str, FieldValue>,
    /// Fields of an edited record that the schema does not know about
    extras: Record,
}

impl Draft {
    /// A blank draft with form defaults.
    pub fn new(schema: &'static Schema) -> Self {
        Self::from_fields(schema, form_fields(schema, None), Record::new())
    }

    /// A draft prefilled from a stored record.
    pub fn from_record(schema: &'static Schema, record: &Record) -> Self {
        let extras = record
            .iter()
            .filter(|(name, _)| schema.field(name).is_none())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        Self::from_fields(schema, form_fields(schema, Some(record)), extras)
    }

    fn from_fields(schema: &'static Schema, fields: Vec<FormField>, extras: Record) -> Self {
        Self {
            schema,
            values: fields.into_iter().map(|f| (f.name, f.value)).collect(),
            extras,
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<()> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(F1dbError::UnknownField(name.to_string())),
        }
    }

    /// Parse raw text for `name` and set it.
    pub fn set_raw(&mut self, name: &str, raw: &str) -> Result<()> {
        let spec = self
            .schema
            .field(name)
            .ok_or_else(|| F1dbError::UnknownField(name.to_string()))?;
        let value = parse_input(spec, raw)?;
        self.set(name, value)
    }

    /// The record this draft would store, without validation.
    ///
    /// Required fields without a value are left out; optional ones are stored
    /// as null.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        for spec in self.schema.fields {
            let value = self.values.get(spec.name).unwrap_or(&FieldValue::Null);
            let scalar = to_storage(spec, value);
            if scalar.is_null() && spec.required {
                continue;
            }
            record.insert(spec.name, scalar);
        }
        for (name, value) in self.extras.iter() {
            record.insert(name.clone(), value.clone());
        }
        record
    }

    pub fn submit(self) -> std::result::Result<Record, Rejected> {
        let record = self.to_record();
        let missing = validate(self.schema, &record);
        if missing.is_empty() {
            Ok(record)
        } else {
            tracing::debug!(dataset = %self.schema.key, missing = %missing, "draft rejected");
            Err(Rejected {
                draft: self,
                missing,
            })
        }
    }
}

/// A draft that failed validation, returned intact for correction.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected {
    pub draft: Draft,
    pub missing: MissingFields,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing required fields: {}", self.missing)
    }
}

impl From<Rejected> for F1dbError {
    fn from(rejected: Rejected) -> Self {
        F1dbError::Validation {
            missing: rejected.missing.into_vec(),
        }
    }
}

/// State that outlives a single form interaction within one session.
///
/// Holds the text pasted for a bulk import, so a failed import can be retried
/// without pasting again.
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    paste_buffer: Option<String>,
}

impl FormContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paste(&mut self, text: impl Into<String>) {
        self.paste_buffer = Some(text.into());
    }

    pub fn paste_buffer(&self) -> Option<&str> {
        self.paste_buffer.as_deref()
    }

    /// Parse the paste buffer as a bulk payload. The buffer is kept.
    pub fn parse_paste(&self) -> Result<Vec<Record>> {
        match &self.paste_buffer {
            Some(text) => parse_payload(text),
            None => Err(F1dbError::MalformedPayload("nothing was pasted".to_string())),
        }
    }

    pub fn reset(&mut self) {
        self.paste_buffer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DRIVERS, RACE_RESULTS};
    use crate::test_utils::sample_driver;
    use crate::value::Scalar;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn form_follows_schema_order_and_labels() {
        let fields = form_fields(&DRIVERS, None);
        assert_eq!(fields.len(), DRIVERS.len());
        assert_eq!(fields[0].label, "id *");
        let death = fields.iter().find(|f| f.name == "dateOfDeath").unwrap();
        assert_eq!(death.label, "dateOfDeath");
    }

    #[test]
    fn new_form_defaults_per_kind() {
        let today = day("2024-03-02");
        let fields = form_fields_on(&DRIVERS, None, today);
        let by_name = |name: &str| fields.iter().find(|f| f.name == name).unwrap();

        assert_eq!(by_name("name").value, FieldValue::text(""));
        assert_eq!(by_name("totalRaceWins").value, FieldValue::Integer(0));
        assert_eq!(by_name("totalRaceWins").step, Some(1.0));
        assert_eq!(by_name("totalPoints").value, FieldValue::Float(0.0));
        assert_eq!(by_name("totalPoints").step, Some(0.1));
        assert_eq!(by_name("dateOfBirth").value, FieldValue::Date(today));
        assert_eq!(by_name("dateOfDeath").value, FieldValue::Null);
        assert_eq!(by_name("gender").value, FieldValue::text("MALE"));
        assert_eq!(by_name("gender").selected, Some(0));
        assert_eq!(by_name("name").selected, None);
    }

    #[test]
    fn edit_form_prefills_typed_values() {
        let record = sample_driver("lando-norris").with("gender", Scalar::text("OTHER"));
        let fields = form_fields(&DRIVERS, Some(&record));
        let by_name = |name: &str| fields.iter().find(|f| f.name == name).unwrap();

        assert_eq!(by_name("id").value, FieldValue::text("lando-norris"));
        assert_eq!(by_name("dateOfBirth").value, FieldValue::Date(day("1997-09-30")));
        assert_eq!(by_name("gender").selected, Some(2));
    }

    #[test]
    fn unknown_enum_value_preselects_first_choice() {
        let record = sample_driver("x").with("gender", Scalar::text("robot"));
        let fields = form_fields(&DRIVERS, Some(&record));
        let gender = fields.iter().find(|f| f.name == "gender").unwrap();
        assert_eq!(gender.selected, Some(0));
        assert_eq!(gender.value, FieldValue::text("MALE"));
    }

    #[test]
    fn blank_draft_is_rejected_with_text_fields_missing() {
        let rejected = Draft::new(&DRIVERS).submit().unwrap_err();
        assert!(rejected.missing.contains("id"));
        assert!(rejected.missing.contains("placeOfBirth"));
        // numbers default to 0 and required dates to today, both present
        assert!(!rejected.missing.contains("totalRaceWins"));
        assert!(!rejected.missing.contains("dateOfBirth"));
    }

    #[test]
    fn rejected_draft_keeps_typed_values() {
        let mut draft = Draft::new(&DRIVERS);
        draft.set_raw("id", "oscar-piastri").unwrap();
        let rejected = draft.submit().unwrap_err();
        assert_eq!(
            rejected.draft.get("id"),
            Some(&FieldValue::text("oscar-piastri"))
        );
        assert!(!rejected.missing.contains("id"));
    }

    #[test]
    fn draft_from_record_round_trips() {
        let record = sample_driver("max-verstappen").with("custom", Scalar::text("kept"));
        let submitted = Draft::from_record(&DRIVERS, &record).submit().unwrap();
        assert_eq!(submitted, record);
    }

    #[test]
    fn cleared_required_date_is_missing() {
        let mut draft = Draft::from_record(&DRIVERS, &sample_driver("a"));
        draft.set_raw("dateOfBirth", "").unwrap();
        let rejected = draft.submit().unwrap_err();
        assert_eq!(rejected.missing.names(), &["dateOfBirth".to_string()]);
    }

    #[test]
    fn set_rejects_unknown_fields_and_bad_input() {
        let mut draft = Draft::new(&RACE_RESULTS);
        assert!(matches!(
            draft.set("colour", FieldValue::Null),
            Err(F1dbError::UnknownField(_))
        ));
        assert!(matches!(
            draft.set_raw("laps", "many"),
            Err(F1dbError::InvalidInput { .. })
        ));
        draft.set_raw("points", "12.5").unwrap();
        assert_eq!(draft.get("points"), Some(&FieldValue::Float(12.5)));
    }

    #[test]
    fn optional_values_are_stored_as_null() {
        let draft = Draft::new(&DRIVERS);
        let record = draft.to_record();
        assert_eq!(record.get("dateOfDeath"), Some(&Scalar::Null));
    }

    #[test]
    fn rejected_converts_to_validation_error() {
        let rejected = Draft::new(&DRIVERS).submit().unwrap_err();
        let count = rejected.missing.len();
        match F1dbError::from(rejected) {
            F1dbError::Validation { missing } => assert_eq!(missing.len(), count),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn paste_buffer_survives_until_reset() {
        let mut ctx = FormContext::new();
        assert!(ctx.parse_paste().is_err());

        ctx.paste("{\"id\": \"a\"}");
        assert_eq!(ctx.parse_paste().unwrap().len(), 1);
        assert_eq!(ctx.paste_buffer(), Some("{\"id\": \"a\"}"));

        ctx.reset();
        assert_eq!(ctx.paste_buffer(), None);
    }
}
