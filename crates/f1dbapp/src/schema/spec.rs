//! Field specifications.
//!
//! A [`Schema`] is an ordered list of [`FieldSpec`]s. Specs are plain `const`
//! data: the registry in [`super::registry`] builds them at compile time with
//! the chained constructors below.

use serde::Serialize;

use super::registry::DatasetKey;

/// The kind of value a field holds.
///
/// The kind decides how a field is rendered as a form input, how raw input is
/// parsed, and how the value is normalized before it is written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text (e.g., `id`, `name`, `positionText`)
    Text,

    /// Whole numbers (e.g., `totalRaceWins`, `timeMillis`)
    Integer,

    /// Fractional numbers (e.g., `totalPoints`, championship points can be halves)
    Float,

    /// Calendar date stored as `YYYY-MM-DD`
    Date,

    /// True/false flag (e.g., `polePosition`)
    Boolean,

    /// One of a closed set of strings (e.g., `gender`)
    Enum,
}

impl FieldKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Integer | FieldKind::Float)
    }
}

/// Specification for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Key of the field in the JSON object (e.g., "dateOfBirth")
    pub name: &'static str,

    /// The kind of value this field holds
    pub kind: FieldKind,

    /// Whether the form must refuse to save when this field is missing
    pub required: bool,

    /// Allowed values, in display order. Non-empty only for [`FieldKind::Enum`].
    pub choices: &'static [&'static str],
}

impl FieldSpec {
    /// Create an optional field of the given kind.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            choices: &[],
        }
    }

    /// Create an optional enum field with the given choices.
    pub const fn enumeration(name: &'static str, choices: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FieldKind::Enum,
            required: false,
            choices,
        }
    }

    /// Set the required flag.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Form label: the field name, with ` *` appended for required fields.
    pub fn label(&self) -> String {
        if self.required {
            format!("{} *", self.name)
        } else {
            self.name.to_string()
        }
    }

    /// Position of `value` among the enum choices, or 0 when it is not one of them.
    pub fn choice_index(&self, value: &str) -> usize {
        self.choices.iter().position(|c| *c == value).unwrap_or(0)
    }
}

/// Ordered field list for one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub key: DatasetKey,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Look up a field spec by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Names of all required fields, in schema order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENDER: FieldSpec = FieldSpec::enumeration("gender", &["MALE", "FEMALE"]).required();

    #[test]
    fn new_field_defaults_to_optional() {
        let spec = FieldSpec::new("time", FieldKind::Text);
        assert!(!spec.required);
        assert!(spec.choices.is_empty());
        assert_eq!(spec.label(), "time");
    }

    #[test]
    fn required_field_label_is_starred() {
        let spec = FieldSpec::new("id", FieldKind::Text).required();
        assert!(spec.required);
        assert_eq!(spec.label(), "id *");
    }

    #[test]
    fn enumeration_keeps_choices_in_order() {
        assert_eq!(GENDER.kind, FieldKind::Enum);
        assert_eq!(GENDER.choices, &["MALE", "FEMALE"]);
    }

    #[test]
    fn choice_index_falls_back_to_first() {
        assert_eq!(GENDER.choice_index("FEMALE"), 1);
        assert_eq!(GENDER.choice_index("female"), 0);
        assert_eq!(GENDER.choice_index(""), 0);
    }

    #[test]
    fn numeric_kinds() {
        assert!(FieldKind::Integer.is_numeric());
        assert!(FieldKind::Float.is_numeric());
        assert!(!FieldKind::Date.is_numeric());
        assert!(!FieldKind::Boolean.is_numeric());
    }
}
