//! Value types.
//!
//! Two representations exist for a field value:
//!
//! - [`Scalar`]: the wire form, exactly what a JSON document holds. Records are
//!   maps of scalars, so loading and saving never loses information. Nested
//!   arrays and objects ride along as [`Scalar::Raw`].
//! - [`FieldValue`]: the typed form used by forms and coercion, where dates are
//!   real dates and enum values are checked against their choices.
//!
//! [`crate::coerce`] converts between them under the rules of a [`crate::schema::FieldKind`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// A JSON scalar as stored in a dataset file.
///
/// Dates travel as [`Scalar::Text`]; only the schema knows a string is a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// Arrays, objects and numbers outside `i64`/`f64`, written back as read.
    /// Declared fields read it as null.
    Raw(Value),
}

impl Scalar {
    pub fn text(s: impl Into<String>) -> Self {
        Scalar::Text(s.into())
    }

    /// True only for the empty string. Null, zero and false are not empty.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Bool(b),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Scalar::Integer(i),
                (None, Some(x)) if n.is_f64() => Scalar::Float(x),
                _ => Scalar::Raw(Value::Number(n)),
            },
            Value::String(s) => Scalar::Text(s),
            nested @ (Value::Array(_) | Value::Object(_)) => Scalar::Raw(nested),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Integer(i) => Value::Number(i.into()),
            Scalar::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            Scalar::Text(s) => Value::String(s),
            Scalar::Raw(value) => value,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Raw(value) => write!(f, "{}", value),
        }
    }
}

/// A typed field value, as held by a form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    /// No value (optional field left blank, or a value that failed to parse)
    Null,
    /// Text and enum values
    Text(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
    Boolean(bool),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}
