//! # Type Coercion
//!
//! Converts between wire [`Scalar`]s and typed [`FieldValue`]s under the rules of
//! a [`FieldSpec`].
//!
//! ## Rules
//!
//! | Kind | Storage | Loading oddities |
//! |------|---------|------------------|
//! | `Text` | string or null | numbers/booleans become their text |
//! | `Enum` | one of `choices` | anything else becomes the first choice |
//! | `Integer` | whole number or null | floats are rounded, numeric text parsed |
//! | `Float` | floating number or null | integers widened, numeric text parsed |
//! | `Date` | `YYYY-MM-DD` or null | unparseable dates become null |
//! | `Boolean` | true/false | null is false, numbers are truthy when non-zero |
//!
//! Loading never fails: a corrupt value degrades that one field, it does not
//! abort the dataset. Typed user input ([`parse_input`]) is stricter and
//! reports [`F1dbError::InvalidInput`], except for enums which always fall
//! back to their first choice so a form can never get stuck.
//!
//! ## Normalization of Incoming Records
//!
//! [`normalize_record`] runs every declared field through `from_storage` and
//! back through `to_storage`. The record store applies it to records entering
//! the dataset (append, bulk append, replace, replace all), so a new integer
//! field is written as a whole number and a float field as a floating value,
//! however the value arrived. Records already on disk are written back as read.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{F1dbError, Result};
use crate::model::Record;
use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::value::{FieldValue, Scalar};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert a stored scalar into the typed value for `spec`.
pub fn from_storage(spec: &FieldSpec, scalar: &Scalar) -> FieldValue {
    match spec.kind {
        FieldKind::Text => match scalar {
            Scalar::Null | Scalar::Raw(_) => FieldValue::Null,
            Scalar::Text(s) => FieldValue::Text(s.clone()),
            other => FieldValue::Text(other.to_string()),
        },
        FieldKind::Enum => {
            let current = scalar.as_str().unwrap_or_default();
            let index = spec.choice_index(current);
            spec.choices
                .get(index)
                .map_or(FieldValue::Null, |choice| FieldValue::text(*choice))
        }
        FieldKind::Integer => match scalar {
            Scalar::Integer(i) => FieldValue::Integer(*i),
            Scalar::Float(x) => round_to_integer(*x),
            Scalar::Bool(b) => FieldValue::Integer(i64::from(*b)),
            Scalar::Text(s) => parse_integer(s).unwrap_or(FieldValue::Null),
            Scalar::Null | Scalar::Raw(_) => FieldValue::Null,
        },
        FieldKind::Float => match scalar {
            Scalar::Float(x) => FieldValue::Float(*x),
            Scalar::Integer(i) => FieldValue::Float(*i as f64),
            Scalar::Bool(b) => FieldValue::Float(if *b { 1.0 } else { 0.0 }),
            Scalar::Text(s) => parse_float(s).unwrap_or(FieldValue::Null),
            Scalar::Null | Scalar::Raw(_) => FieldValue::Null,
        },
        FieldKind::Date => match scalar {
            Scalar::Text(s) if !s.trim().is_empty() => match parse_date(s) {
                Some(date) => FieldValue::Date(date),
                None => {
                    tracing::warn!(field = spec.name, value = %s, "unparseable date, treating as empty");
                    FieldValue::Null
                }
            },
            _ => FieldValue::Null,
        },
        FieldKind::Boolean => FieldValue::Boolean(match scalar {
            Scalar::Bool(b) => *b,
            Scalar::Null | Scalar::Raw(_) => false,
            Scalar::Integer(i) => *i != 0,
            Scalar::Float(x) => *x != 0.0,
            Scalar::Text(s) => parse_bool(s).unwrap_or(!s.is_empty()),
        }),
    }
}

/// Convert a typed value into the scalar stored for `spec`.
///
/// Values of the wrong kind are coerced with the same rules as loading, so the
/// result always has the declared shape.
pub fn to_storage(spec: &FieldSpec, value: &FieldValue) -> Scalar {
    let typed = from_storage(spec, &loose_scalar(value));
    match typed {
        FieldValue::Null => Scalar::Null,
        FieldValue::Text(s) => Scalar::Text(s),
        FieldValue::Integer(i) => Scalar::Integer(i),
        FieldValue::Float(x) => Scalar::Float(x),
        FieldValue::Date(d) => Scalar::Text(d.format(DATE_FORMAT).to_string()),
        FieldValue::Boolean(b) => Scalar::Bool(b),
    }
}

/// Value of `spec` in `record`, with absent fields read as null (false for booleans).
pub fn read_field(spec: &FieldSpec, record: &Record) -> FieldValue {
    from_storage(spec, record.get(spec.name).unwrap_or(&Scalar::Null))
}

/// Normalize every declared field of `record` to its declared kind.
///
/// Key order, absent fields and fields unknown to the schema are left as they are.
pub fn normalize_record(schema: &Schema, record: &Record) -> Record {
    record
        .iter()
        .map(|(name, scalar)| {
            let normalized = match schema.field(name) {
                Some(spec) => to_storage(spec, &from_storage(spec, scalar)),
                None => scalar.clone(),
            };
            (name.clone(), normalized)
        })
        .collect()
}

/// Parse text typed by a user into a value for `spec`.
pub fn parse_input(spec: &FieldSpec, raw: &str) -> Result<FieldValue> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| F1dbError::InvalidInput {
        field: spec.name.to_string(),
        reason: format!("{} ({:?})", reason, raw),
    };

    match spec.kind {
        FieldKind::Text => Ok(FieldValue::text(raw)),
        FieldKind::Enum => Ok(from_storage(spec, &Scalar::text(trimmed))),
        _ if trimmed.is_empty() && spec.kind != FieldKind::Boolean => Ok(FieldValue::Null),
        FieldKind::Integer => parse_integer(trimmed).ok_or_else(|| invalid("expected a whole number")),
        FieldKind::Float => parse_float(trimmed).ok_or_else(|| invalid("expected a number")),
        FieldKind::Date => parse_date(trimmed)
            .map(FieldValue::Date)
            .ok_or_else(|| invalid("expected a date as YYYY-MM-DD")),
        FieldKind::Boolean => {
            if trimmed.is_empty() {
                return Ok(FieldValue::Boolean(false));
            }
            parse_bool(trimmed)
                .map(FieldValue::Boolean)
                .ok_or_else(|| invalid("expected true or false"))
        }
    }
}

/// Parse an ISO-8601 date. Date-times are accepted and truncated to their date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .or_else(|| s.parse::<NaiveDateTime>().ok().map(|dt| dt.date()))
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

fn loose_scalar(value: &FieldValue) -> Scalar {
    match value {
        FieldValue::Null => Scalar::Null,
        FieldValue::Text(s) => Scalar::Text(s.clone()),
        FieldValue::Integer(i) => Scalar::Integer(*i),
        FieldValue::Float(x) => Scalar::Float(*x),
        FieldValue::Date(d) => Scalar::Text(d.format(DATE_FORMAT).to_string()),
        FieldValue::Boolean(b) => Scalar::Bool(*b),
    }
}

/// Half away from zero. Values outside the `i64` range become null.
fn round_to_integer(x: f64) -> FieldValue {
    let rounded = x.round();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        FieldValue::Integer(rounded as i64)
    } else {
        FieldValue::Null
    }
}

fn parse_integer(s: &str) -> Option<FieldValue> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Some(FieldValue::Integer(i));
    }
    match s.parse::<f64>() {
        Ok(x) if x.is_finite() => Some(round_to_integer(x)),
        _ => None,
    }
}

fn parse_float(s: &str) -> Option<FieldValue> {
    match s.trim().parse::<f64>() {
        Ok(x) if x.is_finite() => Some(FieldValue::Float(x)),
        _ => None,
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Some(true),
        "false" | "no" | "n" | "0" | "off" => Some(false),
        _ => None,
    }
}
