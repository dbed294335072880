//! # Schema Registry
//!
//! Every dataset is described by a declarative [`Schema`]: an ordered list of
//! [`FieldSpec`]s. The same schema drives everything else in the crate:
//!
//! - **Forms**: one input per field, in schema order ([`crate::form`])
//! - **Validation**: required fields must be present and non-empty ([`crate::validation`])
//! - **Coercion**: incoming values are normalized to the declared kind ([`crate::coerce`])
//!
//! ## Field Kinds
//!
//! | Kind | Storage | Examples |
//! |------|---------|----------|
//! | `Text` | string or null | `id`, `positionText` |
//! | `Integer` | whole number or null | `totalRaceWins`, `timeMillis` |
//! | `Float` | floating number or null | `totalPoints` |
//! | `Date` | `YYYY-MM-DD` string or null | `dateOfBirth` |
//! | `Boolean` | true/false | `polePosition` |
//! | `Enum` | one of `choices` | `gender` |
//!
//! Schemas are static data and never change at runtime. Adding a field means
//! adding one line to [`registry`].

pub mod registry;
mod spec;

pub use registry::{schema_for, DatasetKey, CONSTRUCTORS, DRIVERS, RACE_RESULTS};
pub use spec::{FieldKind, FieldSpec, Schema};
