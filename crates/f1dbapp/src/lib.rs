//! # f1db Architecture
//!
//! f1db is a **UI-agnostic editing engine** for the f1db JSON datasets (drivers,
//! constructors and race results). It is a library that happens to have a CLI
//! client, not the other way around.
//!
//! ## Schema as Data
//!
//! Each dataset is described once, in [`schema::registry`], as an ordered list
//! of typed fields. One generic interpreter reads those descriptions to build
//! forms ([`form`]), coerce values ([`coerce`]) and validate records
//! ([`validation`]). Adding a field is a one-line change in the registry.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (f1db crate)                                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (dataset names, field=value pairs)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Drafts, submissions and store calls                      │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, RecordStore over a StorageBackend       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types and never writes to stdout or stderr. Diagnostics go through
//! `tracing`; installing a subscriber is the binary's job.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`schema`]: Dataset registry and field specifications
//! - [`value`]: Wire scalars and typed field values
//! - [`model`]: The ordered [`model::Record`]
//! - [`coerce`]: Conversions between stored and typed values
//! - [`validation`]: Required-field checks
//! - [`form`]: Form descriptors, drafts and the form context
//! - [`views`]: Labels, filters and summaries
//! - [`dataset`]: Dataset selection by display name
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod coerce;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod form;
pub mod model;
pub mod schema;
pub mod store;
pub mod validation;
pub mod value;
pub mod views;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
