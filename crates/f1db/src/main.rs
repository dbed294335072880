//! # f1db CLI Architecture
//!
//! f1db ships with a command-line client, but the binary is intentionally thin:
//! the CLI lives in `src/cli/`, while this file only invokes `cli::run()` and
//! handles process termination.
//!
//! ## Workspace Structure
//!
//! f1db is organized as a Cargo workspace with two crates:
//! - `crates/f1dbapp/` — Core library with the schema registry, coercion,
//!   validation, forms and the record store
//! - `crates/f1db/` — This CLI tool, depends on the `f1dbapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/f1db/src/cli/)                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring: config, logging, store (commands.rs)     │
//! │  - Per-command handlers (handlers.rs)                       │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/f1dbapp/src/api.rs)                      │
//! │  - Resolves dataset names, parses field=value inputs        │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer is responsible
//! for **all** user-facing concerns: argument parsing, context initialization,
//! dispatch, error handling, and rendering.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to the code, integration tests against a
//!   temporary data directory.
//! - **CLI**: rendering is unit tested with canned `CmdResult` data; end-to-end
//!   tests in `tests/` run the binary with `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
