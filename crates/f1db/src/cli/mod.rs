//! # CLI Behavior
//!
//! This is **one possible UI client** for f1db, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Dataset Selection
//!
//! Every command works on one dataset, chosen with `--dataset/-d`. Both the
//! display name (`"Race Results"`) and the key (`race-results`) are accepted.
//! The default is `Drivers`.
//!
//! ### Naked Execution (`f1db`)
//!
//! Running `f1db` with no subcommand lists the selected dataset.
//!
//! ### Field Inputs
//!
//! `add` and `edit` take `field=value` pairs. Values are parsed according to
//! the field kind, so `totalPoints=12.5`, `dateOfBirth=1997-09-30` and
//! `polePosition=yes` all do what you expect.
//!
//! ### Import Sources
//!
//! `import` reads a file when given one and standard input otherwise. The text
//! goes through the same paste buffer a form would use.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup (logging, config, store) and dispatch
//! - `handlers`: Per-command handlers that call the API and print
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap, help text

mod commands;
mod handlers;
mod render;
pub mod setup;

pub use commands::run;
