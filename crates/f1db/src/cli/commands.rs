//! # CLI Layer
//!
//! This module is **one possible UI client** for f1db. It is the **only** place
//! in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a `tracing` subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Logging, configuration, and the file-backed store
//! 3. **Dispatch**: Route commands to handlers
//! 4. **Error Handling**: Errors bubble up to `main`, which prints them and exits 1

use anyhow::{Context, Result};
use clap::Parser;
use f1dbapp::api::F1dbApi;
use f1dbapp::config::F1dbConfig;
use f1dbapp::store::fs_backend::FsBackend;
use f1dbapp::store::RecordStore;
use tracing_subscriber::EnvFilter;

use super::handlers::Handlers;
use super::setup::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("resolving the working directory")?;
    let config = F1dbConfig::load(&cwd)?;
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.data_dir_in(&cwd));
    tracing::debug!(data_dir = %data_dir.display(), dataset = %cli.dataset, "starting");

    let store = RecordStore::with_backend(FsBackend::new(data_dir))
        .with_copy_suffixes(config.copy_suffixes());
    let mut api = F1dbApi::new(store);

    Handlers::new(&mut api, &cli.dataset, cli.output).dispatch(cli.command)
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
