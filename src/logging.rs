//! src/logging.rs
//!
//! Tracing setup.
//!
//! The terminal UI owns stdout and stderr, so events are written to the file
//! named by `PANEL_GLOW_LOG`. Without it no subscriber is installed and every
//! `tracing` macro is a no-op.
//!
//! Environment variables:
//!   PANEL_GLOW_LOG     # log file path (unset = no logging)
//!   PANEL_GLOW_DEBUG   # default filter `debug` instead of `info`
//!   RUST_LOG           # fine-grained filter, wins over both defaults

use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::eyre::{WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Install a file-backed `fmt` subscriber if `config.file` is set.
pub fn init_tracing(config: &LogConfig) -> color_eyre::Result<()> {
    let Some(path) = config.file.as_ref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("open log file {}", path.display()))?;

    let filter = if config.debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| eyre!(err))
}
