//! src/logging.rs
//!
//! Diagnostic log setup. The terminal belongs to the UI, so events go to a
//! plain-text file in the working directory instead of stdout.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{WrapErr, eyre};

pub fn init(path: &Path) -> color_eyre::Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))
}
