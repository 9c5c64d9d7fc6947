//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to
//! `cardinal.log` in the local data directory instead.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use cardinal_config::project_dirs;
use color_eyre::eyre::{WrapErr, eyre};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "cardinal.log";

/// Install the global subscriber. `RUST_LOG` overrides `default_filter`.
///
/// Returns the path of the log file, or `None` when there is no home
/// directory to keep one in.
pub fn init(default_filter: &str) -> color_eyre::Result<Option<PathBuf>> {
    let Ok(dirs) = project_dirs() else {
        return Ok(None);
    };
    let dir = dirs.data_local_dir();
    fs::create_dir_all(dir).wrap_err_with(|| format!("failed to create {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = File::create(&path).wrap_err_with(|| format!("failed to open {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .wrap_err_with(|| format!("invalid log filter {default_filter:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))?;

    Ok(Some(path))
}
