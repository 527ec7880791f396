// Logging to a file; the terminal itself belongs to the game screen

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber that appends to `<dir>/tmines.log`.
///
/// `RUST_LOG` wins over `default_level`. Returns the log file path, or
/// None if the file could not be opened, in which case nothing is logged.
pub fn init(dir: Option<&Path>, default_level: &str) -> Option<PathBuf> {
    let dir = dir?;
    fs::create_dir_all(dir).ok()?;
    let path = dir.join("tmines.log");
    let file = File::options().create(true).append(true).open(&path).ok()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;
    Some(path)
}
