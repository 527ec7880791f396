// User preferences persisted as TOML in the platform config directory

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::tms_error::ConfigError;

/// Display and logging preferences. No game state is stored here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub ascii_icons: bool, // Use ASCII fallback glyphs
    pub show_help: bool,   // Show the key help line under the board
    pub log_level: String, // Default tracing filter when RUST_LOG is unset
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ascii_icons: false,
            show_help: true,
            log_level: "info".to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "xhbl", "tmines")
}

/// Default config file location, e.g. ~/.config/tmines/tmines.toml on Linux.
/// Falls back to the current directory if no home directory is known.
pub fn config_path() -> Option<PathBuf> {
    match project_dirs() {
        Some(proj) => Some(proj.config_dir().join("tmines.toml")),
        None => std::env::current_dir().ok().map(|d| d.join("tmines.toml")),
    }
}

/// Directory for the log file
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|p| p.data_local_dir().to_path_buf())
}

/// Parse a config file
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&s)?)
}

/// Write a config file, creating parent directories as needed
pub fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let s = toml::to_string(cfg)?;
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, s).map_err(io_err)
}

/// Load configuration from disk, or write the defaults if the file is missing.
/// A broken file is reported and replaced by defaults for this run only.
pub fn load_or_create_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    if path.exists() {
        return match read_config(path) {
            Ok(cfg) => {
                info!(path = %path.display(), "config loaded");
                cfg
            }
            Err(e) => {
                warn!("{e}; using defaults");
                Config::default()
            }
        };
    }
    let cfg = Config::default();
    match save_config(&cfg, path) {
        Ok(()) => info!(path = %path.display(), "default config created"),
        Err(e) => warn!("{e}"),
    }
    cfg
}
