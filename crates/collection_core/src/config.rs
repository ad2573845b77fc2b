//! Runtime configuration for the catalog.
//!
//! # Responsibility
//! - Resolve data/log directories and log level from the environment.
//! - Derive the three record paths from the data directory.
//!
//! # Invariants
//! - Resolved directories are absolute.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

pub const ENV_HOME: &str = "COLLECTION_HOME";
pub const ENV_LOG_DIR: &str = "COLLECTION_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "COLLECTION_LOG_LEVEL";

const DEFAULT_DATA_DIR: &str = "UserFiles";
const ITEMS_FILE_NAME: &str = "items.json";
const CATEGORIES_FILE_NAME: &str = "type.json";
const COLLECTOR_NAME_FILE_NAME: &str = "name.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl CatalogConfig {
    /// Config rooted at `data_dir` with logs in `<data_dir>/logs`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            log_dir: data_dir.join("logs"),
            data_dir,
            log_level: default_log_level().to_string(),
        }
    }

    /// Reads `COLLECTION_HOME`, `COLLECTION_LOG_DIR` and
    /// `COLLECTION_LOG_LEVEL`, falling back to `./UserFiles`,
    /// `<data_dir>/logs` and the build-mode default level.
    ///
    /// # Errors
    /// - Fails when the current directory is needed and cannot be read.
    pub fn from_env() -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        let data_dir = non_empty_env(ENV_HOME).unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let mut config = Self::new(absolutize(&cwd, Path::new(&data_dir)));

        if let Some(log_dir) = non_empty_env(ENV_LOG_DIR) {
            config.log_dir = absolutize(&cwd, Path::new(&log_dir));
        }
        if let Some(level) = non_empty_env(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        Ok(config)
    }

    /// Moves the data directory to `data_dir`. A log directory that still
    /// sits at its default location moves along with it.
    pub fn rooted_at(mut self, data_dir: impl Into<PathBuf>) -> Self {
        let default_log_dir = self.log_dir == self.data_dir.join("logs");
        self.data_dir = data_dir.into();
        if default_log_dir {
            self.log_dir = self.data_dir.join("logs");
        }
        self
    }

    pub fn storage_paths(&self) -> StoragePaths {
        StoragePaths::in_dir(&self.data_dir)
    }
}

/// Locations of the three persisted records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub items: PathBuf,
    pub categories: PathBuf,
    pub collector_name: PathBuf,
}

impl StoragePaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            items: dir.join(ITEMS_FILE_NAME),
            categories: dir.join(CATEGORIES_FILE_NAME),
            collector_name: dir.join(COLLECTOR_NAME_FILE_NAME),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
