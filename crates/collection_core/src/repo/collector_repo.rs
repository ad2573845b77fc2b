//! Collector name persistence.

use super::RepoResult;
use crate::storage::{read_document, write_document};
use std::path::{Path, PathBuf};

/// Repository interface for the collector name record.
pub trait CollectorNameRepository {
    /// Returns `None` when no name was stored yet.
    fn read_name(&self) -> RepoResult<Option<String>>;
    fn write_name(&self, name: &str) -> RepoResult<()>;
}

/// Collector name stored as a single JSON string.
#[derive(Debug, Clone)]
pub struct JsonCollectorNameRepository {
    path: PathBuf,
}

impl JsonCollectorNameRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CollectorNameRepository for JsonCollectorNameRepository {
    fn read_name(&self) -> RepoResult<Option<String>> {
        Ok(read_document::<String>(&self.path)?)
    }

    fn write_name(&self, name: &str) -> RepoResult<()> {
        write_document(&self.path, name)?;
        Ok(())
    }
}
