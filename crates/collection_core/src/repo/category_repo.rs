//! Category label persistence.

use super::{RepoError, RepoResult};
use crate::storage::{read_document, write_document};
use std::path::{Path, PathBuf};

/// Repository interface for the categories record.
pub trait CategoryRepository {
    /// Returns stored labels in order.
    ///
    /// # Errors
    /// - `MissingCategories` when the record does not exist.
    /// - `InvalidData` when it exists but holds no list.
    fn read_categories(&self) -> RepoResult<Vec<String>>;
    fn write_categories(&self, labels: &[String]) -> RepoResult<()>;
}

/// Category labels stored as a JSON array of strings.
#[derive(Debug, Clone)]
pub struct JsonCategoryRepository {
    path: PathBuf,
}

impl JsonCategoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CategoryRepository for JsonCategoryRepository {
    fn read_categories(&self) -> RepoResult<Vec<String>> {
        if !self.path.exists() {
            return Err(RepoError::MissingCategories(self.path.clone()));
        }
        read_document::<Vec<String>>(&self.path)?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "categories file `{}` is empty",
                self.path.display()
            ))
        })
    }

    fn write_categories(&self, labels: &[String]) -> RepoResult<()> {
        write_document(&self.path, labels)?;
        Ok(())
    }
}
