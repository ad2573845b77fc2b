//! Persistence contracts and JSON-file implementations.
//!
//! # Responsibility
//! - Define one repository contract per persisted record (items, categories,
//!   collector name).
//! - Keep file layout and encoding details out of the service layer.
//!
//! # Invariants
//! - Writes replace the whole record; there are no partial updates.
//! - Repository APIs return semantic errors (`MissingCategories`,
//!   `InvalidData`) in addition to storage transport errors.

use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod category_repo;
pub mod collector_repo;
pub mod item_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for catalog persistence and hydration.
#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    InvalidData(String),
    /// The categories file must exist before the catalog is opened.
    MissingCategories(PathBuf),
    /// The collector name is set once per session.
    CollectorNameAlreadySet,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::MissingCategories(path) => {
                write!(f, "categories file not found: {}", path.display())
            }
            Self::CollectorNameAlreadySet => write!(f, "collector name is already set"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
