//! Item record contract and JSON-file implementation.
//!
//! # Responsibility
//! - Define the on-disk shape of one item (`ItemRecord`).
//! - Read/write the ordered item list as a whole.
//!
//! # Invariants
//! - File order is collection order.
//! - `id` is written for reference but is optional on read.
//! - Dates are `YYYY-MM-DD`.

use super::RepoResult;
use crate::model::item::{Item, ItemDraft, ItemId};
use crate::storage::{read_document, write_document};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted shape of one item.
///
/// `item_type`, `doa` and `dom` are accepted on read so files written by the
/// earlier desktop build still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    pub title: String,
    #[serde(alias = "item_type")]
    pub category: String,
    #[serde(alias = "doa")]
    pub acquired_date: NaiveDate,
    #[serde(alias = "dom")]
    pub manufactured_date: NaiveDate,
    pub description: String,
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            id: Some(item.id()),
            title: item.title.clone(),
            category: item.category.clone(),
            acquired_date: item.acquired_date,
            manufactured_date: item.manufactured_date,
            description: item.description.clone(),
        }
    }
}

impl From<ItemRecord> for ItemDraft {
    fn from(record: ItemRecord) -> Self {
        ItemDraft {
            title: record.title,
            category: record.category,
            acquired_date: record.acquired_date,
            manufactured_date: record.manufactured_date,
            description: record.description,
        }
    }
}

/// Repository interface for the items record.
pub trait ItemRepository {
    /// Returns persisted records in file order; empty when nothing is stored.
    fn read_items(&self) -> RepoResult<Vec<ItemRecord>>;
    /// Replaces the persisted record with `records`.
    fn write_items(&self, records: &[ItemRecord]) -> RepoResult<()>;
}

/// Items stored as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonItemRepository {
    path: PathBuf,
}

impl JsonItemRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemRepository for JsonItemRepository {
    fn read_items(&self) -> RepoResult<Vec<ItemRecord>> {
        Ok(read_document::<Vec<ItemRecord>>(&self.path)?.unwrap_or_default())
    }

    fn write_items(&self, records: &[ItemRecord]) -> RepoResult<()> {
        write_document(&self.path, records)?;
        Ok(())
    }
}
