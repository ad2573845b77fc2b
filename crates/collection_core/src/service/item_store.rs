//! In-memory item collection and its persistence entry points.
//!
//! # Responsibility
//! - Own the authoritative ordered list of items.
//! - Assign ids on create and flush/reload through an `ItemRepository`.
//!
//! # Invariants
//! - Ids are unique within the collection; a new id is `max + 1` (or `1`).
//! - `create` and `delete_at` only touch memory; `save` persists.
//! - `load` rebuilds every record through the create path, so ids come back
//!   as `1..=N` in file order. Persisted ids are not restored.
//! - Out-of-range deletes never panic and leave the collection unchanged.

use crate::model::item::{Item, ItemDraft, ItemId};
use crate::repo::item_repo::{ItemRecord, ItemRepository};
use crate::repo::RepoResult;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Error for in-memory collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    PositionOutOfRange { position: usize, len: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PositionOutOfRange { position, len } => write!(
                f,
                "item position {position} is out of range for collection of {len}"
            ),
        }
    }
}

impl Error for StoreError {}

/// Ordered item collection backed by a repository.
pub struct ItemStore<R: ItemRepository> {
    repo: R,
    items: Vec<Item>,
}

impl<R: ItemRepository> ItemStore<R> {
    /// Creates an empty store; call `load()` to hydrate it.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            items: Vec::new(),
        }
    }

    /// Appends a new item with a fresh id and returns it.
    ///
    /// Does not persist and does not check for duplicates.
    pub fn create(&mut self, draft: ItemDraft) -> &Item {
        let id = self.next_id();
        let index = self.items.len();
        self.items.push(Item::from_draft(id, draft));
        &self.items[index]
    }

    /// Returns the first item with `id`, if any.
    pub fn get_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Mutable lookup for in-place edits. The id itself stays read-only.
    pub fn get_by_id_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Removes and returns the item at zero-based `position`.
    ///
    /// # Errors
    /// - `PositionOutOfRange` when `position >= len()`; nothing is removed.
    pub fn delete_at(&mut self, position: usize) -> Result<Item, StoreError> {
        let len = self.items.len();
        if position >= len {
            warn!(
                "event=item_delete module=store status=rejected position={} len={}",
                position, len
            );
            return Err(StoreError::PositionOutOfRange { position, len });
        }

        let removed = self.items.remove(position);
        info!(
            "event=item_delete module=store status=ok position={} id={}",
            position,
            removed.id()
        );
        Ok(removed)
    }

    /// Writes the whole collection, replacing earlier content.
    ///
    /// On failure memory is left as is and the error is returned, so the
    /// caller can tell the user the last change may not be durable.
    pub fn save(&self) -> RepoResult<()> {
        let started_at = Instant::now();
        let records: Vec<ItemRecord> = self.items.iter().map(ItemRecord::from).collect();

        match self.repo.write_items(&records) {
            Ok(()) => {
                info!(
                    "event=items_save module=store status=ok count={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=items_save module=store status=error count={} duration_ms={} error={}",
                    records.len(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Replaces the collection with the persisted one.
    ///
    /// A missing or empty record yields an empty collection. The collection is
    /// cleared before reading, so a failed read also leaves it empty.
    pub fn load(&mut self) -> RepoResult<()> {
        let started_at = Instant::now();
        self.items.clear();

        let records = match self.repo.read_items() {
            Ok(records) => records,
            Err(err) => {
                error!(
                    "event=items_load module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err);
            }
        };

        for record in records {
            self.create(record.into());
        }
        info!(
            "event=items_load module=store status=ok count={} duration_ms={}",
            self.items.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    /// Items in collection order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id of the item shown at `position`, for row-based selection.
    pub fn id_at(&self, position: usize) -> Option<ItemId> {
        self.items.get(position).map(Item::id)
    }

    /// Items whose category equals `category` exactly, in collection order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    fn next_id(&self) -> ItemId {
        self.items.iter().map(Item::id).max().unwrap_or(0) + 1
    }
}
