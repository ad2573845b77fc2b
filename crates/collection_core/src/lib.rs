//! Core record store for the personal collection catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use catalog::{seed_categories_if_missing, Catalog, DEFAULT_CATEGORIES};
pub use config::{CatalogConfig, StoragePaths};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemDraft, ItemFieldIssue, ItemId, ItemValidationError};
pub use repo::category_repo::{CategoryRepository, JsonCategoryRepository};
pub use repo::collector_repo::{CollectorNameRepository, JsonCollectorNameRepository};
pub use repo::item_repo::{ItemRecord, ItemRepository, JsonItemRepository};
pub use repo::{RepoError, RepoResult};
pub use service::category_registry::CategoryRegistry;
pub use service::collector::CollectorName;
pub use service::item_store::{ItemStore, StoreError};
pub use storage::{StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
