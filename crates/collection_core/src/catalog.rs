//! Startup composition of the catalog state.
//!
//! # Responsibility
//! - Build the registry, collector name and item store over JSON files.
//! - Hydrate all three before any caller touches them.
//!
//! # Invariants
//! - `Catalog::open` fails when the categories file does not exist.
//! - Callers hold one `Catalog` for the whole session and pass it by
//!   reference; there is no global state.

use crate::config::StoragePaths;
use crate::repo::category_repo::{CategoryRepository, JsonCategoryRepository};
use crate::repo::collector_repo::JsonCollectorNameRepository;
use crate::repo::item_repo::JsonItemRepository;
use crate::repo::{RepoError, RepoResult};
use crate::service::category_registry::CategoryRegistry;
use crate::service::collector::CollectorName;
use crate::service::item_store::ItemStore;
use log::{error, info};

/// Labels written on first run when no categories file exists yet.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Records", "Stamps", "Coins", "Books"];

pub struct Catalog {
    pub items: ItemStore<JsonItemRepository>,
    pub categories: CategoryRegistry<JsonCategoryRepository>,
    pub collector: CollectorName<JsonCollectorNameRepository>,
}

impl Catalog {
    /// Opens and hydrates the catalog stored at `paths`.
    ///
    /// # Errors
    /// - `MissingCategories` when the categories file was never seeded.
    /// - Storage or decode errors from any of the three records.
    pub fn open(paths: &StoragePaths) -> RepoResult<Self> {
        let mut catalog = Self {
            items: ItemStore::new(JsonItemRepository::new(&paths.items)),
            categories: CategoryRegistry::new(JsonCategoryRepository::new(&paths.categories)),
            collector: CollectorName::new(JsonCollectorNameRepository::new(
                &paths.collector_name,
            )),
        };

        if let Err(err) = catalog.hydrate() {
            error!("event=catalog_open module=catalog status=error error={}", err);
            return Err(err);
        }
        info!(
            "event=catalog_open module=catalog status=ok items={} categories={} collector_set={}",
            catalog.items.len(),
            catalog.categories.len(),
            catalog.collector.is_set()
        );
        Ok(catalog)
    }

    fn hydrate(&mut self) -> RepoResult<()> {
        self.categories.load()?;
        self.collector.load()?;
        self.items.load()
    }
}

/// Writes `seeds` as the categories file unless one already exists.
///
/// Returns `true` when the file was created.
pub fn seed_categories_if_missing(paths: &StoragePaths, seeds: &[&str]) -> RepoResult<bool> {
    let repo = JsonCategoryRepository::new(&paths.categories);
    match repo.read_categories() {
        Ok(_) => Ok(false),
        Err(RepoError::MissingCategories(_)) => {
            let labels: Vec<String> = seeds.iter().map(|seed| seed.to_string()).collect();
            repo.write_categories(&labels)?;
            info!(
                "event=categories_seed module=catalog status=ok count={}",
                labels.len()
            );
            Ok(true)
        }
        Err(err) => Err(err),
    }
}
