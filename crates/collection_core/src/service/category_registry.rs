//! Ordered category labels offered to item forms.
//!
//! # Invariants
//! - Label order is insertion order; `add` appends at the end.
//! - The registry does not check uniqueness or emptiness.
//! - Every `add` rewrites the whole record.

use crate::repo::category_repo::CategoryRepository;
use crate::repo::RepoResult;
use log::{error, info};

pub struct CategoryRegistry<R: CategoryRepository> {
    repo: R,
    labels: Vec<String>,
}

impl<R: CategoryRepository> CategoryRegistry<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            labels: Vec::new(),
        }
    }

    /// Replaces the in-memory labels with the persisted list.
    ///
    /// # Errors
    /// - `MissingCategories` when the record was never created. This is a
    ///   startup precondition; the composing application seeds the file.
    pub fn load(&mut self) -> RepoResult<()> {
        self.labels.clear();
        match self.repo.read_categories() {
            Ok(labels) => {
                self.labels = labels;
                info!(
                    "event=categories_load module=registry status=ok count={}",
                    self.labels.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=categories_load module=registry status=error error={}",
                    err
                );
                Err(err)
            }
        }
    }

    /// Appends `label` and rewrites the persisted list.
    ///
    /// The label stays in memory even when the write fails.
    pub fn add(&mut self, label: impl Into<String>) -> RepoResult<()> {
        self.labels.push(label.into());
        if let Err(err) = self.repo.write_categories(&self.labels) {
            error!(
                "event=category_add module=registry status=error count={} error={}",
                self.labels.len(),
                err
            );
            return Err(err);
        }
        info!(
            "event=category_add module=registry status=ok count={}",
            self.labels.len()
        );
        Ok(())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Owned copy of the current labels.
    pub fn snapshot(&self) -> Vec<String> {
        self.labels.clone()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|known| known == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
