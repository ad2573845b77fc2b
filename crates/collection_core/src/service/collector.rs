//! Collector display name holder.
//!
//! # Invariants
//! - The name is set at most once per session.
//! - A missing, blank, or empty stored name means "not set".

use crate::repo::collector_repo::CollectorNameRepository;
use crate::repo::{RepoError, RepoResult};
use log::{error, info};

pub struct CollectorName<R: CollectorNameRepository> {
    repo: R,
    name: Option<String>,
}

impl<R: CollectorNameRepository> CollectorName<R> {
    pub fn new(repo: R) -> Self {
        Self { repo, name: None }
    }

    /// Reads the stored name. Leaves the name unset when nothing is stored.
    pub fn load(&mut self) -> RepoResult<()> {
        let stored = self.repo.read_name()?;
        self.name = stored.filter(|name| !name.trim().is_empty());
        info!(
            "event=collector_load module=collector status=ok is_set={}",
            self.name.is_some()
        );
        Ok(())
    }

    /// Persists `name` and holds it for the rest of the session.
    ///
    /// The file is written first; the name is only held once that succeeds.
    ///
    /// # Errors
    /// - `CollectorNameAlreadySet` when a name is already held; nothing is
    ///   written in that case.
    /// - Storage errors from the write.
    pub fn set_and_persist(&mut self, name: impl Into<String>) -> RepoResult<()> {
        if self.name.is_some() {
            return Err(RepoError::CollectorNameAlreadySet);
        }

        let name = name.into();
        if let Err(err) = self.repo.write_name(&name) {
            error!(
                "event=collector_set module=collector status=error error={}",
                err
            );
            return Err(err);
        }
        self.name = Some(name);
        info!("event=collector_set module=collector status=ok");
        Ok(())
    }

    pub fn get(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.name.is_some()
    }
}
