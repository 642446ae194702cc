//! In-memory record catalog
//!
//! The catalog is an explicitly owned object handed to whoever serves
//! requests; there is no module-level state. Every mutation resolves its
//! target by identifier and applies the change under a single lock, so an
//! interleaved removal surfaces as [`CatalogError::RecordNotFound`] rather
//! than a write to the wrong record.

use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::error::{CatalogError, Result};
use crate::record::{Repository, RepositoryDraft};

/// In-memory, insertion-ordered collection of repository records.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Mutex<Vec<Repository>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Repository>>> {
        self.records
            .lock()
            .map_err(|_| CatalogError::Store("Lock poisoned".into()))
    }

    /// Snapshot of all records in insertion order.
    pub fn list(&self) -> Result<Vec<Repository>> {
        Ok(self.lock()?.clone())
    }

    /// Append a new record built from the draft and return it.
    pub fn create(&self, draft: RepositoryDraft) -> Result<Repository> {
        let record = Repository::new(draft);

        self.lock()?.push(record.clone());
        Ok(record)
    }

    /// Check whether a record with the given identifier exists.
    pub fn contains(&self, id: &Uuid) -> Result<bool> {
        Ok(self.lock()?.iter().any(|record| record.id == *id))
    }

    /// Overwrite title, url and techs of the record with the given
    /// identifier, preserving its identifier and like count.
    pub fn update(&self, id: &Uuid, draft: RepositoryDraft) -> Result<Repository> {
        let mut records = self.lock()?;

        let record = records
            .iter_mut()
            .find(|record| record.id == *id)
            .ok_or(CatalogError::RecordNotFound(*id))?;

        record.title = draft.title;
        record.url = draft.url;
        record.techs = draft.techs;

        Ok(record.clone())
    }

    /// Remove the record with the given identifier.
    pub fn remove(&self, id: &Uuid) -> Result<()> {
        let mut records = self.lock()?;

        let index = records
            .iter()
            .position(|record| record.id == *id)
            .ok_or(CatalogError::RecordNotFound(*id))?;

        records.remove(index);
        Ok(())
    }

    /// Increment the like counter of the record with the given identifier
    /// by exactly one and return the updated record.
    pub fn like(&self, id: &Uuid) -> Result<Repository> {
        let mut records = self.lock()?;

        let record = records
            .iter_mut()
            .find(|record| record.id == *id)
            .ok_or(CatalogError::RecordNotFound(*id))?;

        record.likes += 1;

        Ok(record.clone())
    }

    /// Get number of live records
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> RepositoryDraft {
        RepositoryDraft {
            title: title.to_string(),
            url: format!("https://github.com/acme/{title}"),
            techs: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn test_catalog_basic_operations() {
        let catalog = Catalog::new();

        let record = catalog.create(draft("shelf")).unwrap();
        assert_eq!(record.likes, 0);
        assert!(catalog.contains(&record.id).unwrap());

        let listed = catalog.list().unwrap();
        assert_eq!(listed, vec![record.clone()]);

        catalog.remove(&record.id).unwrap();
        assert!(!catalog.contains(&record.id).unwrap());
        assert!(catalog.list().unwrap().is_empty());
    }

    #[test]
    fn test_catalog_not_found() {
        let catalog = Catalog::new();
        let id = Uuid::new_v4();

        match catalog.like(&id) {
            Err(CatalogError::RecordNotFound(missing)) => assert_eq!(missing, id),
            _ => panic!("Expected RecordNotFound error"),
        }

        assert!(catalog.update(&id, draft("ghost")).is_err());
        assert!(catalog.remove(&id).is_err());
    }

    #[test]
    fn test_catalog_utilities() {
        let catalog = Catalog::new();

        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());

        catalog.create(draft("one")).unwrap();
        catalog.create(draft("two")).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }
}
