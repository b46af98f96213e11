// src/application/catalog_loader.rs
use crate::application::RecordStore;
use crate::domain::{Catalog, DomainError, Record};
use tracing::{debug, info, instrument};

/// Reads the whole store and turns it into a [`Catalog`].
///
/// Holds no state besides the store: every call to [`CatalogLoader::load`]
/// is a fresh read.
pub struct CatalogLoader<R: RecordStore> {
    repository: R,
}

impl<R: RecordStore> CatalogLoader<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Load all records, dropping the ones without a quote.
    ///
    /// Store failures surface as [`DomainError::StoreUnavailable`]; nothing
    /// is substituted for the missing data.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&mut self) -> Result<Catalog, DomainError> {
        let raw = self.repository.list_all()?;
        let fetched = raw.len();

        let records: Vec<Record> = raw.into_iter().filter_map(|r| r.into_record()).collect();

        let dropped = fetched - records.len();
        if dropped > 0 {
            debug!(dropped, "Dropped records without a quote");
        }
        info!(fetched, loaded = records.len(), "Loaded quote catalog");

        Ok(Catalog::new(records))
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }
}
