// src/application/catalog_cache.rs
use std::sync::Arc;

use crate::application::{CatalogLoader, RecordStore};
use crate::domain::{Catalog, DomainError};
use tracing::{debug, info};

/// A catalog together with the generation it was loaded in.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub generation: u64,
    pub catalog: Arc<Catalog>,
}

/// Memoized catalog keyed by an explicit generation counter.
///
/// The catalog is loaded lazily on the first [`CatalogCache::snapshot`] and
/// reused until [`CatalogCache::reload`], [`CatalogCache::invalidate`] or a
/// [`CatalogCache::write`] drops it. Every successful load bumps the
/// generation.
pub struct CatalogCache<R: RecordStore> {
    loader: CatalogLoader<R>,
    generation: u64,
    current: Option<Arc<Catalog>>,
}

impl<R: RecordStore> CatalogCache<R> {
    pub fn new(repository: R) -> Self {
        Self {
            loader: CatalogLoader::new(repository),
            generation: 0,
            current: None,
        }
    }

    /// Generation of the most recent successful load; 0 before any load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// Current catalog, loading it first if nothing is cached.
    pub fn snapshot(&mut self) -> Result<CatalogSnapshot, DomainError> {
        if let Some(catalog) = &self.current {
            debug!(generation = self.generation, "Reusing cached catalog");
            return Ok(CatalogSnapshot {
                generation: self.generation,
                catalog: Arc::clone(catalog),
            });
        }

        let catalog = Arc::new(self.loader.load()?);
        self.generation += 1;
        self.current = Some(Arc::clone(&catalog));
        info!(generation = self.generation, size = catalog.len(), "Catalog generation loaded");

        Ok(CatalogSnapshot {
            generation: self.generation,
            catalog,
        })
    }

    /// Drop the cached catalog and load a fresh one.
    ///
    /// If the load fails the cache stays empty; the previous generation is
    /// not served again.
    pub fn reload(&mut self) -> Result<CatalogSnapshot, DomainError> {
        self.invalidate();
        self.snapshot()
    }

    pub fn invalidate(&mut self) {
        if self.current.take().is_some() {
            debug!(generation = self.generation, "Invalidated cached catalog");
        }
    }

    /// Run a write against the store, then invalidate the cache.
    ///
    /// Holding `&mut self` for the whole operation keeps writers serialized
    /// and keeps loads from interleaving with them.
    pub fn write<T>(
        &mut self,
        op: impl FnOnce(&mut R) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let result = op(self.loader.repository_mut());
        self.invalidate();
        result
    }
}
