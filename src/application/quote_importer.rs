// src/application/quote_importer.rs
use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::application::{CatalogCache, RecordStore};
use crate::domain::{DomainError, RawRecord};

/// Outcome of one import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub added: usize,
    pub skipped_duplicates: usize,
    pub skipped_invalid: usize,
}

/// Copies records from an external source into the store.
///
/// Quotes whose exact text is already stored are skipped, so running the
/// same import twice adds nothing the second time.
pub struct QuoteImporter<'a, R: RecordStore> {
    cache: &'a mut CatalogCache<R>,
}

impl<'a, R: RecordStore> QuoteImporter<'a, R> {
    pub fn new(cache: &'a mut CatalogCache<R>) -> Self {
        Self { cache }
    }

    pub fn import(&mut self, incoming: Vec<RawRecord>) -> Result<ImportReport, DomainError> {
        let report = self.cache.write(|store| {
            let mut known: HashSet<String> = store
                .list_all()?
                .into_iter()
                .filter_map(RawRecord::into_record)
                .map(|record| record.quote)
                .collect();
            debug!(existing = known.len(), "Collected existing quotes");

            let mut report = ImportReport::default();
            for (row, raw) in incoming.into_iter().enumerate() {
                let Some(record) = raw.into_record() else {
                    let err = DomainError::InvalidRecord(format!("row {row} has no quote"));
                    warn!(%err, "Skipping import row");
                    report.skipped_invalid += 1;
                    continue;
                };

                if known.contains(&record.quote) {
                    report.skipped_duplicates += 1;
                    continue;
                }

                store.add(&record)?;
                known.insert(record.quote);
                report.added += 1;
            }
            Ok(report)
        })?;

        info!(
            added = report.added,
            duplicates = report.skipped_duplicates,
            invalid = report.skipped_invalid,
            "Import finished"
        );
        Ok(report)
    }
}
