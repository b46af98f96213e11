// src/infrastructure/json_file.rs
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::application::RecordStore;
use crate::domain::{DomainError, RawRecord, Record};

/// Record store kept in a local JSON file holding an array of documents.
///
/// Also reads import batches, which use the same layout.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        debug!(?path, "Creating JSON file store");
        Self { path }
    }

    fn read(&self) -> Result<Vec<RawRecord>, DomainError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::StoreUnavailable(format!("Failed to read {}: {e}", self.path.display()))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            DomainError::StoreUnavailable(format!(
                "Malformed record file {}: {e}",
                self.path.display()
            ))
        })
    }
}

impl RecordStore for JsonFileStore {
    #[instrument(level = "debug", skip(self))]
    fn list_all(&mut self) -> Result<Vec<RawRecord>, DomainError> {
        let records = self.read()?;
        info!(path = ?self.path, count = records.len(), "Read record file");
        Ok(records)
    }

    #[instrument(level = "debug", skip(self))]
    fn add(&mut self, record: &Record) -> Result<(), DomainError> {
        let mut documents = if self.path.exists() {
            self.read()
                .map_err(|e| DomainError::StoreWriteFailed(e.to_string()))?
        } else {
            vec![]
        };
        documents.push(RawRecord::from(record));

        let json = serde_json::to_string_pretty(&documents)
            .map_err(|e| DomainError::StoreWriteFailed(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| {
            DomainError::StoreWriteFailed(format!("Failed to write {}: {e}", self.path.display()))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_json_array_when_listing_then_returns_documents_in_file_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quotes.json");
        fs::write(
            &path,
            r#"[
                {"Quote": "A", "Character": "Naruto", "Anime": "Naruto"},
                {"Character": "X", "Anime": "Y"},
                {"quote": "B"}
            ]"#,
        )
        .unwrap();
        let mut store = JsonFileStore::new(&path);

        let documents = store.list_all().unwrap();

        assert_eq!(documents.len(), 3);
        assert_eq!(documents[0].quote.as_deref(), Some("A"));
        assert_eq!(documents[1].quote, None);
        assert_eq!(documents[2].quote.as_deref(), Some("B"));
    }

    #[test]
    fn given_missing_file_when_listing_then_returns_store_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(temp_dir.path().join("missing.json"));

        assert!(matches!(store.list_all(), Err(DomainError::StoreUnavailable(_))));
    }

    #[test]
    fn given_malformed_file_when_listing_then_returns_store_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, r#"{"Quote": "not an array"}"#).unwrap();
        let mut store = JsonFileStore::new(&path);

        assert!(matches!(store.list_all(), Err(DomainError::StoreUnavailable(_))));
    }

    #[test]
    fn given_missing_file_when_adding_then_creates_it() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("new.json");
        let mut store = JsonFileStore::new(&path);

        store.add(&Record::new("A", Some("L"), None)).unwrap();
        store.add(&Record::new("B", None, Some("Death Note"))).unwrap();

        let documents = store.list_all().unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].character.as_deref(), Some("L"));
        assert_eq!(documents[1].anime.as_deref(), Some("Death Note"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(r#""Quote": "A""#));
    }
}
