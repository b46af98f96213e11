// src/infrastructure/mod.rs
pub mod config;
pub mod firestore;
pub mod json_file;
pub mod renderer;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::RecordStore;
use config::{Backend, StoreConfig};

pub use config::Config;
pub use firestore::FirestoreStore;
pub use json_file::JsonFileStore;
pub use renderer::PageRenderer;

/// Build the store selected by `config`, or a file store when `file` is given.
pub fn open_store(config: &StoreConfig, file: Option<&Path>) -> Result<Box<dyn RecordStore>> {
    if let Some(path) = file {
        debug!(?path, "Using JSON file store from command line");
        return Ok(Box::new(JsonFileStore::new(path)));
    }

    match config.backend {
        Backend::Firestore => {
            let store = FirestoreStore::new(config).context("Failed to set up Firestore store")?;
            Ok(Box::new(store))
        }
        Backend::File => {
            if config.path.trim().is_empty() {
                anyhow::bail!("store.path must be set when backend = \"file\"");
            }
            Ok(Box::new(JsonFileStore::new(&config.path)))
        }
    }
}
