// src/application/mod.rs
pub mod catalog_cache;
pub mod catalog_loader;
pub mod daily_selector;
pub mod filter;
pub mod quote_browser;
pub mod quote_importer;
pub mod record_store;

pub use catalog_cache::{CatalogCache, CatalogSnapshot};
pub use catalog_loader::CatalogLoader;
pub use filter::QuoteFilter;
pub use quote_browser::QuoteBrowser;
pub use quote_importer::{ImportReport, QuoteImporter};
pub use record_store::RecordStore;
