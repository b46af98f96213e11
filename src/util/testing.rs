// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::RecordStore;
use crate::domain::{DomainError, RawRecord, Record};

/// Shorthand for building a store-side record in tests.
pub fn raw(quote: Option<&str>, character: Option<&str>, anime: Option<&str>) -> RawRecord {
    RawRecord {
        quote: quote.map(str::to_string),
        character: character.map(str::to_string),
        anime: anime.map(str::to_string),
    }
}

/// In-memory record store for testing use cases that depend on RecordStore
///
/// Keeps documents in insertion order and can be configured to fail reads
/// or writes.
///
/// # Examples
///
/// ```
/// use wisdomvault::application::RecordStore;
/// use wisdomvault::util::testing::{raw, MockRecordStore};
///
/// let mut mock = MockRecordStore::builder()
///     .with_raw(raw(Some("Believe it!"), Some("Naruto"), Some("Naruto")))
///     .build();
///
/// assert_eq!(mock.list_all().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockRecordStore {
    documents: Vec<RawRecord>,
    list_failure: Option<String>,
    add_failure: Option<String>,
    list_calls: usize,
}

impl MockRecordStore {
    pub fn builder() -> MockRecordStoreBuilder {
        MockRecordStoreBuilder::new()
    }

    /// Number of times `list_all` has been called
    pub fn list_calls(&self) -> usize {
        self.list_calls
    }
}

impl RecordStore for MockRecordStore {
    fn list_all(&mut self) -> Result<Vec<RawRecord>, DomainError> {
        self.list_calls += 1;
        match &self.list_failure {
            Some(reason) => Err(DomainError::StoreUnavailable(reason.clone())),
            None => Ok(self.documents.clone()),
        }
    }

    fn add(&mut self, record: &Record) -> Result<(), DomainError> {
        if let Some(reason) = &self.add_failure {
            return Err(DomainError::StoreWriteFailed(reason.clone()));
        }
        self.documents.push(RawRecord::from(record));
        Ok(())
    }
}

/// Builder for MockRecordStore
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockRecordStoreBuilder {
    documents: Vec<RawRecord>,
    list_failure: Option<String>,
    add_failure: Option<String>,
}

impl MockRecordStoreBuilder {
    pub fn new() -> Self {
        Self {
            documents: vec![],
            list_failure: None,
            add_failure: None,
        }
    }

    /// Add a validated record as a stored document
    pub fn with_record(mut self, record: Record) -> Self {
        self.documents.push(RawRecord::from(&record));
        self
    }

    /// Add a document as-is, including malformed ones
    pub fn with_raw(mut self, raw: RawRecord) -> Self {
        self.documents.push(raw);
        self
    }

    /// Make every `list_all` call fail with StoreUnavailable
    pub fn with_list_failure(mut self, reason: &str) -> Self {
        self.list_failure = Some(reason.to_string());
        self
    }

    /// Make every `add` call fail with StoreWriteFailed
    pub fn with_add_failure(mut self, reason: &str) -> Self {
        self.add_failure = Some(reason.to_string());
        self
    }

    pub fn build(self) -> MockRecordStore {
        MockRecordStore {
            documents: self.documents,
            list_failure: self.list_failure,
            add_failure: self.add_failure,
            list_calls: 0,
        }
    }
}

impl Default for MockRecordStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
