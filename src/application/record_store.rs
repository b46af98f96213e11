// src/application/record_store.rs
use crate::domain::{DomainError, RawRecord, Record};

/// Port to the document store holding the quotes.
pub trait RecordStore {
    /// Fetch every stored document, in the store's own order.
    fn list_all(&mut self) -> Result<Vec<RawRecord>, DomainError>;

    /// Append one record to the store.
    fn add(&mut self, record: &Record) -> Result<(), DomainError>;
}

impl<R: RecordStore + ?Sized> RecordStore for Box<R> {
    fn list_all(&mut self) -> Result<Vec<RawRecord>, DomainError> {
        (**self).list_all()
    }

    fn add(&mut self, record: &Record) -> Result<(), DomainError> {
        (**self).add(record)
    }
}

impl<R: RecordStore + ?Sized> RecordStore for &mut R {
    fn list_all(&mut self) -> Result<Vec<RawRecord>, DomainError> {
        (**self).list_all()
    }

    fn add(&mut self, record: &Record) -> Result<(), DomainError> {
        (**self).add(record)
    }
}
