// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Failed to write to record store: {0}")]
    StoreWriteFailed(String),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}
