// src/domain/mod.rs
pub mod catalog;
pub mod error;
pub mod record;

pub use catalog::{Catalog, Field, FilterOptions};
pub use error::DomainError;
pub use record::{RawRecord, Record};
