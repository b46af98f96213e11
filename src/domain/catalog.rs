// src/domain/catalog.rs
use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::Record;

/// Ordered, read-only collection of records for one load generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

/// Attribution field a filter control enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Anime,
    Character,
}

/// Values offered by the anime and character filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub anime: Vec<String>,
    pub characters: Vec<String>,
}

impl Catalog {
    /// Build a catalog from records, keeping their order.
    ///
    /// Records with an empty quote are left out, so every element of a
    /// catalog has one.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records
                .into_iter()
                .filter(|record| !record.quote.is_empty())
                .collect(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Distinct non-empty values of `field`, sorted by codepoint order.
    pub fn distinct_values(&self, field: Field) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|record| match field {
                Field::Anime => record.anime.as_deref(),
                Field::Character => record.character.as_deref(),
            })
            .filter(|value| !value.is_empty())
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            anime: self.distinct_values(Field::Anime),
            characters: self.distinct_values(Field::Character),
        }
    }
}
