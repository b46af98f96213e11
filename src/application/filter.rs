// src/application/filter.rs
use std::collections::BTreeSet;

use crate::domain::{Catalog, Record};
use crate::util::text::contains_ignore_case;

/// Active filter inputs. Empty sets and an empty search mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFilter {
    pub anime: BTreeSet<String>,
    pub characters: BTreeSet<String>,
    pub search: String,
}

impl QuoteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anime<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.anime = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_characters<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.characters = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.anime.is_empty() && self.characters.is_empty() && self.search.is_empty()
    }

    /// Whether `record` satisfies every active constraint.
    ///
    /// A record without an anime or character never matches a non-empty set
    /// on that dimension.
    pub fn matches(&self, record: &Record) -> bool {
        member_of(&self.anime, record.anime.as_deref())
            && member_of(&self.characters, record.character.as_deref())
            && contains_ignore_case(&record.quote, &self.search)
    }
}

fn member_of(set: &BTreeSet<String>, value: Option<&str>) -> bool {
    set.is_empty() || value.is_some_and(|v| set.contains(v))
}

/// Records of `catalog` matching `filter`, in catalog order.
pub fn filter<'a>(catalog: &'a Catalog, filter: &QuoteFilter) -> Vec<&'a Record> {
    catalog
        .records()
        .iter()
        .filter(|record| filter.matches(record))
        .collect()
}
