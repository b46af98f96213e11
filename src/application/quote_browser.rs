// src/application/quote_browser.rs
use chrono::NaiveDate;

use crate::application::daily_selector::select_daily;
use crate::application::filter::{filter, QuoteFilter};
use crate::application::CatalogSnapshot;
use crate::domain::{FilterOptions, Record};

/// Read-only views over one catalog generation, plus the filter inputs.
///
/// This is what a presenter renders: the quote of the day, the filter
/// choices and the records that survive the current filter.
#[derive(Debug, Clone)]
pub struct QuoteBrowser {
    snapshot: CatalogSnapshot,
    options: FilterOptions,
    filter: QuoteFilter,
    today: NaiveDate,
}

impl QuoteBrowser {
    pub fn new(snapshot: CatalogSnapshot, today: NaiveDate) -> Self {
        let options = snapshot.catalog.filter_options();
        Self {
            snapshot,
            options,
            filter: QuoteFilter::default(),
            today,
        }
    }

    pub fn generation(&self) -> u64 {
        self.snapshot.generation
    }

    pub fn catalog_size(&self) -> usize {
        self.snapshot.catalog.len()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn daily_quote(&self) -> Option<&Record> {
        select_daily(&self.snapshot.catalog, self.today)
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn visible_records(&self) -> Vec<&Record> {
        filter(&self.snapshot.catalog, &self.filter)
    }

    pub fn set_filter(&mut self, filter: QuoteFilter) {
        self.filter = filter;
    }

    pub fn set_anime<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.anime = values.into_iter().map(Into::into).collect();
    }

    pub fn set_characters<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.characters = values.into_iter().map(Into::into).collect();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
    }
}
