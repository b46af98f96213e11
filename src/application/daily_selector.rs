// src/application/daily_selector.rs
//
// Quote of the day.
//
// The index is derived from a SHA-256 digest of the ISO date string, so the
// same calendar date picks the same record in every process, on every
// platform, for every user.

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

use crate::constants::DAILY_DATE_FORMAT;
use crate::domain::{Catalog, Record};

/// First eight bytes of `SHA-256(value)`, read big-endian.
pub fn stable_hash(value: &str) -> u64 {
    let digest = Sha256::digest(value.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

/// Index of the daily record in a catalog of `len` records, `None` if empty.
pub fn daily_index(today: NaiveDate, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let key = today.format(DAILY_DATE_FORMAT).to_string();
    Some((stable_hash(&key) % len as u64) as usize)
}

pub fn select_daily(catalog: &Catalog, today: NaiveDate) -> Option<&Record> {
    daily_index(today, catalog.len()).and_then(|index| catalog.get(index))
}
