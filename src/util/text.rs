// src/util/text.rs

/// Placeholder shown when a record has no character or anime.
pub const UNKNOWN: &str = "Unknown";

/// `value` owned, or `None` when it is empty. Whitespace is kept as stored.
///
/// # Examples
///
/// ```
/// use wisdomvault::util::text::non_empty;
///
/// assert_eq!(non_empty(" Naruto "), Some(" Naruto ".to_string()));
/// assert_eq!(non_empty(""), None);
/// ```
pub fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Case-insensitive substring test. An empty needle always matches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or(UNKNOWN)
}
