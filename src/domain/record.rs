// src/domain/record.rs
use serde::{Deserialize, Serialize};

use crate::util::text::non_empty;

/// One quote with its optional attribution.
///
/// Text is kept exactly as stored. Attribution fields that were empty or null
/// in the store are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "Quote")]
    pub quote: String,
    #[serde(rename = "Character", skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    #[serde(rename = "Anime", skip_serializing_if = "Option::is_none")]
    pub anime: Option<String>,
}

impl Record {
    pub fn new(
        quote: impl Into<String>,
        character: Option<&str>,
        anime: Option<&str>,
    ) -> Self {
        Self {
            quote: quote.into(),
            character: character.and_then(non_empty),
            anime: anime.and_then(non_empty),
        }
    }
}

/// A record as it comes out of the store, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawRecord {
    #[serde(rename = "Quote", alias = "quote", default)]
    pub quote: Option<String>,
    #[serde(rename = "Character", alias = "character", default)]
    pub character: Option<String>,
    #[serde(rename = "Anime", alias = "anime", default)]
    pub anime: Option<String>,
}

impl RawRecord {
    /// Validate into a `Record`, or `None` when the quote is missing or empty.
    pub fn into_record(self) -> Option<Record> {
        let quote = self.quote.as_deref().and_then(non_empty)?;
        Some(Record {
            quote,
            character: self.character.as_deref().and_then(non_empty),
            anime: self.anime.as_deref().and_then(non_empty),
        })
    }
}

impl From<&Record> for RawRecord {
    fn from(record: &Record) -> Self {
        Self {
            quote: Some(record.quote.clone()),
            character: record.character.clone(),
            anime: record.anime.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn given_missing_or_empty_quote_when_validating_then_drops_record(#[case] quote: Option<&str>) {
        let raw = RawRecord {
            quote: quote.map(str::to_string),
            character: Some("X".to_string()),
            anime: Some("Y".to_string()),
        };

        assert_eq!(raw.into_record(), None);
    }

    #[test]
    fn given_whitespace_only_quote_when_validating_then_keeps_record() {
        let raw = RawRecord {
            quote: Some("   ".to_string()),
            ..RawRecord::default()
        };

        let record = raw.into_record().expect("quote is present");

        assert_eq!(record.quote, "   ");
    }

    #[test]
    fn given_padded_values_when_validating_then_keeps_text_verbatim() {
        let raw = RawRecord {
            quote: Some("  A  ".to_string()),
            character: Some(" Naruto ".to_string()),
            anime: Some(" Naruto ".to_string()),
        };

        let record = raw.into_record().expect("quote is present");

        assert_eq!(record.quote, "  A  ");
        assert_eq!(record.character.as_deref(), Some(" Naruto "));
        assert_eq!(record.anime.as_deref(), Some(" Naruto "));
    }

    #[test]
    fn given_empty_attribution_when_validating_then_fields_are_absent() {
        let raw = RawRecord {
            quote: Some("Believe it!".to_string()),
            character: Some(String::new()),
            anime: None,
        };

        let record = raw.into_record().expect("quote is present");

        assert_eq!(record.quote, "Believe it!");
        assert_eq!(record.character, None);
        assert_eq!(record.anime, None);
    }

    #[test]
    fn given_lowercase_keys_when_deserializing_then_accepts_aliases() {
        let json = r#"{"quote": "A", "character": "Naruto", "anime": "Naruto"}"#;

        let raw: RawRecord = serde_json::from_str(json).unwrap();

        assert_eq!(raw.quote.as_deref(), Some("A"));
        assert_eq!(raw.character.as_deref(), Some("Naruto"));
    }

    #[test]
    fn given_null_fields_when_deserializing_then_fields_are_none() {
        let json = r#"{"Quote": "A", "Character": null}"#;

        let raw: RawRecord = serde_json::from_str(json).unwrap();

        assert_eq!(raw.character, None);
        assert_eq!(raw.anime, None);
    }
}
