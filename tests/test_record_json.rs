use anyhow::Result;
use wisdomvault::domain::{FilterOptions, RawRecord, Record};

#[test]
fn given_record_when_serializing_to_json_then_uses_store_field_names() -> Result<()> {
    // Arrange
    let record = Record::new("I am justice!", Some("Light Yagami"), Some("Death Note"));

    // Act
    let json = serde_json::to_string_pretty(&record)?;

    // Assert
    assert!(json.contains(r#""Quote": "I am justice!""#));
    assert!(json.contains(r#""Character": "Light Yagami""#));
    assert!(json.contains(r#""Anime": "Death Note""#));
    Ok(())
}

#[test]
fn given_record_without_attribution_when_serializing_then_omits_fields() -> Result<()> {
    let record = Record::new("Words", None, Some(""));

    let json = serde_json::to_string(&record)?;

    assert_eq!(json, r#"{"Quote":"Words"}"#);
    Ok(())
}

#[test]
fn given_serialized_record_when_reading_back_as_raw_then_validates_to_same_record() -> Result<()> {
    let record = Record::new("Believe it!", Some("Naruto Uzumaki"), None);

    let raw: RawRecord = serde_json::from_str(&serde_json::to_string(&record)?)?;

    assert_eq!(raw.into_record(), Some(record));
    Ok(())
}

#[test]
fn given_filter_options_when_serializing_then_produces_two_arrays() -> Result<()> {
    let options = FilterOptions {
        anime: vec!["Naruto".to_string()],
        characters: vec![],
    };

    let json = serde_json::to_string(&options)?;

    assert_eq!(json, r#"{"anime":["Naruto"],"characters":[]}"#);
    Ok(())
}
