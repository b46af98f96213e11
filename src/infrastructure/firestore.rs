// src/infrastructure/firestore.rs
//
// Record store backed by the Firestore REST API.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info, instrument};

use crate::application::RecordStore;
use crate::constants::{ANIME_FIELD, CHARACTER_FIELD, FIRESTORE_BASE_URL, QUOTE_FIELD};
use crate::domain::{DomainError, RawRecord, Record};
use crate::infrastructure::config::StoreConfig;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<Document>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    fields: Map<String, Value>,
}

pub struct FirestoreStore {
    client: Client,
    collection_url: String,
    api_key: Option<String>,
    access_token: Option<String>,
    page_size: u32,
}

impl FirestoreStore {
    pub fn new(config: &StoreConfig) -> Result<Self, DomainError> {
        if config.project_id.trim().is_empty() {
            return Err(DomainError::StoreUnavailable(
                "Firestore project_id is not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| DomainError::StoreUnavailable(format!("Failed to build HTTP client: {e}")))?;

        let collection_url = collection_url(FIRESTORE_BASE_URL, &config.project_id, &config.collection);
        debug!(%collection_url, "Created Firestore store");

        Ok(Self {
            client,
            collection_url,
            api_key: non_blank(&config.api_key),
            access_token: non_blank(&config.access_token),
            page_size: config.page_size,
        })
    }

    fn url(&self, page_token: Option<&str>, with_page_size: bool) -> Result<Url, DomainError> {
        let mut params: Vec<(&str, String)> = vec![];
        if with_page_size {
            params.push(("pageSize", self.page_size.to_string()));
        }
        if let Some(token) = page_token {
            params.push(("pageToken", token.to_string()));
        }
        if let Some(key) = &self.api_key {
            params.push(("key", key.clone()));
        }

        Url::parse_with_params(&self.collection_url, &params)
            .map_err(|e| DomainError::StoreUnavailable(format!("Invalid Firestore URL: {e}")))
    }

    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl RecordStore for FirestoreStore {
    #[instrument(level = "debug", skip(self))]
    fn list_all(&mut self) -> Result<Vec<RawRecord>, DomainError> {
        let mut records = vec![];
        let mut page_token: Option<String> = None;

        loop {
            let url = self.url(page_token.as_deref(), true)?;
            let page: ListDocumentsResponse = self
                .authorize(self.client.get(url))
                .send()
                .and_then(|resp| resp.error_for_status())
                .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?
                .json()
                .map_err(|e| {
                    DomainError::StoreUnavailable(format!("Malformed Firestore response: {e}"))
                })?;

            debug!(documents = page.documents.len(), "Fetched Firestore page");
            records.extend(page.documents.iter().map(|doc| decode_fields(&doc.fields)));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        info!(count = records.len(), "Listed Firestore documents");
        Ok(records)
    }

    #[instrument(level = "debug", skip(self))]
    fn add(&mut self, record: &Record) -> Result<(), DomainError> {
        let url = self
            .url(None, false)
            .map_err(|e| DomainError::StoreWriteFailed(e.to_string()))?;

        self.authorize(self.client.post(url))
            .json(&encode_record(record))
            .send()
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| DomainError::StoreWriteFailed(e.to_string()))?;

        debug!(quote = %record.quote, "Added Firestore document");
        Ok(())
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// `{base}/projects/{project}/databases/(default)/documents/{collection}`
pub fn collection_url(base: &str, project_id: &str, collection: &str) -> String {
    format!(
        "{}/projects/{}/databases/(default)/documents/{}",
        base.trim_end_matches('/'),
        project_id.trim(),
        collection.trim_matches('/'),
    )
}

/// Map Firestore typed fields onto a raw record.
///
/// Only `stringValue` carries text; `nullValue` and every other type count
/// as absent.
pub fn decode_fields(fields: &Map<String, Value>) -> RawRecord {
    let text = |name: &str| {
        [name.to_string(), name.to_lowercase()]
            .iter()
            .filter_map(|key| fields.get(key))
            .find_map(|value| value.get("stringValue").and_then(Value::as_str))
            .map(str::to_string)
    };

    RawRecord {
        quote: text(QUOTE_FIELD),
        character: text(CHARACTER_FIELD),
        anime: text(ANIME_FIELD),
    }
}

/// Firestore document body for a new record; absent fields are omitted.
pub fn encode_record(record: &Record) -> Value {
    let mut fields = Map::new();
    fields.insert(QUOTE_FIELD.to_string(), json!({ "stringValue": record.quote }));
    if let Some(character) = &record.character {
        fields.insert(CHARACTER_FIELD.to_string(), json!({ "stringValue": character }));
    }
    if let Some(anime) = &record.anime {
        fields.insert(ANIME_FIELD.to_string(), json!({ "stringValue": anime }));
    }
    json!({ "fields": fields })
}
