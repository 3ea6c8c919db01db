use super::{ReadingStore, StoreError};
use crate::config::Config;
use crate::models::{Reading, StoredRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Airtable REST client for a single table.
#[derive(Clone)]
pub struct AirtableStore {
    http: reqwest::Client,
    table_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct CreateRequest<'a> {
    fields: &'a Reading,
}

#[derive(Deserialize)]
struct ListPage {
    records: Vec<StoredRecord>,
    #[serde(default)]
    offset: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

// The API answers either `{"error": "NOT_FOUND"}` or `{"error": {"type": .., "message": ..}}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Code(String),
    Detailed {
        #[serde(rename = "type", default)]
        kind: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

impl AirtableStore {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            table_url: format!(
                "{}/{}/{}",
                config.airtable_api_url.trim_end_matches('/'),
                config.airtable_base,
                config.airtable_table
            ),
            api_key: config.airtable_api_key.clone(),
        }
    }
}

#[async_trait]
impl ReadingStore for AirtableStore {
    #[instrument(skip_all, fields(date = %reading.date))]
    async fn append(&self, reading: &Reading) -> Result<(), StoreError> {
        let response = self
            .http
            .post(&self.table_url)
            .bearer_auth(&self.api_key)
            .json(&CreateRequest { fields: reading })
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    #[instrument(skip_all)]
    async fn list_all(&self) -> Result<Vec<StoredRecord>, StoreError> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut request = self
                .http
                .get(&self.table_url)
                .bearer_auth(&self.api_key)
                .query(&[("sort[0][field]", "Date"), ("sort[0][direction]", "asc")]);
            if let Some(token) = &offset {
                request = request.query(&[("offset", token)]);
            }

            let response = ensure_success(request.send().await?).await?;
            let status = response.status().as_u16();
            let page = decode_page(&response.bytes().await?)?;
            debug!(rows = page.records.len(), "fetched page");
            records.extend(page.records);

            offset = next_offset(status, offset.as_deref(), page.offset)?;
            if offset.is_none() {
                break;
            }
        }

        Ok(records)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Api {
        status: status.as_u16(),
        message: error_message(body),
    })
}

fn decode_page(body: &[u8]) -> Result<ListPage, StoreError> {
    Ok(serde_json::from_slice(body)?)
}

/// A continuation token equal to the one just sent would page forever.
fn next_offset(status: u16, previous: Option<&str>, next: Option<String>) -> Result<Option<String>, StoreError> {
    match next {
        Some(token) if previous == Some(token.as_str()) => Err(StoreError::Api {
            status,
            message: format!("offset `{token}` repeated"),
        }),
        next => Ok(next),
    }
}

fn error_message(body: String) -> String {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody {
            error: ErrorDetail::Code(code),
        }) => code,
        Ok(ErrorBody {
            error: ErrorDetail::Detailed {
                message: Some(message),
                ..
            },
        }) => message,
        Ok(ErrorBody {
            error: ErrorDetail::Detailed {
                kind: Some(kind), ..
            },
        }) => kind,
        _ => body,
    }
}
