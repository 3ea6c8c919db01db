//! Store gateway: the only path between handlers and the remote table.

mod airtable;
#[cfg(test)]
pub(crate) mod memory;

pub use airtable::AirtableStore;

use crate::models::{Reading, StoredRecord};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("remote store unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote store returned an unexpected payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("remote store rejected request ({status}): {message}")]
    Api { status: u16, message: String },
}

#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Creates one row in the remote table.
    async fn append(&self, reading: &Reading) -> Result<(), StoreError>;

    /// Every row, ascending by `Date`. Ties keep the remote order.
    async fn list_all(&self) -> Result<Vec<StoredRecord>, StoreError>;
}
