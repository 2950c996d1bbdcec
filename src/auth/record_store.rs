//! Durable storage seam for issued token records.
//!
//! Every successful credential exchange appends one [`TokenRecord`] to a
//! [`TokenRecordStore`] for audit. Records are written once and never updated
//! in place; retention of historical records is the store's concern, not the
//! SDK's.
//!
//! The SDK ships [`InMemoryTokenRecordStore`] as the default implementation;
//! deployments with a database back the trait with their own table or
//! collection.

use crate::auth::token::TokenRecord;
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

/// Failure while appending to the durable record store.
#[derive(Debug, Error)]
#[error("token record store failure: {0}")]
pub struct RecordStoreError(pub String);

/// Append-only store of issued token records.
///
/// Implementations must be safe to share across tasks; the SDK holds the
/// store behind an `Arc<dyn TokenRecordStore>`.
#[async_trait]
pub trait TokenRecordStore: Send + Sync {
    /// Appends one issued record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError`] if the record could not be persisted.
    async fn append(&self, record: &TokenRecord) -> Result<(), RecordStoreError>;
}

/// In-memory [`TokenRecordStore`] holding records in insertion order.
///
/// Suitable for tests and processes that do not need durable audit storage.
#[derive(Debug, Default)]
pub struct InMemoryTokenRecordStore {
    records: Mutex<Vec<TokenRecord>>,
}

impl InMemoryTokenRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all appended records.
    pub async fn records(&self) -> Vec<TokenRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl TokenRecordStore for InMemoryTokenRecordStore {
    async fn append(&self, record: &TokenRecord) -> Result<(), RecordStoreError> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }
}
