pub mod rest;

use async_trait::async_trait;
use serde_json::Value;

/// Insert failure with the diagnostic fields the store's REST API reports.
/// The booking endpoint passes these through to the client verbatim.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
    pub hint: Option<String>,
    pub code: Option<String>,
}

impl StoreError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self {
            message: err.to_string(),
            hint: None,
            code: None,
        }
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert one record and return the row as stored.
    async fn insert(&self, table: &str, record: Value) -> Result<Value, StoreError>;
}
