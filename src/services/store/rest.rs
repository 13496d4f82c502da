use async_trait::async_trait;
use serde_json::Value;

use super::{RecordStore, StoreError};

/// PostgREST-style client for the hosted relational store.
pub struct RestStore {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl RestStore {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RecordStore for RestStore {
    async fn insert(&self, table: &str, record: Value) -> Result<Value, StoreError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);

        let res = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await
            .map_err(StoreError::transport)?;

        let status = res.status();
        let body: Value = res.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            // PostgREST error bodies carry message/hint/code.
            return Err(StoreError {
                message: body["message"]
                    .as_str()
                    .unwrap_or("insert rejected by store")
                    .to_string(),
                hint: body["hint"].as_str().map(String::from),
                code: body["code"].as_str().map(String::from),
            });
        }

        // return=representation responds with an array of inserted rows.
        body.as_array()
            .and_then(|rows| rows.first())
            .cloned()
            .ok_or_else(|| StoreError::transport("insert returned no rows"))
    }
}
