//! Keys API
//!
//! Keys sign transactions. The filter parameter of [`QueryParams`] is
//! unavailable for keys; key queries select by explicit id list instead.

use crate::error::Result;
use crate::http::Transport;
use crate::query::{Page, Query, QueryParams};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// A signing key
#[derive(Debug, Clone, Deserialize)]
pub struct Key {
    /// Unique identifier of the key
    pub id: String,
}

/// Parameters for key creation
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateKeyParams {
    /// Unique identifier; auto-generated by the server if not provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// API handle for keys
#[derive(Clone)]
pub struct KeysApi {
    transport: Arc<dyn Transport>,
}

impl KeysApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a new key
    pub async fn create(&self, params: CreateKeyParams) -> Result<Key> {
        let response = self
            .transport
            .request("/create-key", serde_json::to_value(&params)?)
            .await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Build a query over keys, optionally restricted to the given ids.
    ///
    /// When ids are given the page size is forced to the id count, so one
    /// page holds the whole answer.
    pub fn query(&self, ids: &[String]) -> Query<Key> {
        let mut params = QueryParams::new();
        if !ids.is_empty() {
            params = params
                .extra("ids", json!(ids))
                .page_size(u32::try_from(ids.len()).unwrap_or(u32::MAX));
        }
        Query::new(Arc::clone(&self.transport), "/list-keys", params)
    }

    /// Get one page of keys, optionally restricted to the given ids
    pub async fn query_page(&self, ids: &[String]) -> Result<Page<Key>> {
        self.query(ids).page().await
    }

    /// Fetch all keys, optionally restricted to the given ids
    pub async fn query_all(&self, ids: &[String]) -> Result<Vec<Key>> {
        self.query(ids).all().await
    }

    /// Invoke `handler` once per matching key
    pub async fn query_each<F>(&self, ids: &[String], handler: F) -> Result<()>
    where
        F: FnMut(Key) -> Result<()>,
    {
        self.query(ids).each(handler).await
    }
}

impl std::fmt::Debug for KeysApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeysApi").finish_non_exhaustive()
    }
}
