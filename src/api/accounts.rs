//! Accounts API
//!
//! An account tracks ownership on the ledger; its keys are required to
//! sign transactions spending funds it holds.

use crate::error::Result;
use crate::http::Transport;
use crate::query::{Page, Query, QueryParams};
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An account on the ledger
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier of the account
    pub id: String,
    /// Ids of the keys used to sign for the account
    #[serde(default)]
    pub key_ids: Vec<String>,
    /// Number of keys required to sign transactions for the account
    #[serde(default)]
    pub quorum: u32,
    /// User-specified tag structure
    #[serde(default)]
    pub tags: JsonObject,
}

/// Parameters for account creation
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountParams {
    /// Unique identifier; auto-generated by the server if not provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Ids of the keys used to sign for the account
    pub key_ids: Vec<String>,
    /// Number of keys required to sign; defaults to the number of keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quorum: Option<u32>,
    /// User-specified tag structure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<JsonObject>,
}

/// Parameters for replacing an account's tags
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTagsParams {
    /// The account id
    pub id: String,
    /// The new tags, replacing the existing set
    pub tags: JsonObject,
}

/// API handle for accounts
#[derive(Clone)]
pub struct AccountsApi {
    transport: Arc<dyn Transport>,
}

impl AccountsApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a new account
    pub async fn create(&self, params: CreateAccountParams) -> Result<Account> {
        let response = self
            .transport
            .request("/create-account", serde_json::to_value(&params)?)
            .await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Replace an account's tags
    pub async fn update_tags(&self, params: UpdateTagsParams) -> Result<()> {
        self.transport
            .request("/update-account-tags", serde_json::to_value(&params)?)
            .await?;
        Ok(())
    }

    /// Build a query over accounts
    pub fn query(&self, params: QueryParams) -> Query<Account> {
        Query::new(Arc::clone(&self.transport), "/list-accounts", params)
    }

    /// Get one page of accounts matching the query
    pub async fn query_page(&self, params: QueryParams) -> Result<Page<Account>> {
        self.query(params).page().await
    }

    /// Fetch all accounts matching the query
    pub async fn query_all(&self, params: QueryParams) -> Result<Vec<Account>> {
        self.query(params).all().await
    }

    /// Invoke `handler` once per account matching the query
    pub async fn query_each<F>(&self, params: QueryParams, handler: F) -> Result<()>
    where
        F: FnMut(Account) -> Result<()>,
    {
        self.query(params).each(handler).await
    }
}

impl std::fmt::Debug for AccountsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountsApi").finish_non_exhaustive()
    }
}
