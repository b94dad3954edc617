//! Top-level client
//!
//! One [`Client`] per ledger; all resource handles and feed consumers
//! created from it share one transport.

use crate::api::{AccountsApi, FeedsApi, KeysApi};
use crate::http::{ApiClient, ClientConfig};
use std::sync::Arc;

/// Client for a ledger API
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<ApiClient>,
}

impl Client {
    /// Create a client for the given base URL with default configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::builder().base_url(base_url).build())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            transport: Arc::new(ApiClient::with_config(config)),
        }
    }

    /// The underlying transport
    pub fn transport(&self) -> Arc<ApiClient> {
        Arc::clone(&self.transport)
    }

    /// API for accounts
    pub fn accounts(&self) -> AccountsApi {
        AccountsApi::new(self.transport())
    }

    /// API for keys
    pub fn keys(&self) -> KeysApi {
        KeysApi::new(self.transport())
    }

    /// API for feeds
    pub fn feeds(&self) -> FeedsApi {
        FeedsApi::new(self.transport())
    }
}
