//! HTTP transport client
//!
//! Provides the single `request(path, body)` operation the query and feed
//! engines are built on. Each call is one bare network attempt: retry
//! policy belongs to the feed consume loop, never to the transport.

use crate::error::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("ledgerkit/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// The transport boundary every fetch goes through.
///
/// Implemented by [`ApiClient`] for real HTTP, and by in-memory fakes in
/// tests. The engine only requires it to distinguish transient
/// (`is_retryable`) from permanent failures.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Issue one request to `path` with the given JSON body and return the
    /// parsed JSON response.
    async fn request(&self, path: &str, body: Value) -> Result<Value>;
}

/// Error body returned by the ledger service on 4xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// HTTP transport for the ledger API
///
/// All endpoints are JSON-over-POST. One instance is shared by every
/// resource API handle and feed consumer created from a
/// [`Client`](crate::Client).
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new API client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::builder().base_url(base_url).build())
    }

    /// Create a new API client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Issue one POST request, classifying the outcome into the SDK's
    /// error taxonomy. No retries.
    async fn request_once(&self, path: &str, body: Value) -> Result<Value> {
        let full_url = self.build_url(path);

        let mut req = self.client.post(&full_url);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        req = req.json(&body);

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() {
                    #[allow(clippy::cast_possible_truncation)]
                    return Err(Error::Timeout {
                        timeout_ms: self.config.timeout.as_millis() as u64,
                    });
                }
                return Err(Error::Http(e));
            }
        };

        let status = response.status();

        if status.is_client_error() {
            let text = response.text().await.unwrap_or_default();
            let parsed: ApiErrorBody = serde_json::from_str(&text).unwrap_or(ApiErrorBody {
                code: String::new(),
                message: text.clone(),
            });
            return Err(Error::request(status.as_u16(), parsed.code, parsed.message));
        }

        if status.is_server_error() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::server(status.as_u16(), text));
        }

        debug!("Request succeeded: POST {}", full_url);

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let json: Value = response.json().await.map_err(Error::Http)?;
        Ok(json)
    }
}

#[async_trait::async_trait]
impl Transport for ApiClient {
    async fn request(&self, path: &str, body: Value) -> Result<Value> {
        self.request_once(path, body).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
