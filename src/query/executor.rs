//! Page fetcher and query execution
//!
//! The page fetcher issues exactly one bounded request and returns the
//! page verbatim; the query loops it, feeding each returned cursor into
//! the next request until the server reports exhaustion.

use super::types::{Page, QueryParams};
use crate::error::{Error, Result};
use crate::http::Transport;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Fetch one page from a list-style endpoint.
///
/// A single bare attempt: errors propagate unchanged and no state is
/// mutated; callers apply the returned page's cursor themselves.
pub async fn fetch_page<T: DeserializeOwned>(
    transport: &dyn Transport,
    endpoint: &str,
    params: &QueryParams,
) -> Result<Page<T>> {
    if params.page_size == Some(0) {
        return Err(Error::config("pageSize must be greater than zero"));
    }

    let body = serde_json::to_value(params)?;
    let response = transport.request(endpoint, body).await?;
    let page: Page<T> = serde_json::from_value(response)
        .map_err(|e| Error::decode(format!("invalid page response from {endpoint}: {e}")))?;

    debug!(
        endpoint,
        items = page.items.len(),
        last_page = page.last_page,
        "fetched page"
    );
    Ok(page)
}

/// A reusable, restartable query bound to one endpoint
///
/// Each consumption call starts a fresh scan from the query's starting
/// cursor (empty = the beginning); resumption is explicit, by feeding a
/// cursor returned from [`Query::page`] back in via
/// [`QueryParams::cursor`].
pub struct Query<T> {
    transport: Arc<dyn Transport>,
    endpoint: String,
    params: QueryParams,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Query<T> {
    /// Create a query against `endpoint` with the given parameters
    pub fn new(transport: Arc<dyn Transport>, endpoint: impl Into<String>, params: QueryParams) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            params,
            _marker: PhantomData,
        }
    }

    /// The endpoint this query fetches from
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch a single page, returned verbatim including its cursor so the
    /// caller can resume manually.
    pub async fn page(&self) -> Result<Page<T>> {
        fetch_page(self.transport.as_ref(), &self.endpoint, &self.params).await
    }

    /// Fetch every matching item, concatenated in server order.
    ///
    /// There is no internal cap: a pathological filter over an unbounded
    /// result set can exhaust memory. [`Query::each`] is the memory-safe
    /// alternative.
    pub async fn all(&self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        self.each(|item| {
            items.push(item);
            Ok(())
        })
        .await?;
        Ok(items)
    }

    /// Invoke `handler` once per matching item, in server order.
    ///
    /// A handler error aborts the scan and propagates unchanged.
    pub async fn each<F>(&self, mut handler: F) -> Result<()>
    where
        F: FnMut(T) -> Result<()>,
    {
        let mut params = self.params.clone();

        loop {
            let page: Page<T> =
                fetch_page(self.transport.as_ref(), &self.endpoint, &params).await?;
            let item_count = page.items.len();

            for item in page.items {
                handler(item)?;
            }

            if page.last_page || item_count == 0 {
                return Ok(());
            }
            params.cursor = page.cursor;
        }
    }
}

impl<T> std::fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("endpoint", &self.endpoint)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
