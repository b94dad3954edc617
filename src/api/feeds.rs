//! Feeds API
//!
//! Create, retrieve, list, and delete feeds, and obtain consumers for
//! them. Deleting a feed poisons any in-flight consume loop: its next
//! poll fails with a not-found request error.

use crate::error::Result;
use crate::feed::{CreateFeedParams, Feed, FeedConsumer};
use crate::http::Transport;
use crate::query::{Query, QueryParams};
use serde_json::json;
use std::sync::Arc;

/// API handle for feeds
#[derive(Clone)]
pub struct FeedsApi {
    transport: Arc<dyn Transport>,
}

impl FeedsApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a new feed
    pub async fn create(&self, params: CreateFeedParams) -> Result<Feed> {
        let response = self
            .transport
            .request("/create-feed", serde_json::to_value(&params)?)
            .await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Retrieve a single feed, including its current server-side cursor
    pub async fn get(&self, id: &str) -> Result<Feed> {
        let response = self
            .transport
            .request("/get-feed", json!({ "id": id }))
            .await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Delete a feed
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.transport
            .request("/delete-feed", json!({ "id": id }))
            .await?;
        Ok(())
    }

    /// Build a query over all feeds
    pub fn list(&self) -> Query<Feed> {
        Query::new(Arc::clone(&self.transport), "/list-feeds", QueryParams::new())
    }

    /// Create a consumer starting at the feed's current cursor
    pub fn consumer(&self, feed: &Feed) -> FeedConsumer {
        FeedConsumer::new(Arc::clone(&self.transport), feed)
    }
}

impl std::fmt::Debug for FeedsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedsApi").finish_non_exhaustive()
    }
}
