//! Feed wire types

use crate::query::FilterParam;
use serde::{Deserialize, Serialize};

/// Kind of items a feed selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    /// The feed selects individual actions
    Action,
    /// The feed selects whole transactions
    Transaction,
}

/// A server-persisted feed
///
/// The cursor is authoritative on the server; the client mirrors it
/// locally and pushes updates back only via the next poll (there is no
/// separate acknowledgement call).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    /// Unique identifier of the feed
    pub id: String,
    /// Type of feed, action or transaction
    #[serde(rename = "type")]
    pub feed_type: FeedType,
    /// The query filter used to select matching items
    #[serde(default)]
    pub filter: String,
    /// Values interpolated into the filter expression
    #[serde(default)]
    pub filter_params: Vec<FilterParam>,
    /// The position where the next poll should begin
    #[serde(default)]
    pub cursor: String,
}

/// Parameters for feed creation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedParams {
    /// Unique identifier; auto-generated by the server if not provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Type of feed, action or transaction
    #[serde(rename = "type")]
    pub feed_type: FeedType,
    /// The query filter used to select matching items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Values interpolated into the filter expression
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_params: Vec<FilterParam>,
}

impl CreateFeedParams {
    /// Create parameters for a feed of the given type
    pub fn new(feed_type: FeedType) -> Self {
        Self {
            id: None,
            feed_type,
            filter: None,
            filter_params: Vec::new(),
        }
    }

    /// Set the feed id
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the filter expression
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Add a filter parameter
    #[must_use]
    pub fn param(mut self, param: impl Into<FilterParam>) -> Self {
        self.filter_params.push(param.into());
        self
    }
}

/// One polled batch: items plus their per-item cursors
///
/// `cursors[i]` is the position committed by acknowledging `items[i]`;
/// the arrays are parallel because acknowledgement is per-item, not
/// per-batch.
#[derive(Debug, Deserialize)]
pub(crate) struct FeedBatch<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub cursors: Vec<String>,
}
