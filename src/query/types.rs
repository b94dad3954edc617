//! Query wire types
//!
//! Defines the page and parameter shapes shared by every list-style
//! endpoint.

use crate::types::JsonObject;
use serde::{Deserialize, Serialize};

/// One parameter value interpolated into a filter expression
///
/// Filter placeholders (`$1`, `$2`, ...) accept strings or numbers; the
/// wire representation is untagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterParam {
    /// A string parameter
    String(String),
    /// A numeric parameter
    Number(f64),
}

impl From<&str> for FilterParam {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FilterParam {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for FilterParam {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FilterParam {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// One bounded batch of items plus the continuation cursor
///
/// If `last_page` is true a subsequent fetch of a bounded query with the
/// returned cursor yields zero items. A feed's cursor is always valid:
/// fetching again later may return new items as they arrive upstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items in server-assigned order
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Opaque cursor for fetching the next page
    #[serde(default)]
    pub cursor: String,
    /// Whether the result set is exhausted
    #[serde(default)]
    pub last_page: bool,
}

/// Filter and pagination parameters for a list-style endpoint
///
/// Restartable: an empty cursor scans from the beginning of the result
/// set. The cursor is only ever replaced with one returned by a
/// successful fetch.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    /// Filter expression, e.g. `tags.type=$1`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Values interpolated into the filter expression
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_params: Vec<FilterParam>,
    /// Number of items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Starting cursor; empty means scan from the beginning
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cursor: String,
    /// Resource-specific fields, e.g. the id list for key queries
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl QueryParams {
    /// Create empty query parameters (match everything, server default
    /// page size)
    pub fn new() -> Self {
        Self::default()
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

    /// Set the page size
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the starting cursor
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = cursor.into();
        self
    }

    /// Add a resource-specific field
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
