//! # ledgerkit
//!
//! An async client SDK for cursor-paginated ledger APIs.
//!
//! ## Features
//!
//! - **Typed resources**: accounts, keys, and feeds over a shared
//!   JSON-over-POST transport
//! - **Transparent pagination**: one-page, collect-all, and streaming
//!   consumption of bounded result sets
//! - **Live feed consumption**: an at-least-once consume loop with
//!   per-item acknowledgement, capped exponential backoff with jitter,
//!   and cooperative cancellation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ledgerkit::{Client, Decision, QueryParams, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("https://ledger.example.com");
//!
//!     // Bounded query: every matching account, in server order.
//!     let accounts = client
//!         .accounts()
//!         .query_all(QueryParams::new().filter("tags.type=$1").param("checking"))
//!         .await?;
//!
//!     // Live feed: deliver items until the handler stops the loop.
//!     let feed = client.feeds().get("actionFeed").await?;
//!     let mut consumer = client.feeds().consumer(&feed);
//!     consumer
//!         .consume::<serde_json::Value, _>(|action| {
//!             println!("{action}");
//!             Ok(Decision::next(true))
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Client                              │
//! │   accounts() / keys() / feeds() → typed resource handles    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴────────────┬───────────────────┐
//! │    Query     │       FeedConsumer       │     Transport     │
//! ├──────────────┼──────────────────────────┼───────────────────┤
//! │ page         │ poll → deliver → ack     │ one bare POST     │
//! │ all          │ backoff on idle/5xx      │ 4xx = permanent   │
//! │ each         │ cancel at suspension     │ 5xx = transient   │
//! └──────────────┴──────────────────────────┴───────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod api;
pub mod client;
pub mod error;
pub mod feed;
pub mod http;
pub mod query;
pub mod types;

pub use client::Client;
pub use error::{Error, Result};
pub use feed::{Backoff, BackoffConfig, CreateFeedParams, Decision, Feed, FeedConsumer, FeedType};
pub use http::{ApiClient, ClientConfig, Transport};
pub use query::{FilterParam, Page, Query, QueryParams};
