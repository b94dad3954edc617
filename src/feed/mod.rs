//! Feed consumption module
//!
//! Live, at-least-once consumption of server-persisted feeds.
//!
//! # Overview
//!
//! A feed is a filtered, ordered, server-side log of actions or
//! transactions. The [`FeedConsumer`] drives the polling state machine:
//! fetch a batch at the committed cursor, deliver items one at a time to
//! the caller's decision handler, advance the cursor only on
//! acknowledgement, and back off (exponential, capped, jittered) when the
//! feed is idle or the server is transiently unavailable.
//!
//! Nothing is considered consumed until acknowledged: a crash or an
//! unacknowledged delivery redelivers from the committed cursor on the
//! next poll.

mod backoff;
mod consumer;
mod types;

pub use backoff::{Backoff, BackoffConfig};
pub use consumer::{Decision, FeedConsumer};
pub use types::{CreateFeedParams, Feed, FeedType};
