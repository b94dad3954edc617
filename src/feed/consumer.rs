//! Feed consume loop
//!
//! The polling state machine driving an unbounded sequence from a feed:
//! poll a batch at the committed cursor, deliver items strictly in order
//! to the caller's decision handler, advance the cursor only on
//! acknowledgement, back off when the feed is idle or the server fails
//! transiently.
//!
//! Delivery is at-least-once: an item acknowledged with `ack=false`, or a
//! crash between delivery and acknowledgement, redelivers from the
//! committed cursor on the next poll. The committed cursor always
//! reflects exactly the fully-acknowledged items, including at
//! cancellation.

use super::backoff::{Backoff, BackoffConfig};
use super::types::{Feed, FeedBatch};
use crate::error::{Error, Result};
use crate::http::Transport;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// The caller's verdict on one delivered item
///
/// `ack=true` commits the feed's cursor past the item; `ack=false` leaves
/// it unchanged so the item (and everything after it up to the next
/// acknowledgement) is redelivered on the next poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Deliver the next item
    Continue {
        /// Commit the cursor past this item
        ack: bool,
    },
    /// Halt the loop; no further items are delivered or polled
    Stop {
        /// Commit the cursor past this item before stopping
        ack: bool,
    },
}

impl Decision {
    /// Continue with the given acknowledgement
    pub fn next(ack: bool) -> Self {
        Self::Continue { ack }
    }

    /// Stop with the given acknowledgement
    pub fn stop(ack: bool) -> Self {
        Self::Stop { ack }
    }
}

/// Drives one feed's consume loop
///
/// One consumer per feed handle; independent consumers share no mutable
/// state, so any number of feeds can be consumed concurrently. Within one
/// consumer everything is strictly sequential: no overlapping polls, no
/// overlapping deliveries. That is intentional, because acknowledgement
/// is a single scalar cursor.
pub struct FeedConsumer {
    transport: Arc<dyn Transport>,
    feed_id: String,
    cursor: String,
    backoff: BackoffConfig,
    cancel: CancellationToken,
}

impl FeedConsumer {
    /// Create a consumer starting at the feed's current cursor
    pub fn new(transport: Arc<dyn Transport>, feed: &Feed) -> Self {
        Self::at_cursor(transport, &feed.id, &feed.cursor)
    }

    /// Create a consumer for `feed_id` starting at an explicit cursor.
    ///
    /// This is how a caller resumes after a restart: cursor durability
    /// across processes is the caller's responsibility.
    pub fn at_cursor(
        transport: Arc<dyn Transport>,
        feed_id: impl Into<String>,
        cursor: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            feed_id: feed_id.into(),
            cursor: cursor.into(),
            backoff: BackoffConfig::default(),
            cancel: CancellationToken::new(),
        }
    }

    /// Override the backoff policy
    #[must_use]
    pub fn with_backoff(mut self, backoff: BackoffConfig) -> Self {
        self.backoff = backoff;
        self
    }

    /// Token for cancelling the loop from outside.
    ///
    /// Cancellation is observed at the next suspension point (between
    /// items, or during a backoff wait) and terminates the loop without
    /// further network calls.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// The committed cursor: the position of the last acknowledged item.
    ///
    /// Valid to read after [`consume`](Self::consume) returns; feed it to
    /// [`at_cursor`](Self::at_cursor) to resume.
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    /// Run the consume loop, delivering each item to `handler`.
    ///
    /// The loop never completes on its own while the feed exists: it
    /// returns `Ok(())` only on a [`Decision::Stop`] or external
    /// cancellation, and `Err` on a permanent request error (e.g. the
    /// feed was deleted) or a handler error. Transient server errors are
    /// retried forever with backoff and never surface to the handler.
    pub async fn consume<T, F>(&mut self, mut handler: F) -> Result<()>
    where
        T: DeserializeOwned,
        F: FnMut(T) -> Result<Decision>,
    {
        let mut backoff = Backoff::new(self.backoff.clone());

        loop {
            if self.cancel.is_cancelled() {
                debug!(feed = %self.feed_id, "consume cancelled");
                return Ok(());
            }

            let batch = match self.poll::<T>().await {
                Ok(batch) => batch,
                Err(e) if e.is_retryable() => {
                    warn!(feed = %self.feed_id, error = %e, "transient poll failure");
                    if !backoff.wait(&self.cancel).await {
                        return Ok(());
                    }
                    continue;
                }
                Err(e) => return Err(e),
            };

            if batch.items.is_empty() {
                if !backoff.wait(&self.cancel).await {
                    return Ok(());
                }
                continue;
            }
            backoff.reset();

            if batch.cursors.len() != batch.items.len() {
                return Err(Error::decode(format!(
                    "feed batch has {} items but {} cursors",
                    batch.items.len(),
                    batch.cursors.len()
                )));
            }

            for (item, item_cursor) in batch.items.into_iter().zip(batch.cursors) {
                if self.cancel.is_cancelled() {
                    debug!(feed = %self.feed_id, "consume cancelled");
                    return Ok(());
                }

                match handler(item)? {
                    Decision::Continue { ack } => {
                        if ack {
                            self.cursor = item_cursor;
                        }
                    }
                    Decision::Stop { ack } => {
                        if ack {
                            self.cursor = item_cursor;
                        }
                        debug!(feed = %self.feed_id, "consume stopped by handler");
                        return Ok(());
                    }
                }
            }
        }
    }

    /// One bare poll at the committed cursor
    async fn poll<T: DeserializeOwned>(&self) -> Result<FeedBatch<T>> {
        let body = json!({ "id": self.feed_id, "cursor": self.cursor });
        let response = self.transport.request("/stream-feed-items", body).await?;
        let batch: FeedBatch<T> = serde_json::from_value(response)
            .map_err(|e| Error::decode(format!("invalid feed batch: {e}")))?;

        debug!(feed = %self.feed_id, items = batch.items.len(), "polled feed");
        Ok(batch)
    }
}

impl std::fmt::Debug for FeedConsumer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedConsumer")
            .field("feed_id", &self.feed_id)
            .field("cursor", &self.cursor)
            .field("backoff", &self.backoff)
            .finish_non_exhaustive()
    }
}
