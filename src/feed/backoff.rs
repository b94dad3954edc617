//! Backoff policy for idle and failing polls
//!
//! Deterministic exponential growth from a base delay up to a cap, plus
//! randomized jitter so many consumers polling the same feed type do not
//! stampede the server in lockstep. Reset as soon as any poll returns at
//! least one item.

use rand::Rng;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Configuration for the poll backoff policy
#[derive(Debug, Clone)]
pub struct BackoffConfig {
    /// Delay after the first empty or failed poll
    pub base: Duration,
    /// Multiplier applied per consecutive empty/failed poll
    pub growth: f64,
    /// Upper bound on the deterministic delay
    pub max: Duration,
    /// Add uniform jitter in `[0, delay/2]` on top of the delay
    pub jitter: bool,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(100),
            growth: 2.0,
            max: Duration::from_secs(10),
            jitter: true,
        }
    }
}

/// Tracks consecutive empty/failed polls and produces the next delay
#[derive(Debug)]
pub struct Backoff {
    config: BackoffConfig,
    streak: u32,
}

impl Backoff {
    /// Create a backoff tracker with the given policy
    pub fn new(config: BackoffConfig) -> Self {
        Self { config, streak: 0 }
    }

    /// Number of consecutive empty/failed polls so far
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Reset after a poll that returned items
    pub fn reset(&mut self) {
        self.streak = 0;
    }

    /// Compute the delay for the current streak and advance the streak.
    ///
    /// The deterministic part is `min(max, base * growth^streak)`; jitter
    /// is added on top, so the observed delay may exceed the cap by up to
    /// half of it.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn next_delay(&mut self) -> Duration {
        let exponent = i32::try_from(self.streak).unwrap_or(i32::MAX).min(32);
        let grown = self.config.base.as_millis() as f64 * self.config.growth.powi(exponent);
        let capped = grown.min(self.config.max.as_millis() as f64) as u64;

        let delay_ms = if self.config.jitter {
            capped + rand::rng().random_range(0..capped / 2 + 1)
        } else {
            capped
        };

        self.streak = self.streak.saturating_add(1);
        Duration::from_millis(delay_ms)
    }

    /// Sleep for the next delay, returning `false` if cancelled first.
    ///
    /// Cancellation is observed immediately, not after the sleep.
    pub async fn wait(&mut self, cancel: &CancellationToken) -> bool {
        let delay = self.next_delay();
        debug!(streak = self.streak, ?delay, "backing off");

        tokio::select! {
            () = cancel.cancelled() => false,
            () = tokio::time::sleep(delay) => true,
        }
    }
}
