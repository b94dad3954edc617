//! HTTP transport module
//!
//! Provides the JSON-RPC style transport every engine call goes through.
//!
//! # Features
//!
//! - **Single bare attempt**: no retry logic lives here; the feed consume
//!   loop owns retry policy, one-shot queries propagate failures as-is
//! - **Error classification**: 4xx responses become permanent request
//!   errors carrying the server's error code, 5xx/timeout/connection
//!   failures become transient server errors
//! - **Configuration**: base URL joining, default headers, timeout,
//!   user agent

mod client;

pub use client::{ApiClient, ClientConfig, ClientConfigBuilder, Transport};

#[cfg(test)]
mod tests;
