//! Resource APIs
//!
//! Thin typed wrappers over the shared transport, one handle per
//! resource. CRUD calls serialize their parameters, post to the matching
//! endpoint, and deserialize the response; list-style calls hand off to
//! the query engine.

mod accounts;
mod feeds;
mod keys;

pub use accounts::{Account, AccountsApi, CreateAccountParams, UpdateTagsParams};
pub use feeds::FeedsApi;
pub use keys::{CreateKeyParams, Key, KeysApi};
