//! Query engine module
//!
//! Cursor-paginated retrieval over list-style endpoints.
//!
//! # Overview
//!
//! A [`Query`] is a reusable, restartable descriptor (filter, filter
//! parameters, page size, optional starting cursor) bound to one endpoint.
//! It produces pages lazily via the page fetcher and exposes three
//! consumption modes:
//!
//! - [`Query::page`] - one page, verbatim, with its cursor for manual
//!   resumption
//! - [`Query::all`] - every matching item, concatenated in server order
//! - [`Query::each`] - every matching item streamed through a handler,
//!   the memory-safe alternative to `all`

mod executor;
mod types;

pub use executor::{fetch_page, Query};
pub use types::{FilterParam, Page, QueryParams};
