//! Product source API client and the in-memory product pipeline.
//!
//! # Architecture
//!
//! - The upstream is a public mock product API (plain JSON REST)
//! - The API is the source of truth - no local sync, direct calls
//! - Responses are cached in-memory via `moka` (5 minute TTL); concurrent
//!   lookups for a cold key are coalesced into a single upstream request
//! - Filtering, searching and sorting happen in-memory over the cached
//!   product list ([`query`])
//!
//! # Example
//!
//! ```rust,ignore
//! use essence_storefront::catalog::{CatalogClient, ProductQuery, SortKey};
//!
//! let client = CatalogClient::new(&config.catalog);
//! let products = client.products().await?;
//! let view = catalog::query::filter_and_sort(&products, &ProductQuery {
//!     sort: SortKey::PriceAsc,
//!     ..ProductQuery::default()
//! });
//! ```

mod cache;
mod client;
pub mod query;
pub mod types;

pub use client::CatalogClient;
pub use query::{ProductQuery, SortKey, filter_and_sort};
pub use types::{Product, Rating};

use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur when talking to the product source API.
///
/// Cloneable so that a single upstream failure can be shared across the
/// coalesced callers of a cache entry.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[source] Arc<reqwest::Error>),

    /// Upstream returned a non-success status.
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[source] Arc<serde_json::Error>),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(Arc::new(err))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(Arc::new(err))
    }
}
