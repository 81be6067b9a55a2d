//! HTTP client for the product source API.

use std::sync::Arc;
use std::time::Duration;

use essence_core::ProductId;
use moka::future::Cache;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::CatalogError;
use super::cache::CacheValue;
use super::types::Product;
use crate::config::CatalogApiConfig;

/// Cache TTL for product API responses.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Client for the product source API.
///
/// Provides typed access to products and category names. Responses are
/// cached for 5 minutes; concurrent requests for the same cold key issue
/// exactly one upstream call (the cache coalesces in-flight loads).
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new product API client.
    #[must_use]
    pub fn new(config: &CatalogApiConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                cache,
            }),
        }
    }

    /// Fetch a JSON document from the API.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{path}", self.inner.base_url);

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        // Read as text first for better parse-error diagnostics
        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse product API response"
                );
                Err(e.into())
            }
        }
    }

    /// Look up a cache entry, loading it through `fetch` on a miss.
    ///
    /// `moka` guarantees a single in-flight load per key, which is what
    /// makes fetch-if-empty issue one network call even under races.
    async fn get_or_fetch<T, F>(
        &self,
        key: String,
        path: String,
        wrap: fn(T) -> CacheValue,
        unwrap: F,
    ) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
        F: FnOnce(CacheValue) -> Option<T>,
    {
        let value = self
            .inner
            .cache
            .try_get_with(key, async {
                debug!(path = %path, "catalog cache miss");
                self.fetch::<T>(&path).await.map(wrap)
            })
            .await
            .map_err(|e: Arc<CatalogError>| (*e).clone())?;

        unwrap(value).ok_or_else(|| CatalogError::NotFound(path))
    }

    /// Get the full product list (`GET /products`).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails; callers degrade to an
    /// empty list.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_or_fetch(
            "products:all".to_string(),
            "/products".to_string(),
            CacheValue::Products,
            |value| match value {
                CacheValue::Products(products) => Some(products),
                _ => None,
            },
        )
        .await
    }

    /// Get a limited product list (`GET /products?limit=N`).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn products_limited(&self, limit: u32) -> Result<Vec<Product>, CatalogError> {
        self.get_or_fetch(
            format!("products:limit:{limit}"),
            format!("/products?limit={limit}"),
            CacheValue::Products,
            |value| match value {
                CacheValue::Products(products) => Some(products),
                _ => None,
            },
        )
        .await
    }

    /// Get a single product by id (`GET /products/:id`).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the product does not exist, or
    /// another variant if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.get_or_fetch(
            format!("product:{id}"),
            format!("/products/{id}"),
            |product| CacheValue::Product(Box::new(product)),
            |value| match value {
                CacheValue::Product(product) => Some(*product),
                _ => None,
            },
        )
        .await
    }

    /// Get the category name list (`GET /products/categories`).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn category_names(&self) -> Result<Vec<String>, CatalogError> {
        self.get_or_fetch(
            "categories".to_string(),
            "/products/categories".to_string(),
            CacheValue::Categories,
            |value| match value {
                CacheValue::Categories(names) => Some(names),
                _ => None,
            },
        )
        .await
    }
}
