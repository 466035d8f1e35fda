//! Storefront API client seams.
//!
//! The cart depends on the catalog and stock endpoints only through these
//! traits, so consumers wire in the HTTP clients explicitly and tests
//! substitute in-memory fakes.

use crate::catalog::{Product, Stock};
use crate::ids::ProductId;
use async_trait::async_trait;
use shop_data::{FetchClient, FetchError, Response};

/// Catalog lookups.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the catalog record for a product.
    async fn product(&self, id: ProductId) -> Result<Product, FetchError>;
}

/// Stock lookups.
#[async_trait]
pub trait StockApi: Send + Sync {
    /// Fetch the currently available quantity for a product.
    async fn stock(&self, id: ProductId) -> Result<Stock, FetchError>;
}

async fn fetch_json<T: serde::de::DeserializeOwned>(
    client: &FetchClient,
    path: String,
) -> Result<T, FetchError> {
    let request = client.get(&path);
    let url = request.url().to_string();
    let response: Response = request.send().await?;
    response.error_for_status(&url)?.json()
}

/// Catalog client over the storefront HTTP API.
pub struct HttpCatalog {
    client: FetchClient,
}

impl HttpCatalog {
    /// Create a client against the API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: FetchClient::new().with_base_url(base_url),
        }
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        fetch_json(&self.client, format!("/products/{}", id)).await
    }
}

/// Stock client over the storefront HTTP API.
pub struct HttpStock {
    client: FetchClient,
}

impl HttpStock {
    /// Create a client against the API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: FetchClient::new().with_base_url(base_url),
        }
    }
}

#[async_trait]
impl StockApi for HttpStock {
    async fn stock(&self, id: ProductId) -> Result<Stock, FetchError> {
        fetch_json(&self.client, format!("/stock/{}", id)).await
    }
}
