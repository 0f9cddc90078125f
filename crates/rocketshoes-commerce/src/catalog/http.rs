//! Catalog backed by the storefront's JSON API.

use async_trait::async_trait;
use rocketshoes_data::FetchClient;

use crate::catalog::{Catalog, Product, Stock};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Path of the stock endpoint for a product.
pub fn stock_path(id: ProductId) -> String {
    format!("/stock/{}", id)
}

/// Path of the product endpoint for a product.
pub fn product_path(id: ProductId) -> String {
    format!("/products/{}", id)
}

/// [`Catalog`] over `GET /stock/{id}` and `GET /products/{id}`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: FetchClient,
}

impl HttpCatalog {
    /// Wrap a client. The client should carry the API base URL.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Build a catalog for an API base URL with default client settings.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(FetchClient::new().with_base_url(base_url))
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn stock(&self, id: ProductId) -> Result<Stock, CommerceError> {
        Ok(self.client.get_json(stock_path(id)).await?)
    }

    async fn product(&self, id: ProductId) -> Result<Product, CommerceError> {
        Ok(self.client.get_json(product_path(id)).await?)
    }
}
