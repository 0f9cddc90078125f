//! The catalog seam the cart talks to.

use async_trait::async_trait;

use crate::catalog::{Product, Stock};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Read-only access to stock levels and product records.
///
/// Implementations report every transport or decoding failure as
/// [`CommerceError::CatalogError`].
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Current stock for a product.
    async fn stock(&self, id: ProductId) -> Result<Stock, CommerceError>;

    /// Full product record.
    async fn product(&self, id: ProductId) -> Result<Product, CommerceError>;
}
