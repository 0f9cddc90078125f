//! In-process catalog for tests, demos, and offline use.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::catalog::{Catalog, Product, Stock};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// A [`Catalog`] held in memory.
///
/// Counts every call so callers can assert which lookups happened, and can
/// be switched offline to simulate transport failures.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<ProductId, Product>>,
    stock: RwLock<HashMap<ProductId, i64>>,
    offline: AtomicBool,
    stock_calls: AtomicUsize,
    product_calls: AtomicUsize,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product with its stock level.
    pub fn with_product(self, product: Product, stock: i64) -> Self {
        self.insert(product, stock);
        self
    }

    /// Add or replace a product with its stock level.
    pub fn insert(&self, product: Product, stock: i64) {
        let id = product.id;
        if let Ok(mut products) = self.products.write() {
            products.insert(id, product);
        }
        self.set_stock(id, stock);
    }

    /// Change the stock level of a product.
    pub fn set_stock(&self, id: ProductId, amount: i64) {
        if let Ok(mut stock) = self.stock.write() {
            stock.insert(id, amount);
        }
    }

    /// Make every call fail with a catalog error until switched back.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of stock lookups served or refused.
    pub fn stock_calls(&self) -> usize {
        self.stock_calls.load(Ordering::SeqCst)
    }

    /// Number of product lookups served or refused.
    pub fn product_calls(&self) -> usize {
        self.product_calls.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<(), CommerceError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(CommerceError::CatalogError(
                "catalog unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

fn poisoned<T>(_: T) -> CommerceError {
    CommerceError::CatalogError("catalog lock poisoned".to_string())
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn stock(&self, id: ProductId) -> Result<Stock, CommerceError> {
        self.stock_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let stock = self.stock.read().map_err(poisoned)?;
        stock
            .get(&id)
            .map(|&amount| Stock {
                id: Some(id),
                amount,
            })
            .ok_or_else(|| CommerceError::CatalogError(format!("HTTP 404: no stock for {}", id)))
    }

    async fn product(&self, id: ProductId) -> Result<Product, CommerceError> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let products = self.products.read().map_err(poisoned)?;
        products
            .get(&id)
            .cloned()
            .ok_or_else(|| CommerceError::CatalogError(format!("HTTP 404: no product {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookups_and_counters() {
        let catalog = InMemoryCatalog::new()
            .with_product(Product::new(ProductId::new(1), "Tênis", 179.9, ""), 3);

        assert_eq!(catalog.stock(ProductId::new(1)).await.unwrap().amount, 3);
        assert_eq!(catalog.product(ProductId::new(1)).await.unwrap().title, "Tênis");
        assert!(catalog.stock(ProductId::new(9)).await.is_err());

        assert_eq!(catalog.stock_calls(), 2);
        assert_eq!(catalog.product_calls(), 1);
    }

    #[tokio::test]
    async fn test_offline() {
        let catalog = InMemoryCatalog::new()
            .with_product(Product::new(ProductId::new(1), "Tênis", 179.9, ""), 3);
        catalog.set_offline(true);

        let err = catalog.stock(ProductId::new(1)).await.unwrap_err();
        assert!(matches!(err, CommerceError::CatalogError(_)));
    }
}
