//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Requested quantity exceeds the stock the catalog reports.
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Item not in cart.
    #[error("Product not in cart: {0}")]
    ProductNotInCart(ProductId),

    /// Product already has an entry in the cart.
    #[error("Product already in cart: {0}")]
    DuplicateProduct(ProductId),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,

    /// Catalog (stock or product service) failure.
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<rocketshoes_data::FetchError> for CommerceError {
    fn from(e: rocketshoes_data::FetchError) -> Self {
        CommerceError::CatalogError(e.to_string())
    }
}

impl From<rocketshoes_cache::CacheError> for CommerceError {
    fn from(e: rocketshoes_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
