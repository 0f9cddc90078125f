//! Shopping cart domain for the RocketShoes storefront.
//!
//! This crate provides the state container behind the storefront's cart:
//!
//! - **Catalog**: products, live stock levels, and the [`catalog::Catalog`]
//!   seam with HTTP and in-memory implementations
//! - **Cart**: entries, quantities, totals, and the persisted
//!   [`cart::CartStore`]
//! - **Notices**: the fixed user-facing messages operations raise on failure
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rocketshoes_cache::FileStore;
//! use rocketshoes_commerce::prelude::*;
//!
//! let store = Arc::new(
//!     CartStore::builder(
//!         Arc::new(HttpCatalog::with_base_url("http://localhost:3333")),
//!         Arc::new(FileStore::open(".rocketshoes/storage.json")?),
//!     )
//!     .open()?,
//! );
//!
//! store.add_product(ProductId::new(1)).await?;
//! store
//!     .update_product_amount(UpdateProductAmount { product_id: ProductId::new(1), amount: 3 })
//!     .await?;
//!
//! let summary = store.summary(Currency::BRL).await?;
//! println!("{} items, {}", summary.total_quantity, summary.subtotal);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, HttpCatalog, InMemoryCatalog, Product, Stock};

    // Cart
    pub use crate::cart::{
        Cart, CartEntry, CartStore, CartSummary, LogNotifier, Notice, NoticeLevel, Notifier,
        RecordingNotifier, UpdateProductAmount,
    };
}
