//! Product catalog module.
//!
//! Contains the product and stock types, the [`Catalog`] trait the cart
//! queries, and its HTTP and in-memory implementations.

mod http;
mod inventory;
mod memory;
mod product;
mod source;

pub use http::{product_path, stock_path, HttpCatalog};
pub use inventory::Stock;
pub use memory::InMemoryCatalog;
pub use product::Product;
pub use source::Catalog;
