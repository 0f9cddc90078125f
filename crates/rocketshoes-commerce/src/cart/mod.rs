//! Shopping cart module.
//!
//! Contains the cart value types, the notice sink, and the persisted store.

mod cart;
mod notify;
mod store;

pub use cart::{Cart, CartEntry, CartSummary};
pub use notify::{messages, LogNotifier, Notice, NoticeLevel, Notifier, RecordingNotifier};
pub use store::{default_storage_key, CartStore, CartStoreBuilder, UpdateProductAmount};
