//! The persisted cart store.
//!
//! [`CartStore`] owns the shopper's cart, validates quantities against the
//! catalog's live stock, and mirrors every accepted change to a
//! [`KeyValueStore`]. It is built once at the application boundary and
//! shared as `Arc<CartStore>`.
//!
//! Each mutating operation holds the cart lock for its whole
//! fetch-check-persist cycle, so concurrent calls on one store are applied
//! one after another and never overwrite each other's result.

use std::sync::Arc;

use rocketshoes_cache::{cache_key, Cache, KeyValueStore};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::cart::notify::{messages, LogNotifier, Notice, Notifier};
use crate::cart::{Cart, CartSummary};
use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// Storage key the cart lives under unless configured otherwise.
pub fn default_storage_key() -> String {
    cache_key!("@RocketShoes", "cart")
}

/// Arguments of [`CartStore::update_product_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

/// Builder for [`CartStore`].
pub struct CartStoreBuilder {
    catalog: Arc<dyn Catalog>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    storage_key: String,
}

impl CartStoreBuilder {
    /// Where notices go. Defaults to [`LogNotifier`].
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Storage key for the persisted cart.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Load the persisted cart and build the store.
    ///
    /// A missing value yields an empty cart. A value that can't be decoded
    /// into a valid cart is discarded with a warning and also yields an empty
    /// cart; it is overwritten by the next successful mutation. Storage
    /// failures other than decoding are returned.
    pub fn open(self) -> Result<CartStore, CommerceError> {
        let cache = Cache::new(self.storage);
        let cart = match cache.get::<Cart>(&self.storage_key) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) if e.is_decode() => {
                warn!(key = %self.storage_key, error = %e, "discarding unreadable persisted cart");
                Cart::new()
            }
            Err(e) => return Err(e.into()),
        };
        debug!(key = %self.storage_key, entries = cart.len(), "cart loaded");

        Ok(CartStore {
            cart: Mutex::new(cart),
            catalog: self.catalog,
            cache,
            notifier: self.notifier,
            storage_key: self.storage_key,
        })
    }
}

/// The shopper's cart, persisted on every change.
pub struct CartStore {
    cart: Mutex<Cart>,
    catalog: Arc<dyn Catalog>,
    cache: Cache<Arc<dyn KeyValueStore>>,
    notifier: Arc<dyn Notifier>,
    storage_key: String,
}

impl CartStore {
    /// Start building a store over a catalog and a storage backend.
    pub fn builder(catalog: Arc<dyn Catalog>, storage: Arc<dyn KeyValueStore>) -> CartStoreBuilder {
        CartStoreBuilder {
            catalog,
            storage,
            notifier: Arc::new(LogNotifier),
            storage_key: default_storage_key(),
        }
    }

    /// Storage key the cart is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Snapshot of the current cart.
    pub async fn cart(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    /// Totals of the current cart.
    pub async fn summary(&self, currency: Currency) -> Result<CartSummary, CommerceError> {
        self.cart.lock().await.summary(currency)
    }

    /// Add one unit of a product.
    ///
    /// A product not yet in the cart is fetched from the catalog and appended
    /// with quantity 1; a product already present has its quantity raised by
    /// one. Either way the resulting quantity must be covered by stock.
    #[tracing::instrument(skip_all, fields(product_id = %product_id))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<(), CommerceError> {
        let mut cart = self.cart.lock().await;
        let next = self.next_after_add(&cart, product_id).await;
        self.commit(&mut cart, next, messages::ADD_FAILED)
    }

    /// Remove a product's entry entirely.
    #[tracing::instrument(skip_all, fields(product_id = %product_id))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<(), CommerceError> {
        let mut cart = self.cart.lock().await;
        let next = without(&cart, product_id);
        self.commit(&mut cart, next, messages::REMOVE_FAILED)
    }

    /// Set a product's quantity.
    ///
    /// Quantities of zero or less are ignored without touching the catalog
    /// or the cart.
    #[tracing::instrument(skip_all, fields(product_id = %request.product_id, amount = request.amount))]
    pub async fn update_product_amount(
        &self,
        request: UpdateProductAmount,
    ) -> Result<(), CommerceError> {
        let UpdateProductAmount { product_id, amount } = request;
        if amount <= 0 {
            debug!("ignoring non-positive amount");
            return Ok(());
        }

        let mut cart = self.cart.lock().await;
        let next = self.next_after_update(&cart, product_id, amount).await;
        self.commit(&mut cart, next, messages::UPDATE_FAILED)
    }

    async fn next_after_add(&self, cart: &Cart, id: ProductId) -> Result<Cart, CommerceError> {
        let stock = self.catalog.stock(id).await?;
        let current = cart.amount_of(id);
        let requested = current.checked_add(1).ok_or(CommerceError::Overflow)?;
        if !stock.can_fulfill(requested) {
            return Err(CommerceError::OutOfStock {
                product_id: id,
                requested,
                available: stock.amount,
            });
        }

        let mut next = cart.clone();
        if current > 0 {
            next.increment(id)?;
        } else {
            let product = self.catalog.product(id).await?;
            if product.id != id {
                return Err(CommerceError::CatalogError(format!(
                    "requested product {} but catalog returned {}",
                    id, product.id
                )));
            }
            next.push_new(product)?;
        }
        Ok(next)
    }

    async fn next_after_update(
        &self,
        cart: &Cart,
        id: ProductId,
        amount: i64,
    ) -> Result<Cart, CommerceError> {
        let stock = self.catalog.stock(id).await?;
        if !stock.can_fulfill(amount) {
            return Err(CommerceError::OutOfStock {
                product_id: id,
                requested: amount,
                available: stock.amount,
            });
        }

        let mut next = cart.clone();
        if !next.set_amount(id, amount)? {
            debug!("no entry for product; cart persisted unchanged");
        }
        Ok(next)
    }

    /// Persist `next` and adopt it, or report why there is no `next`.
    ///
    /// The in-memory cart is replaced only after the write succeeds.
    fn commit(
        &self,
        cart: &mut Cart,
        next: Result<Cart, CommerceError>,
        failure_message: &str,
    ) -> Result<(), CommerceError> {
        let result = next.and_then(|next| {
            self.cache.set(&self.storage_key, &next)?;
            debug!(entries = next.len(), items = next.item_count(), "cart persisted");
            *cart = next;
            Ok(())
        });

        if let Err(e) = &result {
            let message = match e {
                CommerceError::OutOfStock { .. } => messages::OUT_OF_STOCK,
                _ => failure_message,
            };
            debug!(error = %e, notice = message, "cart operation rejected");
            self.notifier.notify(Notice::error(message));
        }
        result
    }
}

fn without(cart: &Cart, id: ProductId) -> Result<Cart, CommerceError> {
    let mut next = cart.clone();
    next.remove(id)?;
    Ok(next)
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("storage_key", &self.storage_key)
            .finish_non_exhaustive()
    }
}
