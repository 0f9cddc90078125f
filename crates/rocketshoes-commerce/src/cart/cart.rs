//! Cart and cart entry types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A product plus the quantity the shopper selected.
///
/// Serialized as the product's own fields with `amount` added alongside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// The product as returned by the catalog.
    #[serde(flatten)]
    pub product: Product,
    /// Selected quantity, always at least 1.
    pub amount: i64,
}

impl CartEntry {
    /// Create an entry with quantity 1.
    pub fn new(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    /// Product identifier of this entry.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    pub fn line_total(&self, currency: Currency) -> Result<Money, CommerceError> {
        self.product
            .unit_price(currency)
            .try_multiply(self.amount)
            .ok_or(CommerceError::Overflow)
    }
}

/// An ordered sequence of cart entries.
///
/// Order is first-add order. No product appears twice and every amount is
/// positive; decoding rejects values that break either rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<CartEntry>", into = "Vec<CartEntry>")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from entries, validating the invariants.
    pub fn from_entries(entries: Vec<CartEntry>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.amount <= 0 {
                return Err(CommerceError::InvalidQuantity(entry.amount));
            }
            if !seen.insert(entry.id()) {
                return Err(CommerceError::DuplicateProduct(entry.id()));
            }
        }
        Ok(Self { entries })
    }

    /// The entries in order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartEntry> {
        self.entries.iter()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Check if a product has an entry.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Current quantity of a product, 0 if absent.
    pub fn amount_of(&self, id: ProductId) -> i64 {
        self.get(id).map_or(0, |e| e.amount)
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> i64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Append a new entry with quantity 1.
    pub fn push_new(&mut self, product: Product) -> Result<(), CommerceError> {
        if self.contains(product.id) {
            return Err(CommerceError::DuplicateProduct(product.id));
        }
        self.entries.push(CartEntry::new(product));
        Ok(())
    }

    /// Increase an existing entry's quantity by one, returning the new quantity.
    pub fn increment(&mut self, id: ProductId) -> Result<i64, CommerceError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(CommerceError::ProductNotInCart(id))?;
        entry.amount = entry.amount.checked_add(1).ok_or(CommerceError::Overflow)?;
        Ok(entry.amount)
    }

    /// Set the quantity of the matching entry.
    ///
    /// Returns whether an entry matched; an unmatched id leaves the cart as is.
    pub fn set_amount(&mut self, id: ProductId, amount: i64) -> Result<bool, CommerceError> {
        if amount <= 0 {
            return Err(CommerceError::InvalidQuantity(amount));
        }
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) => {
                entry.amount = amount;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a product's entry, keeping the order of the others.
    pub fn remove(&mut self, id: ProductId) -> Result<CartEntry, CommerceError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or(CommerceError::ProductNotInCart(id))?;
        Ok(self.entries.remove(index))
    }

    /// Totals for display.
    pub fn summary(&self, currency: Currency) -> Result<CartSummary, CommerceError> {
        let line_totals = self
            .entries
            .iter()
            .map(|e| e.line_total(currency))
            .collect::<Result<Vec<_>, _>>()?;
        let subtotal = Money::try_sum(&line_totals, currency).ok_or(CommerceError::Overflow)?;

        Ok(CartSummary {
            distinct_items: self.len(),
            total_quantity: self.item_count(),
            subtotal,
        })
    }
}

impl TryFrom<Vec<CartEntry>> for Cart {
    type Error = CommerceError;

    fn try_from(entries: Vec<CartEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<Cart> for Vec<CartEntry> {
    fn from(cart: Cart) -> Self {
        cart.entries
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartEntry;
    type IntoIter = std::slice::Iter<'a, CartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Aggregate figures shown next to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Number of distinct products (the header badge).
    pub distinct_items: usize,
    /// Sum of all quantities.
    pub total_quantity: i64,
    /// Sum of price times quantity.
    pub subtotal: Money,
}
