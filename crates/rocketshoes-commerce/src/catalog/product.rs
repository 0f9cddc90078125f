//! Product records as served by the catalog.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Display fields are carried for consumers and never interpreted by the
/// cart. Fields the catalog sends that aren't modelled here are kept in
/// `extra` and written back verbatim when the cart is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Unit price as a decimal amount in the store currency.
    #[serde(default)]
    pub price: f64,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Any other fields from the catalog.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    /// Create a product with display fields.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Unit price in the given currency.
    pub fn unit_price(&self, currency: Currency) -> Money {
        Money::from_decimal(self.price, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_preserved() {
        let raw = r#"{"id":3,"title":"Tênis Adidas Duramo Lite 2.0","price":219.9,"image":"https://img/3.jpg","brand":"adidas"}"#;
        let product: Product = serde_json::from_str(raw).unwrap();

        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.extra.get("brand"), Some(&serde_json::json!("adidas")));

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["brand"], "adidas");
        assert_eq!(back["price"], 219.9);
    }

    #[test]
    fn test_missing_display_fields_default() {
        let product: Product = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert_eq!(product.title, "");
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_unit_price() {
        let product = Product::new(ProductId::new(1), "Tênis", 179.9, "");
        assert_eq!(product.unit_price(Currency::BRL).amount_cents, 17990);
    }
}
