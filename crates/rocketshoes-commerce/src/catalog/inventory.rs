//! Stock levels reported by the catalog.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Available quantity for a product, as reported by the stock service.
///
/// Always fetched fresh; never cached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Stock {
    /// Product the level belongs to, when the service echoes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Units available.
    pub amount: i64,
}

impl Stock {
    /// Create a stock level.
    pub fn new(amount: i64) -> Self {
        Self { id: None, amount }
    }

    /// Check if nothing is available.
    pub fn is_depleted(&self) -> bool {
        self.amount <= 0
    }

    /// Check if a specific quantity is available.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity <= self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_and_without_id() {
        let with_id: Stock = serde_json::from_str(r#"{"id":2,"amount":5}"#).unwrap();
        assert_eq!(with_id.id, Some(ProductId::new(2)));
        assert_eq!(with_id.amount, 5);

        let bare: Stock = serde_json::from_str(r#"{"amount":0}"#).unwrap();
        assert!(bare.is_depleted());
    }

    #[test]
    fn test_can_fulfill() {
        let stock = Stock::new(3);
        assert!(stock.can_fulfill(3));
        assert!(!stock.can_fulfill(4));
    }
}
