//! Newtype IDs for type-safe identifiers.
//!
//! The catalog service identifies products by integer; wrapping it keeps a
//! product id from being confused with a quantity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product identifier as issued by the catalog service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Create a new ID.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw integer.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_number() {
        let id = ProductId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(serde_json::from_str::<ProductId>("7").unwrap(), ProductId::new(7));
    }

    #[test]
    fn test_id_display_and_parse() {
        let id: ProductId = " 12 ".parse().unwrap();
        assert_eq!(id, ProductId::from(12));
        assert_eq!(format!("{}", id), "12");
        assert!("abc".parse::<ProductId>().is_err());
    }
}
