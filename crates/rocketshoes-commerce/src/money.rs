//! Money type for representing monetary values.
//!
//! Uses an integer count of the currency's minor unit so cart subtotals
//! don't accumulate floating-point error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    BRL,
    USD,
    EUR,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "BRL").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "R$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "BRL" => Some(Currency::BRL),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., centavos).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest
    /// minor unit.
    ///
    /// ```
    /// use rocketshoes_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(179.9, Currency::BRL);
    /// assert_eq!(price.amount_cents, 17990);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "R$ 179.90").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{} {:.places$}", self.currency.symbol(), self.to_decimal())
    }

    /// Add another Money value. `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let sum = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(sum, self.currency))
    }

    /// Multiply by a quantity. `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let product = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(product, self.currency))
    }

    /// Sum Money values, `None` on currency mismatch or overflow.
    pub fn try_sum<'a>(
        iter: impl IntoIterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(139.9, Currency::BRL).amount_cents, 13990);
        assert_eq!(Money::from_decimal(49.99, Currency::USD).amount_cents, 4999);
        // JPY has no decimals
        assert_eq!(Money::from_decimal(100.0, Currency::JPY).amount_cents, 100);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(17990, Currency::BRL).display(), "R$ 179.90");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5} 100");
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let brl = Money::new(1000, Currency::BRL);
        let usd = Money::new(1000, Currency::USD);
        assert_eq!(brl.try_add(&usd), None);
        assert_eq!(brl.try_add(&brl).map(|m| m.amount_cents), Some(2000));
    }

    #[test]
    fn test_try_multiply_overflow() {
        assert_eq!(Money::new(i64::MAX, Currency::BRL).try_multiply(2), None);
        assert_eq!(
            Money::new(1250, Currency::BRL).try_multiply(3),
            Some(Money::new(3750, Currency::BRL))
        );
    }

    #[test]
    fn test_try_sum() {
        let items = [Money::new(100, Currency::BRL), Money::new(250, Currency::BRL)];
        assert_eq!(
            Money::try_sum(&items, Currency::BRL),
            Some(Money::new(350, Currency::BRL))
        );
        assert_eq!(Money::try_sum(&items, Currency::USD), None);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("brl"), Some(Currency::BRL));
        assert_eq!(Currency::from_code("EUR"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("XXX"), None);
    }
}
