//! Money type for representing monetary values.
//!
//! Amounts are stored in the smallest unit of the currency (cents for
//! USD) to avoid floating-point precision issues in totals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
        }
    }

    /// Number of decimal places shown for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
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
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use wraps_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
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

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }

    /// Checked addition. Returns `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let cents = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(cents, self.currency))
    }

    /// Checked multiplication by a scalar quantity.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let cents = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(cents, self.currency))
    }

    /// Checked sum of an iterator of Money values.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        let mut acc = Money::zero(currency);
        for m in iter {
            acc = acc.try_add(m)?;
        }
        Some(acc)
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
    fn test_money_from_cents() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.amount_cents, 4999);
        assert_eq!(m.currency, Currency::USD);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_cents, 4999);

        let m = Money::from_decimal(35.50, Currency::USD);
        assert_eq!(m.amount_cents, 3550);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");

        let m = Money::new(599, Currency::USD);
        assert_eq!(m.display(), "$5.99");
    }

    #[test]
    fn test_money_try_add() {
        let a = Money::new(1000, Currency::USD);
        let b = Money::new(500, Currency::USD);
        assert_eq!(a.try_add(&b).unwrap().amount_cents, 1500);
    }

    #[test]
    fn test_money_currency_mismatch() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        assert!(usd.try_add(&eur).is_none());
    }

    #[test]
    fn test_money_try_multiply() {
        let m = Money::new(3550, Currency::USD);
        assert_eq!(m.try_multiply(2).unwrap().amount_cents, 7100);
    }

    #[test]
    fn test_money_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::USD);
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    fn test_money_try_sum() {
        let values = [
            Money::new(4999, Currency::USD),
            Money::new(7100, Currency::USD),
        ];
        let sum = Money::try_sum(values.iter(), Currency::USD).unwrap();
        assert_eq!(sum.amount_cents, 12099);
    }
}
