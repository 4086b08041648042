//! Derived cart pricing.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat shipping charge in cents ($5.99), applied to every order.
pub const FLAT_SHIPPING_CENTS: i64 = 599;

/// The flat shipping charge as a [`Money`] value.
pub(crate) fn flat_shipping() -> Money {
    Money::new(FLAT_SHIPPING_CENTS, Currency::USD)
}

/// Computed cart totals. Pure derived values: recomputed on every
/// read, never stored alongside the cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartPricing {
    /// Sum of unit price times quantity over all lines.
    pub subtotal: Money,
    /// Flat shipping charge.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_shipping_display() {
        assert_eq!(flat_shipping().display(), "$5.99");
    }
}
