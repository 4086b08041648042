//! Cart and line item types.

use crate::cart::pricing::{flat_shipping, CartPricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{LineItemId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// User-selected customization attached to a line item, independent of
/// the base product record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Customization {
    /// Chosen color, if the user picked one.
    pub color: Option<String>,
    /// Chosen theme, if the user picked one.
    pub theme: Option<String>,
}

impl Customization {
    /// Create a customization with both choices set.
    pub fn new(color: Option<String>, theme: Option<String>) -> Self {
        Self { color, theme }
    }

    /// Check whether anything was customized.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.theme.is_none()
    }
}

/// One entry in the cart: a product reference, quantity, and chosen
/// customization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique line item identifier.
    pub id: LineItemId,
    /// The product this line references (the catalog owns the data).
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Product image URL (denormalized for display).
    pub image: String,
    /// Unit price at the time the line was added.
    pub unit_price: Money,
    /// Quantity, never below 1.
    pub quantity: i64,
    /// Chosen customization options.
    pub customization: Customization,
}

impl LineItem {
    /// Create a line item for a product.
    ///
    /// Fails if the quantity is below 1 or the line total would
    /// overflow.
    pub fn new(
        product: &Product,
        quantity: i64,
        customization: Customization,
    ) -> Result<Self, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        product
            .price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            id: LineItemId::generate(),
            product_id: product.id.clone(),
            title: product.title.clone(),
            image: product.image.clone(),
            unit_price: product.price,
            quantity,
            customization,
        })
    }

    /// The line total: unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// The shopping cart: an ordered list of line items.
///
/// Subtotal and total are derived values recomputed on every call to
/// [`Cart::pricing`], never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new line item for a product.
    ///
    /// A new line is always appended, even when an identical
    /// product + customization pair is already in the cart; lines are
    /// never merged.
    pub fn add_line(
        &mut self,
        product: &Product,
        quantity: i64,
        customization: Customization,
    ) -> Result<LineItemId, CommerceError> {
        let item = LineItem::new(product, quantity, customization)?;
        let id = item.id.clone();
        self.items.push(item);
        Ok(id)
    }

    /// Replace a line's quantity.
    ///
    /// Quantities below 1 and unknown ids are ignored; returns whether
    /// anything changed.
    pub fn set_quantity(&mut self, line_item_id: &LineItemId, quantity: i64) -> bool {
        if quantity < 1 {
            return false;
        }
        match self.items.iter_mut().find(|i| &i.id == line_item_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Delete a line item. Removing an unknown id is a no-op.
    pub fn remove_line(&mut self, line_item_id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != line_item_id);
        self.items.len() < len_before
    }

    /// Number of lines in the cart (drives the header badge).
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total unit count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line by id.
    pub fn get_line(&self, line_item_id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == line_item_id)
    }

    /// Compute subtotal, shipping, and total.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        let line_totals = self
            .items
            .iter()
            .map(|i| i.line_total())
            .collect::<Result<Vec<_>, _>>()?;

        let subtotal = Money::try_sum(line_totals.iter(), Currency::USD)
            .ok_or(CommerceError::Overflow)?;
        let shipping = flat_shipping();
        let total = subtotal
            .try_add(&shipping)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            subtotal,
            shipping,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(
            id,
            format!("Gift {id}"),
            Money::new(cents, Currency::USD),
            4.5,
            "img",
        )
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_line() {
        let mut cart = Cart::new();
        let p = product("1", 3999);
        let id = cart.add_line(&p, 2, Customization::default()).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        let line = cart.get_line(&id).unwrap();
        assert_eq!(line.title, "Gift 1");
        assert_eq!(line.unit_price.amount_cents, 3999);
    }

    #[test]
    fn test_add_never_merges_lines() {
        let mut cart = Cart::new();
        let p = product("1", 3999);
        let custom = Customization::new(Some("Pink".into()), Some("Birthday".into()));

        cart.add_line(&p, 1, custom.clone()).unwrap();
        cart.add_line(&p, 1, custom).unwrap();

        // Identical product + customization still lands on two lines.
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_rejects_sub_one_quantity() {
        let mut cart = Cart::new();
        let p = product("1", 3999);
        assert!(matches!(
            cart.add_line(&p, 0, Customization::default()),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        let id = cart
            .add_line(&product("1", 1000), 1, Customization::default())
            .unwrap();

        assert!(cart.set_quantity(&id, 5));
        assert_eq!(cart.get_line(&id).unwrap().quantity, 5);
    }

    #[test]
    fn test_set_quantity_below_one_is_noop() {
        let mut cart = Cart::new();
        let id = cart
            .add_line(&product("1", 1000), 3, Customization::default())
            .unwrap();

        assert!(!cart.set_quantity(&id, 0));
        assert!(!cart.set_quantity(&id, -2));
        assert_eq!(cart.get_line(&id).unwrap().quantity, 3);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_line(&product("1", 1000), 1, Customization::default())
            .unwrap();
        assert!(!cart.set_quantity(&LineItemId::new("missing"), 2));
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        let id = cart
            .add_line(&product("1", 1000), 1, Customization::default())
            .unwrap();

        assert!(cart.remove_line(&id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_line(&product("1", 1000), 1, Customization::default())
            .unwrap();
        let before = cart.clone();

        assert!(!cart.remove_line(&LineItemId::new("missing")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_pricing_totals() {
        let mut cart = Cart::new();
        cart.add_line(&product("1", 4999), 1, Customization::default())
            .unwrap();
        cart.add_line(&product("2", 3550), 2, Customization::default())
            .unwrap();

        let pricing = cart.pricing().unwrap();
        assert_eq!(pricing.subtotal.amount_cents, 12099); // 49.99 + 71.00
        assert_eq!(pricing.shipping.amount_cents, 599);
        assert_eq!(pricing.total.amount_cents, 12698); // 126.98
    }

    #[test]
    fn test_pricing_recomputed_after_mutation() {
        let mut cart = Cart::new();
        let id = cart
            .add_line(&product("1", 1000), 1, Customization::default())
            .unwrap();
        assert_eq!(cart.pricing().unwrap().subtotal.amount_cents, 1000);

        cart.set_quantity(&id, 3);
        assert_eq!(cart.pricing().unwrap().subtotal.amount_cents, 3000);
    }
}
