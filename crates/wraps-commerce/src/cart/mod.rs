//! Shopping cart: line items, customization, derived pricing.

mod line;
mod pricing;

pub use line::{Cart, Customization, LineItem};
pub use pricing::{CartPricing, FLAT_SHIPPING_CENTS};
