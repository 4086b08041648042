//! Commerce domain types and logic for the Crafts N' Wraps storefront.
//!
//! This crate is the headless half of the storefront:
//!
//! - **Catalog**: immutable product records with filterable attributes
//! - **Browse**: categorical filtering and fixed-size pagination
//! - **Cart**: line items with customization and derived pricing
//!
//! It has no UI dependencies; the presentation layer reads these types
//! and drives them through plain method calls.
//!
//! # Example
//!
//! ```
//! use wraps_commerce::prelude::*;
//!
//! let catalog = wraps_commerce::catalog::sample();
//!
//! let mut filters = FilterState::default();
//! filters.set(FilterDimension::Occasion, Selection::only("birthday"));
//!
//! let page = browse_page(catalog.products(), &filters, 1);
//! assert!(page.items.iter().all(|p| p.occasion == "birthday"));
//!
//! let mut cart = Cart::new();
//! let product = &page.items[0];
//! cart.add_line(product, 1, Customization::default()).unwrap();
//! let pricing = cart.pricing().unwrap();
//! assert_eq!(pricing.total, pricing.subtotal.try_add(&pricing.shipping).unwrap());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod browse;
pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::{LineItemId, ProductId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{LineItemId, ProductId};
    pub use crate::money::{Currency, Money};

    pub use crate::catalog::{Catalog, Product};

    pub use crate::browse::{
        browse_page, filter_products, BrowseResults, FilterDimension, FilterState, Pagination,
        Selection, PRODUCTS_PER_PAGE,
    };

    pub use crate::cart::{Cart, CartPricing, Customization, LineItem, FLAT_SHIPPING_CENTS};
}
