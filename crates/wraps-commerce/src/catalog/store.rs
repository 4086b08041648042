//! The in-memory catalog store.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The immutable collection of purchasable products.
///
/// The catalog is the sole owner of product data; cart line items and
/// the quick-view selection reference products by id. Order is
/// significant: the browse engine preserves it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, enforcing unique product ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProductId(
                    product.id.as_str().to_string(),
                ));
            }
        }
        Ok(Self { products })
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str) -> Product {
        Product::new(id, "Gift", Money::new(1000, Currency::USD), 4.0, "img")
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(vec![product("a"), product("b")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(&ProductId::new("b")).is_some());
        assert!(catalog.get(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let result = Catalog::new(vec![product("a"), product("a")]);
        assert!(matches!(
            result,
            Err(CommerceError::DuplicateProductId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![product("z"), product("a"), product("m")]).unwrap();
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }
}
