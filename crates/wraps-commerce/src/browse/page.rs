//! Pagination over the filtered product list.

use crate::browse::{filter_products, FilterState};
use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Fixed page size for the product grid.
pub const PRODUCTS_PER_PAGE: usize = 8;

/// Pagination info for a filtered result set.
///
/// Pages are 1-indexed. An empty result set has zero pages; the
/// current page is clamped into `[1, total_pages]` otherwise. Page
/// controls are only meaningful when `total_pages > 1`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items in the filtered set.
    pub total: usize,
    /// Total number of pages (0 when the filtered set is empty).
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info, clamping the requested page.
    pub fn new(requested_page: usize, per_page: usize, total: usize) -> Self {
        let total_pages = total.div_ceil(per_page);
        let page = if total_pages == 0 {
            1
        } else {
            requested_page.clamp(1, total_pages)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: total_pages > 0 && page > 1,
        }
    }

    /// Offset of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, PRODUCTS_PER_PAGE, 0)
    }
}

/// One rendered page of the filtered catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowseResults {
    /// Products on the current page, in catalog order.
    pub items: Vec<Product>,
    /// Pagination info for the whole filtered set.
    pub pagination: Pagination,
}

impl BrowseResults {
    /// Check whether the filtered set matched nothing.
    pub fn is_empty(&self) -> bool {
        self.pagination.total == 0
    }
}

/// Filter the catalog and slice out one page.
///
/// The slice is `[(page-1)*size, page*size)` over the filtered list,
/// clamped to its bounds. Out-of-range page requests are clamped, not
/// rejected.
pub fn browse_page(
    products: &[Product],
    filters: &FilterState,
    requested_page: usize,
) -> BrowseResults {
    let filtered = filter_products(products, filters);
    let pagination = Pagination::new(requested_page, PRODUCTS_PER_PAGE, filtered.len());

    let start = pagination.offset().min(filtered.len());
    let end = (start + pagination.per_page).min(filtered.len());
    let items = filtered[start..end].iter().map(|p| (*p).clone()).collect();

    BrowseResults { items, pagination }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::{FilterDimension, Selection};
    use crate::catalog::{self, Catalog};
    use crate::money::{Currency, Money};

    fn catalog_of(n: usize) -> Catalog {
        let products = (0..n)
            .map(|i| {
                Product::new(
                    format!("p-{i}"),
                    format!("Gift {i}"),
                    Money::new(1000, Currency::USD),
                    4.0,
                    "img",
                )
                .with_attributes("birthday", "red", "modern")
            })
            .collect();
        Catalog::new(products).unwrap()
    }

    #[test]
    fn test_eight_products_fit_one_page() {
        let catalog = catalog_of(8);
        let results = browse_page(catalog.products(), &FilterState::default(), 1);
        assert_eq!(results.pagination.total_pages, 1);
        assert_eq!(results.items.len(), 8);
        assert!(!results.pagination.has_next);
        assert!(!results.pagination.has_prev);
    }

    #[test]
    fn test_ninth_product_spills_to_page_two() {
        let catalog = catalog_of(9);
        let results = browse_page(catalog.products(), &FilterState::default(), 1);
        assert_eq!(results.pagination.total_pages, 2);
        assert_eq!(results.items.len(), 8);
        assert!(results.pagination.has_next);

        let page_two = browse_page(catalog.products(), &FilterState::default(), 2);
        assert_eq!(page_two.items.len(), 1);
        assert_eq!(page_two.items[0].id.as_str(), "p-8");
        assert!(page_two.pagination.has_prev);
        assert!(!page_two.pagination.has_next);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let catalog = catalog_of(9);
        let results = browse_page(catalog.products(), &FilterState::default(), 99);
        assert_eq!(results.pagination.page, 2);
        assert_eq!(results.items.len(), 1);

        let results = browse_page(catalog.products(), &FilterState::default(), 0);
        assert_eq!(results.pagination.page, 1);
    }

    #[test]
    fn test_empty_filtered_set_has_zero_pages() {
        let catalog = catalog::sample();
        let mut filters = FilterState::default();
        filters.set(FilterDimension::Occasion, Selection::only("no-such"));

        let results = browse_page(catalog.products(), &filters, 1);
        assert!(results.is_empty());
        assert_eq!(results.pagination.total_pages, 0);
        assert!(!results.pagination.has_next);
        assert!(!results.pagination.has_prev);
    }

    #[test]
    fn test_sample_catalog_is_a_single_page() {
        let catalog = catalog::sample();
        let results = browse_page(catalog.products(), &FilterState::default(), 1);
        assert_eq!(results.pagination.total_pages, 1);
        assert_eq!(results.items.len(), 8);
    }

    #[test]
    fn test_page_order_matches_catalog_order() {
        let catalog = catalog_of(10);
        let page_one = browse_page(catalog.products(), &FilterState::default(), 1);
        let ids: Vec<&str> = page_one.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["p-0", "p-1", "p-2", "p-3", "p-4", "p-5", "p-6", "p-7"]
        );
    }
}
