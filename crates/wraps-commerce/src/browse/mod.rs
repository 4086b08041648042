//! Catalog browsing: categorical filtering and fixed-size pagination.
//!
//! Pure data transformation over the in-memory catalog. There are no
//! error states here: the degenerate zero-match case is reported as an
//! empty result set with zero pages, which the UI renders as an
//! explicit empty state.

mod filter;
mod page;

pub use filter::{filter_products, FilterDimension, FilterState, Selection};
pub use page::{browse_page, BrowseResults, Pagination, PRODUCTS_PER_PAGE};
