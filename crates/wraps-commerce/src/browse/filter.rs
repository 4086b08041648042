//! Filter state and the filtering predicate.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// One categorical filter selector: either unconstrained or pinned to
/// a single category token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Selection {
    /// No constraint (the "all" sentinel).
    #[default]
    All,
    /// Only products whose attribute equals this token.
    Only(String),
}

impl Selection {
    /// Create a pinned selection.
    pub fn only(value: impl Into<String>) -> Self {
        Selection::Only(value.into())
    }

    /// Parse a select-control value, mapping `"all"` to no constraint.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Selection::All
        } else {
            Selection::only(value)
        }
    }

    /// Check whether the selection is the "all" sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Check whether a product attribute satisfies this selection.
    pub fn matches(&self, attribute: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => attribute == value,
        }
    }

    /// The select-control value for this selection.
    pub fn as_value(&self) -> &str {
        match self {
            Selection::All => "all",
            Selection::Only(value) => value,
        }
    }
}

/// The three filterable product dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterDimension {
    Occasion,
    Color,
    Theme,
}

/// The full filter state: one independent selector per dimension.
///
/// Matching is the conjunction of the three selectors (AND semantics);
/// a selector left at [`Selection::All`] imposes no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterState {
    pub occasion: Selection,
    pub color: Selection,
    pub theme: Selection,
}

impl FilterState {
    /// Set one dimension's selection.
    pub fn set(&mut self, dimension: FilterDimension, selection: Selection) {
        match dimension {
            FilterDimension::Occasion => self.occasion = selection,
            FilterDimension::Color => self.color = selection,
            FilterDimension::Theme => self.theme = selection,
        }
    }

    /// Get one dimension's selection.
    pub fn get(&self, dimension: FilterDimension) -> &Selection {
        match dimension {
            FilterDimension::Occasion => &self.occasion,
            FilterDimension::Color => &self.color,
            FilterDimension::Theme => &self.theme,
        }
    }

    /// Reset all three dimensions to "all".
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check whether any dimension is constrained.
    pub fn is_filtered(&self) -> bool {
        !self.occasion.is_all() || !self.color.is_all() || !self.theme.is_all()
    }

    /// Check whether a product passes all three selectors.
    pub fn matches(&self, product: &Product) -> bool {
        self.occasion.matches(&product.occasion)
            && self.color.matches(&product.color)
            && self.theme.matches(&product.theme)
    }
}

/// Derive the filtered subsequence of `products` under `filters`.
///
/// The filter is stable: source order is preserved, nothing is
/// resorted.
pub fn filter_products<'a>(products: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
    products.iter().filter(|p| filters.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_selection_parse() {
        assert_eq!(Selection::parse("all"), Selection::All);
        assert_eq!(Selection::parse("birthday"), Selection::only("birthday"));
    }

    #[test]
    fn test_default_filters_match_everything() {
        let catalog = catalog::sample();
        let filters = FilterState::default();
        assert_eq!(
            filter_products(catalog.products(), &filters).len(),
            catalog.len()
        );
        assert!(!filters.is_filtered());
    }

    #[test]
    fn test_single_dimension_filter() {
        let catalog = catalog::sample();
        let mut filters = FilterState::default();
        filters.set(FilterDimension::Occasion, Selection::only("birthday"));

        let expected: Vec<&str> = catalog
            .products()
            .iter()
            .filter(|p| p.occasion == "birthday")
            .map(|p| p.id.as_str())
            .collect();
        let actual: Vec<&str> = filter_products(catalog.products(), &filters)
            .iter()
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(actual, expected);
        assert!(!actual.is_empty());
    }

    #[test]
    fn test_and_semantics_across_dimensions() {
        let catalog = catalog::sample();
        let mut filters = FilterState::default();
        // "housewarming" matches two sample products; adding the color
        // constraint must intersect, not union.
        filters.set(FilterDimension::Occasion, Selection::only("housewarming"));
        filters.set(FilterDimension::Color, Selection::only("beige"));

        let matched = filter_products(catalog.products(), &filters);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id.as_str(), "7");
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = catalog::sample();
        let mut filters = FilterState::default();
        filters.set(FilterDimension::Color, Selection::only("white"));

        let ids: Vec<&str> = filter_products(catalog.products(), &filters)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["3", "8"]);
    }

    #[test]
    fn test_no_match_yields_empty_set() {
        let catalog = catalog::sample();
        let mut filters = FilterState::default();
        filters.set(FilterDimension::Theme, Selection::only("bohemian"));
        assert!(filter_products(catalog.products(), &filters).is_empty());
    }

    #[test]
    fn test_clear_resets_all_dimensions() {
        let mut filters = FilterState::default();
        filters.set(FilterDimension::Occasion, Selection::only("wedding"));
        filters.set(FilterDimension::Theme, Selection::only("elegant"));
        assert!(filters.is_filtered());

        filters.clear();
        assert!(!filters.is_filtered());
        assert_eq!(filters, FilterState::default());
    }
}
