//! View state and intent handlers.
//!
//! [`StoreState`] is the single owner of all mutable view state:
//! filters, pagination, cart, panel visibility, and the quick-view
//! selection. It is provided through context at the app root; child
//! components read its signals and mutate state only through the
//! intent handlers below. Invalid intents (unknown ids, sub-1
//! quantities, page 0) are logged no-ops, never user-visible errors.

use leptos::logging;
use leptos::prelude::*;
use wraps_commerce::prelude::*;

/// All storefront view state, as a copyable bundle of signals.
#[derive(Clone, Copy)]
pub struct StoreState {
    catalog: StoredValue<Catalog>,
    /// Current filter selections.
    pub filters: RwSignal<FilterState>,
    /// Requested grid page (1-indexed; the engine clamps it).
    pub page: RwSignal<usize>,
    /// The shopping cart.
    pub cart: RwSignal<Cart>,
    /// Whether the cart sheet is open.
    pub cart_open: RwSignal<bool>,
    /// Whether the quick-view modal is open.
    pub quick_view_open: RwSignal<bool>,
    /// Last product opened in quick view. Retained after close.
    pub selected: RwSignal<Option<ProductId>>,
}

impl StoreState {
    /// Create state over a catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
            filters: RwSignal::new(FilterState::default()),
            page: RwSignal::new(1),
            cart: RwSignal::new(Cart::new()),
            cart_open: RwSignal::new(false),
            quick_view_open: RwSignal::new(false),
            selected: RwSignal::new(None),
        }
    }

    /// Create state and provide it through context.
    pub fn provide(catalog: Catalog) -> Self {
        let state = Self::new(catalog);
        provide_context(state);
        state
    }

    // --- intents -------------------------------------------------------

    /// Set one filter dimension. Always resets the grid to page 1.
    pub fn set_filter(&self, dimension: FilterDimension, selection: Selection) {
        self.filters.update(|f| f.set(dimension, selection));
        self.page.set(1);
    }

    /// Reset all filters and return to page 1.
    pub fn clear_filters(&self) {
        self.filters.update(|f| f.clear());
        self.page.set(1);
    }

    /// Request a grid page. Page 0 is ignored; pages past the end are
    /// clamped by the browse engine.
    pub fn set_page(&self, page: usize) {
        if page >= 1 {
            self.page.set(page);
        }
    }

    /// Add a product to the cart and open the cart sheet.
    ///
    /// Unknown product ids and rejected quantities are logged no-ops.
    pub fn add_to_cart(&self, product_id: &ProductId, quantity: i64, customization: Customization) {
        let Some(product) = self.catalog.with_value(|c| c.get(product_id).cloned()) else {
            logging::warn!("add-to-cart ignored: unknown product {product_id}");
            return;
        };

        let mut outcome = None;
        self.cart
            .update(|cart| outcome = Some(cart.add_line(&product, quantity, customization)));
        match outcome {
            Some(Ok(_)) => self.cart_open.set(true),
            Some(Err(e)) => logging::warn!("add-to-cart ignored: {e}"),
            None => {}
        }
    }

    /// Remove a cart line. Unknown ids are no-ops.
    pub fn remove_from_cart(&self, line_item_id: &LineItemId) {
        self.cart.update(|cart| {
            cart.remove_line(line_item_id);
        });
    }

    /// Change a cart line's quantity. Values below 1 and unknown ids
    /// are no-ops.
    pub fn set_quantity(&self, line_item_id: &LineItemId, quantity: i64) {
        self.cart.update(|cart| {
            cart.set_quantity(line_item_id, quantity);
        });
    }

    /// Open quick view for a product. If the id is not in the catalog
    /// the modal stays closed.
    pub fn open_quick_view(&self, product_id: &ProductId) {
        let known = self.catalog.with_value(|c| c.get(product_id).is_some());
        if !known {
            logging::warn!("quick-view ignored: unknown product {product_id}");
            return;
        }
        self.selected.set(Some(product_id.clone()));
        self.quick_view_open.set(true);
    }

    /// Close quick view. The selection is retained.
    pub fn close_quick_view(&self) {
        self.quick_view_open.set(false);
    }

    /// Open the cart sheet.
    pub fn open_cart(&self) {
        self.cart_open.set(true);
    }

    /// Close the cart sheet.
    pub fn close_cart(&self) {
        self.cart_open.set(false);
    }

    /// Favorite stub hook: no favorites backend exists yet.
    pub fn favorite(&self, product_id: &ProductId) {
        logging::log!("added product {product_id} to favorites");
    }

    /// Checkout stub hook: no payment collaborator exists yet.
    pub fn checkout(&self) {
        logging::log!("checkout is not available yet");
    }

    // --- views ---------------------------------------------------------

    /// The current page of the filtered catalog.
    pub fn browse(&self) -> BrowseResults {
        let filters = self.filters.get();
        let page = self.page.get();
        self.catalog
            .with_value(|c| browse_page(c.products(), &filters, page))
    }

    /// The product currently selected for quick view, if any.
    pub fn selected_product(&self) -> Option<Product> {
        self.selected
            .get()
            .and_then(|id| self.catalog.with_value(|c| c.get(&id).cloned()))
    }

    /// Number of cart lines (header badge).
    pub fn line_count(&self) -> usize {
        self.cart.with(|c| c.line_count())
    }
}

/// Fetch the storefront state from context.
///
/// Panics if called outside the app root's subtree.
pub fn use_store() -> StoreState {
    expect_context::<StoreState>()
}
