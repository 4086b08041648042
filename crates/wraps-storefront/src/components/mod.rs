//! Storefront UI components.

mod cart_panel;
mod filter_bar;
mod footer;
mod header;
mod product_card;
mod product_grid;
mod quick_view;

pub use cart_panel::CartPanel;
pub use filter_bar::FilterBar;
pub use footer::Footer;
pub use header::Header;
pub use product_card::{ProductCard, RatingStars};
pub use product_grid::ProductGrid;
pub use quick_view::QuickViewModal;
