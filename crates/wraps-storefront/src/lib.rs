//! Crafts N' Wraps storefront.
//!
//! A client-side rendered Leptos app over the `wraps-commerce` domain
//! crate: a filterable, paginated product grid with a quick-view modal
//! and a slide-out cart. All product data is the in-memory sample
//! catalog; there is no network or persistence layer.
//!
//! State lives in [`state::StoreState`], a single struct of signals
//! owned by the app root and provided through context. Components read
//! it and mutate it only through its intent handlers.

pub mod app;
pub mod components;
pub mod config;
pub mod state;
