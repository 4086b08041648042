//! Product catalog: records and the in-memory store.

mod product;
mod sample;
mod store;

pub use product::Product;
pub use sample::sample;
pub use store::Catalog;
