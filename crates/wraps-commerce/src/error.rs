//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in commerce operations.
///
/// The storefront surfaces none of these to the user; invalid intents
/// (unknown ids, sub-1 quantities) degrade to no-ops at the view layer.
/// The variants exist so the domain seams stay explicit.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Two catalog products share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(String),

    /// Quantity must be at least 1.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch between two money values.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },
}
