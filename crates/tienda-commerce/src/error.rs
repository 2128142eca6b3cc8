//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// A product record could not be turned into a product.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: i64, reason: String },
}
