//! Error types for the storefront widget.

use thiserror::Error;

use tienda_commerce::CommerceError;
use tienda_data::FetchError;

/// Errors surfaced by the storefront controller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorefrontError {
    /// The product list could not be fetched.
    #[error("Failed to load products: {0}")]
    LoadFailure(FetchError),

    /// The order could not be submitted.
    #[error("Failed to submit order: {0}")]
    SubmitFailure(FetchError),

    /// A cart operation was rejected.
    #[error("Cart error: {0}")]
    Cart(#[from] CommerceError),

    /// Configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(String),
}
