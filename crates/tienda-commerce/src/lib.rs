//! Storefront domain types and logic for Tienda.
//!
//! - **Catalog**: products as listed by the Order API
//! - **Cart**: cart lines keyed by product id, totals
//! - **Checkout**: order request and response payloads
//!
//! # Example
//!
//! ```rust
//! use tienda_commerce::prelude::*;
//!
//! let product = Product::new(1, "Camiseta", Money::new(1990, Currency::USD), "");
//!
//! let mut cart = Cart::new(Currency::USD);
//! cart.add(&product).unwrap();
//! cart.add(&product).unwrap();
//!
//! assert_eq!(cart.total().unwrap().display(), "$39.80");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money, UnitPrice, WireAmount};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money, UnitPrice, WireAmount};

    pub use crate::cart::{Cart, CartLine, MAX_QUANTITY_PER_ITEM};
    pub use crate::catalog::{Product, ProductRecord};
    pub use crate::checkout::{OrderItem, OrderReceipt, OrderRequest, OrderResponse};
}
