//! Checkout module.
//!
//! Order payloads exchanged with the Order API.

mod order;

pub use order::{OrderItem, OrderReceipt, OrderRequest, OrderResponse};
