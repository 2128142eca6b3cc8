//! Order submission payloads.

use crate::cart::Cart;
use crate::ids::ProductId;
use crate::money::{Currency, Money, WireAmount};
use serde::{Deserialize, Serialize};

/// One requested line of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Body of `POST /order`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OrderRequest {
    pub items: Vec<OrderItem>,
}

impl OrderRequest {
    /// Build the request from the current cart lines.
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            items: cart
                .lines()
                .map(|line| OrderItem {
                    product_id: line.product.id,
                    quantity: line.qty,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Body of the `POST /order` response. Both fields are optional and the
/// whole body may be missing or malformed.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct OrderResponse {
    #[serde(default)]
    pub total: Option<WireAmount>,
    #[serde(default)]
    pub error: Option<String>,
}

impl OrderResponse {
    /// Receipt for a successful submission; an absent or unreadable total
    /// counts as zero.
    pub fn into_receipt(self, currency: Currency) -> OrderReceipt {
        let total = self
            .total
            .and_then(|t| t.to_money(currency))
            .unwrap_or_else(|| Money::zero(currency));
        OrderReceipt { total }
    }

    /// Server-provided error text, if non-empty.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// What the Order API reported for an accepted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderReceipt {
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    #[test]
    fn test_request_from_cart_uses_camel_case() {
        let mut cart = Cart::new(Currency::USD);
        let p1 = Product::new(1, "A", Money::new(100, Currency::USD), "");
        let p2 = Product::new(2, "B", Money::new(200, Currency::USD), "");
        cart.add(&p2).unwrap();
        cart.add(&p1).unwrap();
        cart.add(&p1).unwrap();

        let request = OrderRequest::from_cart(&cart);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [
                    {"productId": 1, "quantity": 2},
                    {"productId": 2, "quantity": 1}
                ]
            })
        );
    }

    #[test]
    fn test_receipt_total_defaults_to_zero() {
        let response: OrderResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(
            response.into_receipt(Currency::USD).total,
            Money::zero(Currency::USD)
        );

        let response: OrderResponse = serde_json::from_str(r#"{"total": "n/a"}"#).unwrap();
        assert!(response.into_receipt(Currency::USD).total.is_zero());
    }

    #[test]
    fn test_receipt_total_from_number() {
        let response: OrderResponse = serde_json::from_str(r#"{"total": 45.5}"#).unwrap();
        assert_eq!(response.into_receipt(Currency::USD).total.display(), "$45.50");
    }

    #[test]
    fn test_error_message() {
        let response: OrderResponse =
            serde_json::from_str(r#"{"error": "Sin stock"}"#).unwrap();
        assert_eq!(response.error_message(), Some("Sin stock"));

        let response: OrderResponse = serde_json::from_str(r#"{"error": ""}"#).unwrap();
        assert_eq!(response.error_message(), None);
    }
}
