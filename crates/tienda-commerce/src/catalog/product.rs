//! Product types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, UnitPrice, WireAmount};
use serde::{Deserialize, Serialize};

/// A product as listed by the Order API.
///
/// Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price, at the precision the API sent it.
    pub price: UnitPrice,
    /// Image shown on the product card.
    pub image_url: String,
}

impl Product {
    /// Create a product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: impl Into<UnitPrice>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            image_url: image_url.into(),
        }
    }

    /// Price rounded and formatted for display (e.g. "$12.50").
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}

/// Wire shape of a product entry in `GET /products`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub price: WireAmount,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductRecord {
    /// Convert into a [`Product`] priced in `currency`.
    pub fn into_product(self, currency: Currency) -> Result<Product, CommerceError> {
        let price = self
            .price
            .to_unit_price(currency)
            .ok_or_else(|| CommerceError::InvalidProduct {
                id: self.id,
                reason: format!("unreadable price {:?}", self.price),
            })?;

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            price,
            image_url: self.image_url.unwrap_or_default(),
        })
    }
}
