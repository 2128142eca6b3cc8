//! Cart and cart line types.

use std::collections::BTreeMap;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money, UnitPrice};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A shopping cart keyed by product id.
///
/// Lines iterate in ascending product id order. A line's quantity is
/// always at least 1; removing the last unit deletes the line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: BTreeMap<ProductId, CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart totalled in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: BTreeMap::new(),
            currency,
        }
    }

    /// Add one unit of `product`, creating its line if absent.
    ///
    /// Returns the line's new quantity. Fails without touching the cart if
    /// the line is already at [`MAX_QUANTITY_PER_ITEM`] or the cart total
    /// would no longer be computable.
    pub fn add(&mut self, product: &Product) -> Result<i64, CommerceError> {
        let line = match self.lines.get(&product.id) {
            Some(line) => {
                let qty = line.qty.checked_add(1).ok_or(CommerceError::Overflow)?;
                CartLine::new(line.product.clone(), qty)?
            }
            None => CartLine::new(product.clone(), 1)?,
        };
        let qty = line.qty;

        let previous = self.lines.insert(product.id, line);
        if let Err(e) = self.total() {
            match previous {
                Some(previous) => self.lines.insert(product.id, previous),
                None => self.lines.remove(&product.id),
            };
            return Err(e);
        }
        Ok(qty)
    }

    /// Remove one unit of the product.
    ///
    /// Returns false when the product is not in the cart.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let Some(line) = self.lines.get_mut(&product_id) else {
            return false;
        };

        line.qty -= 1;
        if line.qty <= 0 {
            self.lines.remove(&product_id);
        }
        true
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.get(&product_id)
    }

    /// Iterate lines in product id order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines.values().map(|l| l.qty).sum()
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of `price * qty` over all lines, rounded once to the minor unit.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let subtotals = self
            .lines
            .values()
            .map(CartLine::subtotal)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(other) = subtotals.iter().find(|p| p.currency != self.currency) {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }

        UnitPrice::try_sum(subtotals.iter(), self.currency)
            .map(|sum| sum.round())
            .ok_or(CommerceError::Overflow)
    }
}

/// One product plus its requested quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product.
    pub product: Product,
    /// Quantity, always > 0.
    pub qty: i64,
}

impl CartLine {
    /// Create a line, rejecting non-positive or over-limit quantities.
    pub fn new(product: Product, qty: i64) -> Result<Self, CommerceError> {
        if qty <= 0 {
            return Err(CommerceError::InvalidQuantity(qty));
        }
        if qty > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(qty, MAX_QUANTITY_PER_ITEM));
        }
        Ok(Self { product, qty })
    }

    /// `price * qty` for this line, unrounded.
    pub fn subtotal(&self) -> Result<UnitPrice, CommerceError> {
        self.product
            .price
            .try_multiply(self.qty)
            .ok_or(CommerceError::Overflow)
    }

    /// `price * qty` for this line, rounded to the minor unit.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.subtotal().map(|p| p.round())
    }
}
