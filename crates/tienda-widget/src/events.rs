//! Click actions from product card buttons.
//!
//! Card buttons carry `data-action` ("add" or "remove") and `data-id`.
//! A single delegated listener on the products container turns the clicked
//! button's attributes into a [`ClickAction`].

use std::fmt;

use tienda_commerce::ProductId;

/// CSS selector matching the buttons that produce actions.
pub const ACTION_SELECTOR: &str = "button[data-action]";

/// An add/remove click on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Add(ProductId),
    Remove(ProductId),
}

impl ClickAction {
    /// Parse the button's `data-action` and `data-id` attributes.
    ///
    /// Unknown actions, missing ids and non-integer ids yield `None`.
    pub fn parse(action: Option<&str>, id: Option<&str>) -> Option<Self> {
        let id: ProductId = id?.parse().ok()?;
        match action?.trim() {
            "add" => Some(Self::Add(id)),
            "remove" => Some(Self::Remove(id)),
            _ => None,
        }
    }

    pub fn product_id(&self) -> ProductId {
        match self {
            Self::Add(id) | Self::Remove(id) => *id,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
        }
    }
}

impl fmt::Display for ClickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.as_str(), self.product_id())
    }
}
