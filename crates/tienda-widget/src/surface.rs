//! The page regions the widget writes to.
//!
//! The controller only talks to a [`Surface`]; the browser build implements
//! it over the DOM and tests use [`MemorySurface`].

use std::cell::RefCell;

use crate::sections::CartView;

/// Kind of order message, mapped to its CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// Full class attribute for the message element.
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "message success",
            MessageKind::Error => "message error",
        }
    }
}

/// Output side of the widget.
pub trait Surface {
    /// Replace the products container markup.
    fn set_products(&self, html: &str);

    /// Show the products error box with `text`.
    fn show_products_error(&self, text: &str);

    /// Hide the products error box.
    fn hide_products_error(&self);

    /// Show the cart lines, total and checkout state.
    fn set_cart(&self, view: &CartView);

    /// Show an order message.
    fn show_order_message(&self, kind: MessageKind, text: &str);

    /// Clear the order message and its classes.
    fn clear_order_message(&self);
}

/// Snapshot of what a [`MemorySurface`] is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SurfaceState {
    pub products_html: String,
    /// Error box text, `None` while hidden.
    pub products_error: Option<String>,
    pub cart: CartView,
    pub order_message: Option<(MessageKind, String)>,
    /// Number of `set_products` calls.
    pub product_renders: usize,
    /// Number of `set_cart` calls.
    pub cart_renders: usize,
}

/// In-memory surface.
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: RefCell<SurfaceState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn snapshot(&self) -> SurfaceState {
        self.state.borrow().clone()
    }
}

impl Surface for MemorySurface {
    fn set_products(&self, html: &str) {
        let mut state = self.state.borrow_mut();
        state.products_html = html.to_string();
        state.product_renders += 1;
    }

    fn show_products_error(&self, text: &str) {
        self.state.borrow_mut().products_error = Some(text.to_string());
    }

    fn hide_products_error(&self) {
        self.state.borrow_mut().products_error = None;
    }

    fn set_cart(&self, view: &CartView) {
        let mut state = self.state.borrow_mut();
        state.cart = view.clone();
        state.cart_renders += 1;
    }

    fn show_order_message(&self, kind: MessageKind, text: &str) {
        self.state.borrow_mut().order_message = Some((kind, text.to_string()));
    }

    fn clear_order_message(&self) {
        self.state.borrow_mut().order_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_classes() {
        assert_eq!(MessageKind::Success.css_class(), "message success");
        assert_eq!(MessageKind::Error.css_class(), "message error");
    }

    #[test]
    fn test_memory_surface_records() {
        let surface = MemorySurface::new();
        surface.set_products("<p>x</p>");
        surface.show_products_error("oops");
        surface.show_order_message(MessageKind::Error, "bad");

        let state = surface.snapshot();
        assert_eq!(state.products_html, "<p>x</p>");
        assert_eq!(state.products_error.as_deref(), Some("oops"));
        assert_eq!(state.order_message, Some((MessageKind::Error, "bad".to_string())));
        assert_eq!(state.product_renders, 1);

        surface.hide_products_error();
        surface.clear_order_message();
        let state = surface.snapshot();
        assert_eq!(state.products_error, None);
        assert_eq!(state.order_message, None);
    }
}
