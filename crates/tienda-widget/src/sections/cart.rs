//! Cart section - line list, total and checkout state.

use tienda_commerce::cart::{Cart, CartLine};
use tienda_commerce::{CommerceError, Money};

use super::html_escape;
use crate::config::Messages;

/// Everything the page needs to show the cart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartView {
    /// Markup for the cart item list.
    pub html: String,
    /// Formatted cart total.
    pub total: String,
    /// Whether the checkout button is clickable.
    pub checkout_enabled: bool,
}

/// Render the cart. Fails only if the total cannot be computed.
pub fn render_cart(cart: &Cart, messages: &Messages) -> Result<CartView, CommerceError> {
    if cart.is_empty() {
        return Ok(CartView {
            html: format!(
                r#"<p class="empty-cart">{}</p>"#,
                html_escape(&messages.empty_cart)
            ),
            total: Money::zero(cart.currency()).display(),
            checkout_enabled: false,
        });
    }

    let total = cart.total()?;
    let html = cart.lines().map(render_cart_line).collect();

    Ok(CartView {
        html,
        total: total.display(),
        checkout_enabled: true,
    })
}

fn render_cart_line(line: &CartLine) -> String {
    format!(
        r#"<div class="cart-item" data-product-id="{}">
    <span class="cart-item-name">{}</span>
    <span class="cart-item-qty">x{}</span>
</div>"#,
        line.product.id,
        html_escape(&line.product.name),
        line.qty
    )
}
