//! Storefront controller.
//!
//! Owns the fetched product list and the cart, and drives a [`Surface`].
//! State sits behind `RefCell`s so every operation takes `&self`; no borrow
//! is held across an `.await`, so a click handled while a request is in
//! flight sees consistent state.

use std::cell::RefCell;

use tienda_commerce::cart::Cart;
use tienda_commerce::catalog::Product;
use tienda_commerce::checkout::{OrderReceipt, OrderRequest};
use tienda_commerce::ProductId;
use tienda_data::OrderApi;
use tienda_observability::StructuredLogger;

use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::events::ClickAction;
use crate::sections;
use crate::surface::{MessageKind, Surface};

/// The storefront widget.
pub struct Storefront<A, S> {
    api: A,
    surface: S,
    config: StorefrontConfig,
    logger: StructuredLogger,
    products: RefCell<Vec<Product>>,
    cart: RefCell<Cart>,
}

impl<A: OrderApi, S: Surface> Storefront<A, S> {
    pub fn new(config: StorefrontConfig, api: A, surface: S, logger: StructuredLogger) -> Self {
        let cart = Cart::new(config.currency);
        Self {
            api,
            surface,
            config,
            logger,
            products: RefCell::new(Vec::new()),
            cart: RefCell::new(cart),
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Products from the last successful load.
    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    /// Copy of the current cart.
    pub fn cart(&self) -> Cart {
        self.cart.borrow().clone()
    }

    /// Fetch the catalog and render it.
    ///
    /// On failure the previous product list is kept and the error box is
    /// shown. Returns the number of products loaded.
    pub async fn load_products(&self) -> Result<usize, StorefrontError> {
        self.surface.set_products("");
        self.surface.hide_products_error();
        self.logger.debug("Loading products");

        match self.api.fetch_products().await {
            Ok(products) => {
                let count = products.len();
                *self.products.borrow_mut() = products;
                self.render_products();
                self.logger
                    .info_builder("Products loaded")
                    .field_i64("count", count as i64)
                    .emit();
                Ok(count)
            }
            Err(e) => {
                self.logger
                    .error_builder("Failed to load products")
                    .field("error", e.to_string())
                    .emit();
                self.surface.show_products_error(&self.config.messages.load_error);
                Err(StorefrontError::LoadFailure(e))
            }
        }
    }

    /// Add one unit of `product` to the cart and re-render it.
    ///
    /// Returns the line's new quantity. A rejected add leaves both the cart
    /// and what the surface shows unchanged.
    pub fn add_to_cart(&self, product: &Product) -> Result<i64, StorefrontError> {
        let added = self.cart.borrow_mut().add(product);
        match added {
            Ok(qty) => {
                self.logger
                    .debug_builder("Added to cart")
                    .field("product_id", product.id.to_string())
                    .field_i64("qty", qty)
                    .emit();
                self.render_cart();
                Ok(qty)
            }
            Err(e) => {
                self.logger
                    .warn_builder("Add to cart rejected")
                    .field("product_id", product.id.to_string())
                    .field("error", e.to_string())
                    .emit();
                Err(e.into())
            }
        }
    }

    /// Remove one unit of the product. Returns false, without re-rendering,
    /// when the product is not in the cart.
    pub fn remove_from_cart(&self, product_id: ProductId) -> bool {
        let removed = self.cart.borrow_mut().remove(product_id);
        if removed {
            self.logger
                .debug_builder("Removed from cart")
                .field("product_id", product_id.to_string())
                .emit();
            self.render_cart();
        }
        removed
    }

    /// Apply a product card click. Returns true if the cart changed.
    ///
    /// Ids that are not in the loaded catalog are ignored.
    pub fn handle_click(&self, action: ClickAction) -> bool {
        let id = action.product_id();
        let product = self.products.borrow().iter().find(|p| p.id == id).cloned();
        let Some(product) = product else {
            self.logger
                .debug_builder("Click on unknown product")
                .field("action", action.to_string())
                .emit();
            return false;
        };

        match action {
            ClickAction::Add(_) => self.add_to_cart(&product).is_ok(),
            ClickAction::Remove(_) => self.remove_from_cart(product.id),
        }
    }

    /// Send the cart as an order.
    ///
    /// An empty cart sends nothing and returns `Ok(None)`. On success the
    /// cart is cleared and the total shown; on failure the cart is kept.
    pub async fn submit_order(&self) -> Result<Option<OrderReceipt>, StorefrontError> {
        self.surface.clear_order_message();

        let order = OrderRequest::from_cart(&self.cart.borrow());
        if order.is_empty() {
            self.logger.debug("Checkout with empty cart ignored");
            return Ok(None);
        }

        self.logger
            .info_builder("Submitting order")
            .field_i64("lines", order.items.len() as i64)
            .emit();

        match self.api.submit_order(&order).await {
            Ok(receipt) => {
                self.cart.borrow_mut().clear();
                self.render_cart();
                let text = self.config.messages.order_success_text(&receipt.total);
                self.surface.show_order_message(MessageKind::Success, &text);
                self.logger
                    .info_builder("Order created")
                    .field("total", receipt.total.display())
                    .emit();
                Ok(Some(receipt))
            }
            Err(e) => {
                self.logger
                    .error_builder("Order failed")
                    .field("error", e.to_string())
                    .emit();
                self.surface
                    .show_order_message(MessageKind::Error, &self.config.messages.order_error);
                Err(StorefrontError::SubmitFailure(e))
            }
        }
    }

    /// Render the current product list.
    pub fn render_products(&self) {
        let html = sections::render_products(&self.products.borrow(), &self.config.messages);
        self.surface.set_products(&html);
    }

    /// Render the current cart.
    pub fn render_cart(&self) {
        let view = sections::render_cart(&self.cart.borrow(), &self.config.messages);
        match view {
            Ok(view) => self.surface.set_cart(&view),
            Err(e) => self
                .logger
                .error_builder("Failed to render cart")
                .field("error", e.to_string())
                .emit(),
        }
    }
}
