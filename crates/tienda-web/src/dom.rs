//! [`Surface`] over the page DOM.

use tienda_widget::{CartView, ElementIds, MessageKind, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement};

/// The page elements the widget writes to.
pub struct DomSurface {
    products_container: Element,
    products_error: Element,
    cart_items: Element,
    cart_total: Element,
    checkout_button: HtmlButtonElement,
    order_message: Element,
}

impl DomSurface {
    /// Look up every element by id. Fails on the first missing one.
    pub fn bind(document: &Document, ids: &ElementIds) -> Result<Self, JsValue> {
        let checkout_button = element(document, &ids.checkout_button)?
            .dyn_into::<HtmlButtonElement>()
            .map_err(|_| {
                JsValue::from_str(&format!("#{} is not a button", ids.checkout_button))
            })?;

        Ok(Self {
            products_container: element(document, &ids.products_container)?,
            products_error: element(document, &ids.products_error)?,
            cart_items: element(document, &ids.cart_items)?,
            cart_total: element(document, &ids.cart_total)?,
            checkout_button,
            order_message: element(document, &ids.order_message)?,
        })
    }

    pub fn products_container(&self) -> &Element {
        &self.products_container
    }

    pub fn checkout_button(&self) -> &HtmlButtonElement {
        &self.checkout_button
    }
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}

impl Surface for DomSurface {
    fn set_products(&self, html: &str) {
        self.products_container.set_inner_html(html);
    }

    fn show_products_error(&self, text: &str) {
        self.products_error.set_text_content(Some(text));
        let _ = self.products_error.class_list().remove_1("hidden");
    }

    fn hide_products_error(&self) {
        let _ = self.products_error.class_list().add_1("hidden");
    }

    fn set_cart(&self, view: &CartView) {
        self.cart_items.set_inner_html(&view.html);
        self.cart_total.set_text_content(Some(&view.total));
        self.checkout_button.set_disabled(!view.checkout_enabled);
    }

    fn show_order_message(&self, kind: MessageKind, text: &str) {
        self.order_message.set_text_content(Some(text));
        self.order_message.set_class_name(kind.css_class());
    }

    fn clear_order_message(&self) {
        self.order_message.set_text_content(None);
        self.order_message.set_class_name("");
    }
}
