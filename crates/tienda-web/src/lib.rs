//! Browser entry point for the Tienda storefront widget.
//!
//! The host page loads the generated bundle and calls `mount`, optionally
//! with a JSON configuration string. `mount` binds the page elements, wires
//! the click listeners and starts loading the catalog.

mod config;

#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod dom;

pub use config::load_config;

#[cfg(target_arch = "wasm32")]
pub use app::mount;

#[cfg(target_arch = "wasm32")]
mod app {
    use std::rc::Rc;

    use tienda_data::HttpOrderApi;
    use tienda_widget::{ClickAction, Storefront, ACTION_SELECTOR};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Element, Event};

    use crate::config::load_config;
    use crate::console::console_sink;
    use crate::dom::DomSurface;

    type App = Rc<Storefront<HttpOrderApi, DomSurface>>;

    /// Mount the widget on the current page.
    #[wasm_bindgen]
    pub fn mount(config: Option<String>) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let config =
            load_config(config.as_deref()).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let surface = DomSurface::bind(&document, &config.elements)?;
        let logger = config.logger("storefront", console_sink());
        let api = HttpOrderApi::new(config.api_base.clone(), config.currency);

        let app: App = Rc::new(Storefront::new(config, api, surface, logger));
        app.render_cart();

        bind_product_clicks(&app)?;
        bind_checkout(&app)?;

        let loader = Rc::clone(&app);
        spawn_local(async move {
            // Failures are already logged and shown in the error box.
            let _ = loader.load_products().await;
        });

        Ok(())
    }

    /// One delegated listener on the products container for all card buttons.
    fn bind_product_clicks(app: &App) -> Result<(), JsValue> {
        let handler_app = Rc::clone(app);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let button = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(ACTION_SELECTOR).ok().flatten());
            let Some(button) = button else {
                return;
            };

            let action = ClickAction::parse(
                button.get_attribute("data-action").as_deref(),
                button.get_attribute("data-id").as_deref(),
            );
            if let Some(action) = action {
                handler_app.handle_click(action);
            }
        });

        app.surface()
            .products_container()
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        Ok(())
    }

    fn bind_checkout(app: &App) -> Result<(), JsValue> {
        let handler_app = Rc::clone(app);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let app = Rc::clone(&handler_app);
            spawn_local(async move {
                // Failures are already logged and shown in the order message.
                let _ = app.submit_order().await;
            });
        });

        app.surface()
            .checkout_button()
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        Ok(())
    }
}
