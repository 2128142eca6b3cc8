//! Widget configuration.
//!
//! Every field has a default, so an empty document (or no document at all)
//! yields the stock Spanish storefront talking to the production API.

use serde::{Deserialize, Serialize};

use tienda_commerce::{Currency, Money};
use tienda_observability::{LogFormat, LogLevel, LogSink, StructuredLogger};

use crate::error::StorefrontError;

/// Base URL of the production Order API.
pub const DEFAULT_API_BASE: &str = "https://j5rhha03ye.execute-api.us-east-1.amazonaws.com/Prod";

/// Top-level widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Order API base URL, without trailing slash.
    pub api_base: String,
    /// Currency prices and totals are shown in.
    pub currency: Currency,
    /// User-visible strings.
    pub messages: Messages,
    /// Ids of the page elements the widget writes to.
    pub elements: ElementIds,
    /// Logging settings.
    pub log: LogConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            currency: Currency::default(),
            messages: Messages::default(),
            elements: ElementIds::default(),
            log: LogConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(content: &str) -> Result<Self, StorefrontError> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| StorefrontError::Config(format!("invalid JSON config: {}", e)))?;
        config.finish()
    }

    /// Parse a TOML configuration document.
    pub fn from_toml(content: &str) -> Result<Self, StorefrontError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| StorefrontError::Config(format!("invalid TOML config: {}", e)))?;
        config.finish()
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        let base = self.api_base.trim();
        if base.is_empty() {
            return Err(StorefrontError::Config("api_base must not be empty".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(StorefrontError::Config(format!(
                "api_base must be an http(s) URL, got {}",
                base
            )));
        }
        Ok(())
    }

    /// Build the widget logger writing to `sink`.
    pub fn logger(&self, component: &str, sink: LogSink) -> StructuredLogger {
        StructuredLogger::new(component)
            .with_min_level(self.log.level)
            .with_format(self.log.format)
            .with_sink(sink)
    }

    fn finish(mut self) -> Result<Self, StorefrontError> {
        self.api_base = self.api_base.trim().trim_end_matches('/').to_string();
        self.validate()?;
        Ok(self)
    }
}

/// Localized user-visible strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown in the error box when the product list cannot be loaded.
    pub load_error: String,
    /// Shown instead of the grid when the catalog is empty.
    pub no_products: String,
    pub add_label: String,
    pub remove_label: String,
    pub empty_cart: String,
    /// Success text; `{total}` is replaced with the formatted total.
    pub order_success: String,
    /// Generic submit failure text.
    pub order_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            load_error: "No se pudieron cargar los productos.".to_string(),
            no_products: "No hay productos disponibles.".to_string(),
            add_label: "Añadir".to_string(),
            remove_label: "-".to_string(),
            empty_cart: "Tu carrito está vacío".to_string(),
            order_success: "Pedido creado correctamente. Total: {total}".to_string(),
            order_error: "Hubo un error al crear el pedido.".to_string(),
        }
    }
}

impl Messages {
    /// Success text for an order with the given total.
    pub fn order_success_text(&self, total: &Money) -> String {
        self.order_success.replace("{total}", &total.display())
    }
}

/// Ids of the page elements the widget binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub products_container: String,
    pub products_error: String,
    pub cart_items: String,
    pub cart_total: String,
    pub checkout_button: String,
    pub order_message: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            products_container: "products-container".to_string(),
            products_error: "products-error".to_string(),
            cart_items: "cart-items".to_string(),
            cart_total: "cart-total".to_string(),
            checkout_button: "checkout-btn".to_string(),
            order_message: "order-message".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.elements.checkout_button, "checkout-btn");
        assert_eq!(config.log.level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = StorefrontConfig::from_json("{}").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = StorefrontConfig::from_json(
            r#"{
                "api_base": "https://api.example.com/dev/",
                "currency": "EUR",
                "messages": {"empty_cart": "Your cart is empty"},
                "log": {"level": "debug", "format": "json"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.api_base, "https://api.example.com/dev");
        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.messages.empty_cart, "Your cart is empty");
        assert_eq!(config.messages.add_label, "Añadir");
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_toml_config() {
        let config = StorefrontConfig::from_toml(
            r#"
api_base = "http://localhost:3000"
currency = "MXN"

[elements]
products_container = "catalogo"
"#,
        )
        .unwrap();

        assert_eq!(config.api_base, "http://localhost:3000");
        assert_eq!(config.currency, Currency::MXN);
        assert_eq!(config.elements.products_container, "catalogo");
        assert_eq!(config.elements.cart_items, "cart-items");
    }

    #[test]
    fn test_rejects_bad_api_base() {
        assert!(matches!(
            StorefrontConfig::from_json(r#"{"api_base": ""}"#),
            Err(StorefrontError::Config(_))
        ));
        assert!(matches!(
            StorefrontConfig::from_json(r#"{"api_base": "ftp://files"}"#),
            Err(StorefrontError::Config(_))
        ));
        assert!(matches!(
            StorefrontConfig::from_json("not json"),
            Err(StorefrontError::Config(_))
        ));
    }

    #[test]
    fn test_order_success_text() {
        let messages = Messages::default();
        assert_eq!(
            messages.order_success_text(&Money::new(4550, Currency::USD)),
            "Pedido creado correctamente. Total: $45.50"
        );
    }
}
