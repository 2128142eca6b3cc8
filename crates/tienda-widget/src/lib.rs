//! Storefront widget for Tienda.
//!
//! Loads the catalog from the Order API, keeps a cart and submits orders,
//! writing its output through a [`Surface`]. Rendering is plain HTML
//! strings so the same controller drives the browser build and tests.
//!
//! # Example
//!
//! ```rust
//! use tienda_widget::prelude::*;
//!
//! let config = StorefrontConfig::from_json(r#"{"currency": "EUR"}"#).unwrap();
//! assert_eq!(config.messages.add_label, "Añadir");
//!
//! let action = ClickAction::parse(Some("add"), Some("4"));
//! assert_eq!(action, Some(ClickAction::Add(ProductId::new(4))));
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod sections;
pub mod surface;

pub use config::{ElementIds, LogConfig, Messages, StorefrontConfig, DEFAULT_API_BASE};
pub use controller::Storefront;
pub use error::StorefrontError;
pub use events::{ClickAction, ACTION_SELECTOR};
pub use sections::CartView;
pub use surface::{MemorySurface, MessageKind, Surface, SurfaceState};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{ElementIds, LogConfig, Messages, StorefrontConfig};
    pub use crate::controller::Storefront;
    pub use crate::error::StorefrontError;
    pub use crate::events::ClickAction;
    pub use crate::sections::CartView;
    pub use crate::surface::{MemorySurface, MessageKind, Surface};

    pub use tienda_commerce::prelude::*;
    pub use tienda_data::{FetchError, HttpOrderApi, OrderApi};
    pub use tienda_observability::{LogSink, MemoryLog, StructuredLogger};
}
