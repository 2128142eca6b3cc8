//! Observability for the Tienda storefront widget.
//!
//! - `StructuredLogger` - leveled, structured logging per component
//! - `LogSink` - stderr, in-memory capture, or a callback (browser console)

mod logging;

pub use logging::*;
