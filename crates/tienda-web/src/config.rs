//! Reading the configuration handed to `mount`.

use tienda_widget::{StorefrontConfig, StorefrontError};

/// Parse the JSON passed by the host page. A missing or blank document
/// means the default configuration.
pub fn load_config(raw: Option<&str>) -> Result<StorefrontConfig, StorefrontError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(StorefrontConfig::default()),
        Some(json) => StorefrontConfig::from_json(json),
    }
}
