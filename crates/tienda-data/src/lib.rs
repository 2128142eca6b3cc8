//! HTTP client and Order API access for Tienda.
//!
//! [`FetchClient`] is a small builder-style wrapper over `reqwest` that works
//! both natively and on `wasm32` (where `reqwest` goes through the browser's
//! `fetch`). [`OrderApi`] is the seam the storefront controller depends on;
//! [`HttpOrderApi`] is its implementation over `FetchClient`.
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_data::{HttpOrderApi, OrderApi};
//! use tienda_commerce::Currency;
//!
//! let api = HttpOrderApi::new("https://api.example.com/Prod", Currency::USD);
//! let products = api.fetch_products().await?;
//! ```

mod api;
mod error;
mod request;
mod response;

pub use api::{decode_order, decode_products, HttpOrderApi, OrderApi};
pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;

use std::collections::HashMap;

/// HTTP client for outbound requests.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to relative
    /// request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            http: self.http.clone(),
            builder,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    http: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// The request as it will be sent.
    pub fn request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and read the whole response.
    ///
    /// Only transport failures are errors here; non-2xx statuses come back
    /// as a [`Response`] for the caller to interpret.
    pub async fn send(self) -> Result<Response, FetchError> {
        let url = reqwest::Url::parse(&self.builder.url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", self.builder.url, e)))?;

        let mut request = self.http.request(self.builder.method.to_reqwest(), url);
        for (key, value) in &self.builder.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = self.builder.body {
            request = request.body(body);
        }

        let response = request.send().await?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, headers, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, HttpOrderApi, Method, OrderApi, Response};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_prepended_to_paths() {
        let client = FetchClient::new().with_base_url("https://api.example.com/Prod/");
        let req = client.get("/products");
        assert_eq!(req.request().url(), "https://api.example.com/Prod/products");
        assert_eq!(req.request().method(), Method::Get);
    }

    #[test]
    fn test_absolute_url_bypasses_base() {
        let client = FetchClient::new().with_base_url("https://api.example.com");
        let req = client.post("https://other.example.com/order");
        assert_eq!(req.request().url(), "https://other.example.com/order");
    }

    #[test]
    fn test_default_headers_are_applied() {
        let client = FetchClient::new().with_default_header("Accept", "application/json");
        let req = client.get("https://api.example.com/products");
        assert_eq!(req.request().get_header("Accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_send_rejects_invalid_url() {
        let client = FetchClient::new().with_base_url("not a url");
        let err = client.get("/products").send().await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
