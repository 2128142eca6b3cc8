//! Order API access.
//!
//! Two endpoints: `GET {base}/products` and `POST {base}/order`. Decoding is
//! kept apart from transport so the status and payload rules can be checked
//! without a network.

use async_trait::async_trait;
use tienda_commerce::prelude::*;

use crate::{FetchClient, FetchError, Response};

/// The external service that lists products and accepts orders.
///
/// Futures are `?Send`: the widget drives them on the browser's single
/// thread.
#[async_trait(?Send)]
pub trait OrderApi {
    /// Fetch the product list.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Submit an order. A single attempt; no retry.
    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderReceipt, FetchError>;
}

/// [`OrderApi`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpOrderApi {
    client: FetchClient,
    currency: Currency,
}

impl HttpOrderApi {
    /// Create a client for the API rooted at `api_base`. Prices and totals
    /// are read in `currency`.
    pub fn new(api_base: impl Into<String>, currency: Currency) -> Self {
        Self {
            client: FetchClient::new()
                .with_base_url(api_base)
                .with_default_header("Accept", "application/json"),
            currency,
        }
    }

    /// The underlying client.
    pub fn client(&self) -> &FetchClient {
        &self.client
    }
}

#[async_trait(?Send)]
impl OrderApi for HttpOrderApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let response = self.client.get("/products").send().await?;
        decode_products(&response, self.currency)
    }

    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderReceipt, FetchError> {
        let response = self.client.post("/order").json(order)?.send().await?;
        decode_order(&response, self.currency)
    }
}

/// Interpret a `GET /products` response.
///
/// Non-2xx and unparsable bodies are errors. A body that parses but is not
/// a JSON array yields an empty list.
pub fn decode_products(response: &Response, currency: Currency) -> Result<Vec<Product>, FetchError> {
    let response = response.clone().error_for_status()?;

    let payload: serde_json::Value = response.json()?;
    let serde_json::Value::Array(entries) = payload else {
        return Ok(Vec::new());
    };

    entries
        .into_iter()
        .map(|entry| {
            let record: ProductRecord = serde_json::from_value(entry)
                .map_err(|e| FetchError::ParseError(format!("product entry: {}", e)))?;
            record
                .into_product(currency)
                .map_err(|e| FetchError::ParseError(e.to_string()))
        })
        .collect()
}

/// Interpret a `POST /order` response.
///
/// The body is optional on both paths. On non-2xx the server's `error` text
/// becomes the failure message, falling back to the status reason.
pub fn decode_order(response: &Response, currency: Currency) -> Result<OrderReceipt, FetchError> {
    let body: OrderResponse = response.json().unwrap_or_default();

    if !response.is_success() {
        let message = body
            .error_message()
            .map(str::to_string)
            .unwrap_or_else(|| response.reason().to_string());
        return Err(FetchError::HttpError {
            status: response.status,
            message,
        });
    }

    Ok(body.into_receipt(currency))
}
