//! Storefront API client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{ApiConfig, AppError, Product, ProductId, Stock};
use crate::ports::{ProductCatalog, StockLookup};

/// HTTP client for the stock and product endpoints.
#[derive(Debug, Clone)]
pub struct HttpStorefrontClient {
    base_url: Url,
    max_retries: u32,
    retry_delay_ms: u64,
    client: Client,
}

enum Failure {
    /// Worth another attempt (timeouts, connection errors, 429, 5xx).
    Transient(String),
    Permanent(String),
}

impl HttpStorefrontClient {
    /// Create a new HTTP client from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        let mut base_url = config.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
            client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::InvalidUrl { url: path.to_string(), details: e.to_string() })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.endpoint(path)?;
        let max_attempts = self.max_retries.max(1);
        let mut last_error = None;

        for attempt in 0..max_attempts {
            if attempt > 0 {
                // Exponential backoff: base * 2^(attempt-1)
                let delay = self.retry_delay_ms * 2_u64.pow(attempt.saturating_sub(1));
                std::thread::sleep(Duration::from_millis(delay));
                tracing::warn!(%url, attempt = attempt + 1, max_attempts, "retrying request");
            }

            match self.send_request(&url) {
                Ok(value) => return Ok(value),
                Err(Failure::Transient(message)) => last_error = Some(message),
                Err(Failure::Permanent(message)) => return Err(AppError::Api(message)),
            }
        }

        Err(AppError::Api(
            last_error.unwrap_or_else(|| "Request failed after all retries".to_string()),
        ))
    }

    fn send_request<T: DeserializeOwned>(&self, url: &Url) -> Result<T, Failure> {
        tracing::debug!(%url, "GET");

        let response =
            self.client.get(url.clone()).header(ACCEPT, "application/json").send().map_err(|e| {
                let message = format!("GET {} failed: {}", url, e);
                if e.is_timeout() || e.is_connect() {
                    Failure::Transient(message)
                } else {
                    Failure::Permanent(message)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            response.json::<T>().map_err(|e| {
                Failure::Permanent(format!("Failed to parse response from {}: {}", url, e))
            })
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            Err(Failure::Transient(format!("Rate limited (429) at {}", url)))
        } else if status.is_server_error() {
            Err(Failure::Transient(format!("Server error ({}) at {}", status.as_u16(), url)))
        } else {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(Failure::Permanent(format!(
                "GET {} returned {}: {}",
                url,
                status.as_u16(),
                error_text
            )))
        }
    }
}

impl StockLookup for HttpStorefrontClient {
    fn stock(&self, id: ProductId) -> Result<Stock, AppError> {
        self.get_json(&format!("stock/{}", id))
    }
}

impl ProductCatalog for HttpStorefrontClient {
    fn product(&self, id: ProductId) -> Result<Product, AppError> {
        let product: Product = self.get_json(&format!("products/{}", id))?;
        if product.id != id {
            return Err(AppError::Api(format!(
                "Catalog returned product {} when asked for {}",
                product.id, id
            )));
        }
        Ok(product)
    }
}
