//! HTTP client for the ERP product endpoint.

mod origin;
mod source;

use std::time::Duration;

use reqwest::Client;
use vitrine_core::RawProduct;

use crate::envelope::decode_products;
use crate::error::ErpError;
use crate::rate_limit::retry_with_backoff;

pub use source::{read_local_catalog, CatalogSource};

/// HTTP client for the ERP's product-list endpoint.
///
/// Throttling (429), not-found (404), and other non-2xx responses come back
/// as typed errors. Transient failures (429, 5xx, network errors) are retried
/// with exponential backoff up to `max_retries` additional attempts.
pub struct ErpClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl ErpClient {
    /// Creates an `ErpClient` with the given timeout, `User-Agent`, and retry
    /// policy. Set `max_retries` to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`ErpError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ErpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Builds a client from the ERP settings in `config`.
    ///
    /// # Errors
    ///
    /// Same as [`ErpClient::new`].
    pub fn from_config(config: &vitrine_core::AppConfig) -> Result<Self, ErpError> {
        Self::new(
            config.erp_request_timeout_secs,
            &config.erp_user_agent,
            config.erp_max_retries,
            config.erp_retry_backoff_base_secs,
        )
    }

    /// Joins an ERP base URL and the products path.
    ///
    /// # Errors
    ///
    /// Returns [`ErpError::InvalidBaseUrl`] if `base_url` does not parse or
    /// is not http(s).
    pub fn products_url(base_url: &str, path: &str) -> Result<String, ErpError> {
        let parsed = reqwest::Url::parse(base_url).map_err(|e| ErpError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ErpError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
            });
        }

        let base = base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            Ok(base.to_owned())
        } else {
            Ok(format!("{base}/{path}"))
        }
    }

    /// Fetches and decodes the product list at `url`, retrying transient
    /// errors.
    ///
    /// # Errors
    ///
    /// - [`ErpError::RateLimited`]: HTTP 429 after all retries are exhausted.
    /// - [`ErpError::NotFound`]: HTTP 404 (not retried).
    /// - [`ErpError::UnexpectedStatus`]: any other non-2xx status (5xx retried, 4xx not).
    /// - [`ErpError::Http`]: network or TLS failure after all retries are exhausted.
    /// - [`ErpError::Deserialize`] or [`ErpError::UnrecognizedEnvelope`]: the
    ///   body is not a product list (not retried).
    pub async fn fetch_products(&self, url: &str) -> Result<Vec<RawProduct>, ErpError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || async move {
            let response = self
                .client
                .get(url)
                .header(reqwest::header::ACCEPT, "application/json")
                .header(reqwest::header::CACHE_CONTROL, "no-cache")
                .send()
                .await?;
            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                let retry_after_secs = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(60);
                return Err(ErpError::RateLimited {
                    domain: origin::extract_domain(url),
                    retry_after_secs,
                });
            }

            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(ErpError::NotFound {
                    url: url.to_owned(),
                });
            }

            if !status.is_success() {
                return Err(ErpError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_owned(),
                });
            }

            let body = response.text().await?;
            let context = format!("product list from {}", origin::extract_domain(url));
            decode_products(&body, &context)
        })
        .await
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
