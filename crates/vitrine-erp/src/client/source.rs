//! Fallback chain across ERP endpoints and a local snapshot.

use std::path::{Path, PathBuf};

use vitrine_core::app_config::redact_url;
use vitrine_core::{AppConfig, RawProduct};

use crate::envelope::decode_products;
use crate::error::ErpError;

use super::ErpClient;

/// Where a catalog can be loaded from, in the order sources are tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSource {
    /// The ERP products endpoint.
    pub primary: String,
    /// Alternate endpoints (proxy, mirror) tried in order after the primary.
    pub fallback_urls: Vec<String>,
    /// Local `products.json` read once every remote source has failed.
    pub local_path: Option<PathBuf>,
}

impl CatalogSource {
    /// Builds the source chain from the ERP settings in `config`.
    ///
    /// # Errors
    ///
    /// - [`ErpError::Config`] if `VITRINE_ERP_BASE_URL` is not set.
    /// - [`ErpError::InvalidBaseUrl`] if the base URL cannot be joined.
    pub fn from_config(config: &AppConfig) -> Result<Self, ErpError> {
        let base_url = config.require_erp_base_url()?;
        Ok(Self {
            primary: ErpClient::products_url(base_url, &config.erp_products_path)?,
            fallback_urls: config.erp_fallback_urls.clone(),
            local_path: config.erp_local_fallback_path.clone(),
        })
    }
}

impl ErpClient {
    /// Loads the catalog from the first source in `source` that answers with
    /// a product list.
    ///
    /// An empty product list counts as an answer. Each remote source gets
    /// the client's full retry budget before the next one is tried.
    ///
    /// # Errors
    ///
    /// Returns [`ErpError::AllSourcesFailed`] carrying the number of sources
    /// tried and the last error seen.
    pub async fn fetch_catalog(&self, source: &CatalogSource) -> Result<Vec<RawProduct>, ErpError> {
        let urls = std::iter::once(&source.primary).chain(&source.fallback_urls);
        let mut attempted = 0usize;
        let mut last = None;

        for url in urls {
            attempted += 1;
            match self.fetch_products(url).await {
                Ok(products) => {
                    tracing::info!(
                        source = %redact_url(url),
                        attempted,
                        products = products.len(),
                        "catalog loaded"
                    );
                    return Ok(products);
                }
                Err(error) => {
                    tracing::warn!(
                        source = %redact_url(url),
                        %error,
                        "catalog source failed, trying next"
                    );
                    last = Some(error);
                }
            }
        }

        if let Some(path) = &source.local_path {
            attempted += 1;
            match read_local_catalog(path).await {
                Ok(products) => {
                    tracing::info!(
                        path = %path.display(),
                        attempted,
                        products = products.len(),
                        "catalog loaded from local fallback"
                    );
                    return Ok(products);
                }
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "local catalog fallback failed");
                    last = Some(error);
                }
            }
        }

        // The primary URL is always attempted, so `last` is set by now.
        let last = last.unwrap_or_else(|| ErpError::NotFound {
            url: source.primary.clone(),
        });
        Err(ErpError::AllSourcesFailed {
            attempted,
            last: Box::new(last),
        })
    }
}

/// Reads and decodes a product list saved on disk.
///
/// # Errors
///
/// [`ErpError::LocalFile`] if the file cannot be read, or any decoding error
/// from [`decode_products`].
pub async fn read_local_catalog(path: &Path) -> Result<Vec<RawProduct>, ErpError> {
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ErpError::LocalFile {
            path: path.to_owned(),
            source,
        })?;
    decode_products(&body, &path.display().to_string())
}
