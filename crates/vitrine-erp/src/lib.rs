//! ERP product-fetch collaborator: HTTP client with retry and an endpoint
//! fallback chain, plus normalization of the ERP's response envelopes into
//! flat [`vitrine_core::RawProduct`] lists.

pub mod client;
pub mod envelope;
pub mod error;
mod rate_limit;

pub use client::{read_local_catalog, CatalogSource, ErpClient};
pub use envelope::{decode_products, extract_product_array, published_count};
pub use error::ErpError;
