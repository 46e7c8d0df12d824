//! Domain types, configuration, and storefront session state shared by the
//! `vitrine` crates.

pub mod app_config;
pub mod config;
mod lenient;
pub mod products;
pub mod session;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, GroupingMode};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{GroupedProduct, RawProduct, StockStatus, VariantAttributes, VariantRecord};
pub use session::{CatalogSession, Category, PriceBand, ShopFilter, SortOrder};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
