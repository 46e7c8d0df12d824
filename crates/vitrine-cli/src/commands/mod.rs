//! Command handlers, called from `main` once config and logging are set up.

mod browse;
mod fetch;
mod inspect;

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use vitrine_core::RawProduct;

pub(crate) use browse::{run_browse, BrowseOptions};
pub(crate) use fetch::run_fetch;
pub(crate) use inspect::{run_group, run_scan};

/// Reads a product file in any supported envelope.
async fn load_products(input: &Path) -> anyhow::Result<Vec<RawProduct>> {
    let products = vitrine_erp::read_local_catalog(input)
        .await
        .with_context(|| format!("failed to load products from {}", input.display()))?;
    tracing::info!(
        path = %input.display(),
        products = products.len(),
        published = vitrine_erp::published_count(&products),
        "products loaded"
    );
    Ok(products)
}

/// Serializes `value` to `output`, or to stdout when `output` is `None`.
fn write_json<T: Serialize>(value: &T, output: Option<&Path>, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match output {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
