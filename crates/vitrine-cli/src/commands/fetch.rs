use std::path::Path;

use vitrine_core::{AppConfig, GroupingMode};
use vitrine_erp::{CatalogSource, ErpClient};
use vitrine_grouping::group_products;

use super::write_json;

/// Loads the catalog through the configured ERP source chain, groups it, and
/// writes the grouped JSON.
///
/// # Errors
///
/// Returns an error if the ERP settings are incomplete, every source fails,
/// or the output cannot be written.
pub(crate) async fn run_fetch(
    config: &AppConfig,
    mode: GroupingMode,
    output: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    let source = CatalogSource::from_config(config)?;
    let client = ErpClient::from_config(config)?;
    let products = client.fetch_catalog(&source).await?;

    tracing::info!(
        products = products.len(),
        published = vitrine_erp::published_count(&products),
        "catalog fetched"
    );

    let grouped = group_products(mode, &products);
    write_json(&grouped, output, pretty)?;
    if let Some(path) = output {
        println!("wrote {} products to {}", grouped.len(), path.display());
    }
    Ok(())
}
