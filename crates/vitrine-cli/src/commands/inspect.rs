use std::path::Path;

use vitrine_core::GroupingMode;
use vitrine_grouping::{group_products, scan};

use super::{load_products, write_json};

/// Prints the grouping signal counters for `input` and the strategy they
/// select.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub(crate) async fn run_scan(input: &Path) -> anyhow::Result<()> {
    let products = load_products(input).await?;
    let counts = scan(&products);

    println!("{:<22}{}", "products", counts.total);
    println!("{:<22}{}", "hyphen in id", counts.with_hyphen_in_id);
    println!("{:<22}{}", "\" - \" in name", counts.with_hyphen_in_name);
    println!("{:<22}{}", "variant fields", counts.with_variant_fields);
    println!("{:<22}{}", "with code", counts.with_code);
    println!("{:<22}{}", "adaptive strategy", counts.strategy());
    Ok(())
}

/// Groups `input` and prints the grouped catalog as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub(crate) async fn run_group(input: &Path, mode: GroupingMode, pretty: bool) -> anyhow::Result<()> {
    let products = load_products(input).await?;
    let grouped = group_products(mode, &products);
    write_json(&grouped, None, pretty)
}
