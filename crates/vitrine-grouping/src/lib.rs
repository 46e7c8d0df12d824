//! Folds flat, SKU-level ERP records into display products with selectable
//! variants.
//!
//! Two entry points exist. [`group_by_sku_prefix`] clusters by shared SKU
//! prefix and is what the catalog loader runs by default. [`group_adaptive`]
//! scans the list for name and field signals first and then runs the
//! name-delimiter, field-based, or pass-through strategy they point to.
//!
//! Grouping never fails and never drops a record: every input product ends
//! up either as a variant of exactly one family or as its own ungrouped
//! product.

pub mod alternate;
pub mod naming;
pub mod rules;
pub mod scanner;
pub mod selector;
pub mod sku_prefix;

use vitrine_core::{GroupedProduct, GroupingMode, RawProduct};

pub use alternate::{group_by_fields, group_by_name_delimiter, group_simple};
pub use naming::{attribute_label, common_product_name, slugify, variant_label};
pub use scanner::{scan, GroupingStrategy, PatternCounts};
pub use selector::{variant_option_label, SelectorOption, VariantField, VariantSelector};
pub use sku_prefix::group_by_sku_prefix;

/// Runs `strategy` over `products`.
#[must_use]
pub fn group_with(strategy: GroupingStrategy, products: &[RawProduct]) -> Vec<GroupedProduct> {
    match strategy {
        GroupingStrategy::SkuPrefix => group_by_sku_prefix(products),
        GroupingStrategy::NameDelimiter => group_by_name_delimiter(products),
        GroupingStrategy::FieldBased => group_by_fields(products),
        GroupingStrategy::Simple => group_simple(products),
    }
}

/// Scans `products` and runs the strategy the scan selects.
#[must_use]
pub fn group_adaptive(products: &[RawProduct]) -> Vec<GroupedProduct> {
    let counts = scan(products);
    let strategy = counts.strategy();
    tracing::debug!(
        total = counts.total,
        with_hyphen_in_id = counts.with_hyphen_in_id,
        with_hyphen_in_name = counts.with_hyphen_in_name,
        with_variant_fields = counts.with_variant_fields,
        with_code = counts.with_code,
        %strategy,
        "pattern scan complete"
    );
    group_with(strategy, products)
}

/// Groups `products` with the entry point selected by `mode`.
#[must_use]
pub fn group_products(mode: GroupingMode, products: &[RawProduct]) -> Vec<GroupedProduct> {
    let grouped = match mode {
        GroupingMode::SkuPrefix => group_by_sku_prefix(products),
        GroupingMode::Adaptive => group_adaptive(products),
    };
    let families = grouped.iter().filter(|p| p.is_grouped()).count();
    tracing::info!(
        %mode,
        input = products.len(),
        output = grouped.len(),
        families,
        "catalog grouped"
    );
    grouped
}
