//! SKU-prefix clustering: the grouping the catalog loader runs by default.
//!
//! Products whose SKUs share a prefix of 6 to 12 characters are folded into
//! one family. Longer prefixes claim their members first, so a broad prefix
//! only picks up what the specific ones left behind.

use indexmap::IndexMap;
use vitrine_core::{GroupedProduct, RawProduct, VariantRecord};

use crate::naming::{common_product_name, variant_label};

pub const MIN_PREFIX_LEN: usize = 6;
pub const MAX_PREFIX_LEN: usize = 12;

/// A prefix bucket with at least two members, before claiming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PrefixCandidate {
    pub prefix: String,
    /// Prefix length in characters.
    pub len: usize,
    /// Input positions of the members, in input order.
    pub members: Vec<usize>,
}

/// Buckets products by every prefix length in range and keeps the buckets
/// with two or more members, ordered longest prefix first. Equal lengths
/// keep discovery order.
pub(crate) fn collect_candidates(products: &[RawProduct]) -> Vec<PrefixCandidate> {
    let mut candidates: IndexMap<String, PrefixCandidate> = IndexMap::new();

    for len in MIN_PREFIX_LEN..=MAX_PREFIX_LEN {
        let mut buckets: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (idx, product) in products.iter().enumerate() {
            let Some(code) = product.code.as_deref() else {
                continue;
            };
            if code.chars().count() <= len {
                continue;
            }
            let prefix: String = code.chars().take(len).collect();
            buckets.entry(prefix).or_default().push(idx);
        }

        for (prefix, members) in buckets {
            if members.len() < 2 {
                continue;
            }
            candidates
                .entry(prefix.clone())
                .or_insert(PrefixCandidate {
                    prefix,
                    len,
                    members,
                });
        }
    }

    let mut ordered: Vec<PrefixCandidate> = candidates.into_values().collect();
    ordered.sort_by(|a, b| b.len.cmp(&a.len));
    ordered
}

/// Groups `products` by shared SKU prefix.
///
/// Output holds the claimed families (longest prefix first) followed by every
/// unclaimed product, ungrouped, in input order. Products without a SKU are
/// never grouped.
#[must_use]
pub fn group_by_sku_prefix(products: &[RawProduct]) -> Vec<GroupedProduct> {
    let candidates = collect_candidates(products);
    let mut claimed = vec![false; products.len()];
    let mut grouped = Vec::new();

    for candidate in &candidates {
        let members: Vec<usize> = candidate
            .members
            .iter()
            .copied()
            .filter(|&idx| !claimed[idx])
            .collect();
        if members.len() < 2 {
            tracing::debug!(
                prefix = %candidate.prefix,
                remaining = members.len(),
                "sku prefix candidate dropped; members already claimed"
            );
            continue;
        }
        for &idx in &members {
            claimed[idx] = true;
        }
        grouped.push(build_family(products, &candidate.prefix, &members));
    }

    let family_count = grouped.len();
    grouped.extend(
        products
            .iter()
            .enumerate()
            .filter(|(idx, _)| !claimed[*idx])
            .map(|(_, product)| GroupedProduct::ungrouped(product)),
    );

    tracing::debug!(
        input = products.len(),
        candidates = candidates.len(),
        families = family_count,
        output = grouped.len(),
        "sku prefix grouping complete"
    );
    grouped
}

fn build_family(products: &[RawProduct], prefix: &str, members: &[usize]) -> GroupedProduct {
    let names: Vec<&str> = members.iter().map(|&idx| products[idx].name.as_str()).collect();
    let base = common_product_name(&names);

    let variants: Vec<VariantRecord> = members
        .iter()
        .map(|&idx| {
            let product = &products[idx];
            let code = product.code_or_empty();
            let sku = code.strip_prefix(prefix).unwrap_or(code).to_owned();
            VariantRecord::from_product(product, variant_label(product, &base), sku)
        })
        .collect();

    GroupedProduct::from_anchor(
        &products[members[0]],
        format!("sku-group-{prefix}"),
        base,
        variants,
    )
}

#[cfg(test)]
#[path = "sku_prefix_test.rs"]
mod tests;
