//! Name-driven clustering strategies chosen by the pattern scan.
//!
//! Both strategies key families by a slug of the base name. A family takes
//! the output slot of its first member; one-member families and products that
//! carry no variant signal are emitted ungrouped in their own slot.

use indexmap::IndexMap;
use vitrine_core::{GroupedProduct, RawProduct, VariantRecord};

use crate::naming::{attribute_label, last_chars, slugify};
use crate::rules::strip_variant_tokens;
use crate::scanner::NAME_DELIMITER;

struct Member {
    index: usize,
    label: String,
    sku: String,
}

struct Family {
    base: String,
    members: Vec<Member>,
}

enum Slot {
    Single(usize),
    Family(String),
}

/// Collects families in first-appearance order and lays out the output.
#[derive(Default)]
struct FamilyBuilder {
    slots: Vec<Slot>,
    families: IndexMap<String, Family>,
}

impl FamilyBuilder {
    fn single(&mut self, index: usize) {
        self.slots.push(Slot::Single(index));
    }

    fn join(&mut self, key: String, base: &str, member: Member) {
        if let Some(family) = self.families.get_mut(&key) {
            family.members.push(member);
            return;
        }
        self.slots.push(Slot::Family(key.clone()));
        self.families.insert(
            key,
            Family {
                base: base.to_owned(),
                members: vec![member],
            },
        );
    }

    fn finish(self, products: &[RawProduct]) -> Vec<GroupedProduct> {
        let FamilyBuilder { slots, families } = self;
        slots
            .into_iter()
            .filter_map(|slot| match slot {
                Slot::Single(index) => Some(GroupedProduct::ungrouped(&products[index])),
                Slot::Family(key) => {
                    let family = families.get(&key)?;
                    Some(build_family(products, key, family))
                }
            })
            .collect()
    }
}

fn build_family(products: &[RawProduct], key: String, family: &Family) -> GroupedProduct {
    let anchor = &products[family.members[0].index];
    if family.members.len() < 2 {
        return GroupedProduct::ungrouped(anchor);
    }
    let variants: Vec<VariantRecord> = family
        .members
        .iter()
        .map(|m| VariantRecord::from_product(&products[m.index], m.label.clone(), m.sku.clone()))
        .collect();
    GroupedProduct::from_anchor(anchor, key, family.base.clone(), variants)
}

/// Groups products whose names read `"<base> - <variant>"` by `<base>`.
///
/// The variant label is everything after the first delimiter. The variant
/// SKU is the product code, else the last hyphen-separated segment of the
/// id, else `var<index>` with the product's input position.
#[must_use]
pub fn group_by_name_delimiter(products: &[RawProduct]) -> Vec<GroupedProduct> {
    let mut builder = FamilyBuilder::default();

    for (index, product) in products.iter().enumerate() {
        let Some((base, value)) = product.name.split_once(NAME_DELIMITER) else {
            builder.single(index);
            continue;
        };
        let base = base.trim();
        let key = slugify(base);
        if key.is_empty() {
            builder.single(index);
            continue;
        }

        let label = match value.trim() {
            "" => format!("Variante {}", last_chars(product.identity(), 4)),
            v => v.to_owned(),
        };
        let sku = product
            .code
            .clone()
            .or_else(|| {
                product
                    .id
                    .rsplit('-')
                    .next()
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| format!("var{index}"));

        builder.join(key, base, Member { index, label, sku });
    }

    builder.finish(products)
}

/// Groups products that carry variant fields by their name with grain,
/// dimension, and grit tokens stripped.
///
/// Products without any variant field stay ungrouped.
#[must_use]
pub fn group_by_fields(products: &[RawProduct]) -> Vec<GroupedProduct> {
    let mut builder = FamilyBuilder::default();

    for (index, product) in products.iter().enumerate() {
        if !product.attributes.any_present() {
            builder.single(index);
            continue;
        }
        let stripped = strip_variant_tokens(&product.name);
        let base = if stripped.is_empty() {
            product.name.trim().to_owned()
        } else {
            stripped
        };
        let key = slugify(&base);
        if key.is_empty() {
            builder.single(index);
            continue;
        }

        let attributes = &product.attributes;
        let label = attribute_label(attributes)
            .or_else(|| attributes.altura_roda.as_ref().map(|a| format!("Alt. {a}mm")))
            .unwrap_or_else(|| format!("SKU {}", last_chars(product.identity(), 4)));
        let sku = product
            .code
            .clone()
            .unwrap_or_else(|| format!("{key}-{index}"));

        builder.join(key, &base, Member { index, label, sku });
    }

    builder.finish(products)
}

/// Leaves every product on its own.
#[must_use]
pub fn group_simple(products: &[RawProduct]) -> Vec<GroupedProduct> {
    products.iter().map(GroupedProduct::ungrouped).collect()
}

#[cfg(test)]
#[path = "alternate_test.rs"]
mod tests;
