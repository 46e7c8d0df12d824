//! Variant selector model: which attribute a family varies by, and one
//! option per variant with the label, price, and stock to show.

use std::sync::LazyLock;

use regex::Regex;
use vitrine_core::{GroupedProduct, StockStatus, VariantRecord};

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)\b").expect("valid number regex"));

/// The attribute a family's selector is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantField {
    Grao,
    DiametroExt,
    AlturaRoda,
    Encaixe,
    Type,
    /// No structured attribute; options are labelled by variant name.
    Name,
}

impl VariantField {
    /// Picks the field from the first variant, preferring grain, then
    /// diameter, height, encaixe, and type.
    #[must_use]
    pub fn detect(variant: &VariantRecord) -> Self {
        let attrs = &variant.attributes;
        if attrs.grao.is_some() {
            Self::Grao
        } else if attrs.diametro_ext.is_some() {
            Self::DiametroExt
        } else if attrs.altura_roda.is_some() {
            Self::AlturaRoda
        } else if attrs.encaixe.is_some() {
            Self::Encaixe
        } else if variant.product_type.is_some() {
            Self::Type
        } else {
            Self::Name
        }
    }

    /// Heading shown above the options.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Grao => "Grão Abrasivo",
            Self::DiametroExt => "Diâmetro",
            Self::AlturaRoda => "Altura",
            Self::Encaixe => "Encaixe",
            Self::Type => "Tipo",
            Self::Name => "Variante",
        }
    }
}

/// Option text for `variant` under `field`.
///
/// Falls back to the variant name when the field is missing on this
/// particular variant. Grain numbers missing from the field are recovered
/// from the variant name, then from the SKU.
#[must_use]
pub fn variant_option_label(field: VariantField, variant: &VariantRecord) -> String {
    let attrs = &variant.attributes;
    let value = match field {
        VariantField::Grao => {
            let grain = attrs.grao.clone().or_else(|| {
                [variant.name.as_str(), variant.code.as_str()]
                    .into_iter()
                    .find_map(|s| NUMBER_RE.captures(s).map(|c| c[1].to_owned()))
            });
            return grain.map_or_else(|| "Grão".to_owned(), |g| format!("Grão {g}"));
        }
        VariantField::DiametroExt => attrs.diametro_ext.as_ref().map(|d| format!("⌀ {d}mm")),
        VariantField::AlturaRoda => attrs.altura_roda.as_ref().map(|a| format!("Alt. {a}mm")),
        VariantField::Encaixe => attrs.encaixe.as_ref().map(|e| format!("Encaixe {e}")),
        VariantField::Type => variant.product_type.clone(),
        VariantField::Name => None,
    };
    value.unwrap_or_else(|| variant.name.clone())
}

/// One choice in a [`VariantSelector`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorOption {
    /// Position in the family's `variants`.
    pub index: usize,
    pub label: String,
    pub price: f64,
    pub stock: i64,
    pub code: String,
    pub available: bool,
    pub selected: bool,
}

impl SelectorOption {
    #[must_use]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_stock(self.stock)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariantSelector {
    pub field: VariantField,
    pub label: &'static str,
    pub options: Vec<SelectorOption>,
}

impl VariantSelector {
    /// Builds the selector for `product`, or `None` when it has fewer than
    /// two variants. The first option starts selected. Variants without a
    /// positive price show the family price.
    #[must_use]
    pub fn for_product(product: &GroupedProduct) -> Option<Self> {
        if !product.is_grouped() {
            return None;
        }
        let field = VariantField::detect(&product.variants[0]);
        let options = product
            .variants
            .iter()
            .enumerate()
            .map(|(index, variant)| SelectorOption {
                index,
                label: variant_option_label(field, variant),
                price: if variant.price > 0.0 {
                    variant.price
                } else {
                    product.price
                },
                stock: variant.current_stock,
                code: variant.code.clone(),
                available: variant.current_stock > 0,
                selected: index == 0,
            })
            .collect();
        Some(Self {
            field,
            label: field.label(),
            options,
        })
    }

    /// Marks the option at `index` as selected and returns it. Out-of-range
    /// indexes leave the selection unchanged.
    pub fn select(&mut self, index: usize) -> Option<&SelectorOption> {
        if index >= self.options.len() {
            return None;
        }
        for option in &mut self.options {
            option.selected = option.index == index;
        }
        self.options.get(index)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectorOption> {
        self.options.iter().find(|o| o.selected)
    }
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod tests;
