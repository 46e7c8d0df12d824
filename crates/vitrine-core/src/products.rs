use serde::{Deserialize, Serialize};

use crate::lenient;

/// The four ERP fields that distinguish variants of the same abrasive.
///
/// Every member is optional; a record with none of them set carries no
/// structured variant information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantAttributes {
    /// Grit size (grão), e.g. `"60"`.
    #[serde(
        default,
        alias = "grain",
        alias = "grau",
        deserialize_with = "lenient::attribute",
        skip_serializing_if = "Option::is_none"
    )]
    pub grao: Option<String>,
    /// Outer diameter in millimetres.
    #[serde(
        default,
        deserialize_with = "lenient::attribute",
        skip_serializing_if = "Option::is_none"
    )]
    pub diametro_ext: Option<String>,
    /// Wheel height in millimetres.
    #[serde(
        default,
        deserialize_with = "lenient::attribute",
        skip_serializing_if = "Option::is_none"
    )]
    pub altura_roda: Option<String>,
    /// Bore / fitting size, e.g. `"22.2mm"` or `"Furo 7/8"`.
    #[serde(
        default,
        deserialize_with = "lenient::attribute",
        skip_serializing_if = "Option::is_none"
    )]
    pub encaixe: Option<String>,
}

impl VariantAttributes {
    /// Returns `true` if at least one variant attribute is set.
    #[must_use]
    pub fn any_present(&self) -> bool {
        self.grao.is_some()
            || self.diametro_ext.is_some()
            || self.altura_roda.is_some()
            || self.encaixe.is_some()
    }
}

/// A SKU-level product record as delivered by the ERP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    /// Opaque catalog identifier.
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    /// SKU. Sibling variants usually share a prefix.
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub current_stock: i64,
    #[serde(flatten)]
    pub attributes: VariantAttributes,
    /// Coarse category tag (`"ferramenta"`, `"componente"`, ...).
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub published: Option<bool>,
}

impl RawProduct {
    /// The SKU, or `""` when the record has none.
    #[must_use]
    pub fn code_or_empty(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }

    /// Key that identifies this record on its own: the SKU, else the id.
    #[must_use]
    pub fn identity(&self) -> &str {
        self.code.as_deref().unwrap_or(&self.id)
    }

    /// `false` only when the ERP explicitly marks the record unpublished.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.published != Some(false)
    }
}

/// A display product: either one ERP record on its own (`variants` empty) or
/// a family of records folded under a common name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedProduct {
    /// The anchor's own id for ungrouped products, otherwise a synthesized
    /// group id such as `"sku-group-ABC123"` or a name slug.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Price of the first variant; the price shown before a selection is made.
    pub price: f64,
    pub current_stock: i64,
    #[serde(flatten)]
    pub attributes: VariantAttributes,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    /// Empty when no grouping occurred.
    #[serde(default)]
    pub variants: Vec<VariantRecord>,
}

impl GroupedProduct {
    /// Wraps a single record as a flat product with no variants.
    #[must_use]
    pub fn ungrouped(product: &RawProduct) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            code: product.code.clone(),
            price: product.price,
            current_stock: product.current_stock,
            attributes: product.attributes.clone(),
            product_type: product.product_type.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            published: product.published,
            variants: Vec::new(),
        }
    }

    /// Builds a group seeded from `anchor`'s display fields.
    ///
    /// Price and stock are taken from the first entry of `variants`, falling
    /// back to the anchor when the list is empty.
    #[must_use]
    pub fn from_anchor(
        anchor: &RawProduct,
        id: String,
        name: String,
        variants: Vec<VariantRecord>,
    ) -> Self {
        let (price, current_stock) = variants
            .first()
            .map_or((anchor.price, anchor.current_stock), |v| {
                (v.price, v.current_stock)
            });
        Self {
            id,
            name,
            price,
            current_stock,
            variants,
            ..Self::ungrouped(anchor)
        }
    }

    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` when a variant selector should be shown (two or more
    /// variants). A lone variant is displayed as a flat product.
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        self.variants.len() >= 2
    }

    /// Returns `true` if this product or any of its variants is in stock.
    #[must_use]
    pub fn has_stock(&self) -> bool {
        if self.variants.is_empty() {
            self.current_stock > 0
        } else {
            self.variants.iter().any(|v| v.current_stock > 0)
        }
    }
}

/// One selectable member of a [`GroupedProduct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRecord {
    /// Display label for the distinguishing attribute, e.g. `"Grão 60"`.
    pub value: String,
    /// Same label as `value`; kept under both keys for rendering code.
    pub name: String,
    /// Short code that tells this variant apart: the SKU suffix after the
    /// group prefix, or the full SKU when no prefix applies.
    pub sku: String,
    /// Full original SKU.
    pub code: String,
    pub price: f64,
    pub current_stock: i64,
    /// Mirror of `current_stock`.
    pub stock: i64,
    #[serde(flatten)]
    pub attributes: VariantAttributes,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    pub original_id: String,
    pub original_name: String,
}

impl VariantRecord {
    /// Builds a variant from its source record with the given label and SKU.
    #[must_use]
    pub fn from_product(product: &RawProduct, label: String, sku: String) -> Self {
        let code = product.code.clone().unwrap_or_else(|| sku.clone());
        Self {
            value: label.clone(),
            name: label,
            sku,
            code,
            price: product.price,
            current_stock: product.current_stock,
            stock: product.current_stock,
            attributes: product.attributes.clone(),
            product_type: product.product_type.clone(),
            original_id: product.id.clone(),
            original_name: product.name.clone(),
        }
    }
}

/// Stock band used by the storefront to colour availability badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    Low,
    Medium,
    High,
}

impl StockStatus {
    #[must_use]
    pub fn from_stock(stock: i64) -> Self {
        match stock {
            i64::MIN..=0 => Self::OutOfStock,
            1..=5 => Self::Low,
            6..=20 => Self::Medium,
            _ => Self::High,
        }
    }

    /// CSS class slug for the badge.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::OutOfStock => "out-of-stock",
            Self::Low => "low-stock",
            Self::Medium => "medium-stock",
            Self::High => "high-stock",
        }
    }

    /// Customer-facing text (pt-BR).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OutOfStock => "Fora de Estoque",
            Self::Low => "Estoque Baixo",
            Self::Medium => "Estoque Médio",
            Self::High => "Em Estoque",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
