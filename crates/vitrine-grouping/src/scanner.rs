//! Read-only pass that counts the structural signals in a product list and
//! picks the alternate clustering strategy they point to.

use vitrine_core::RawProduct;

/// Name delimiter that separates a family name from its variant value.
pub const NAME_DELIMITER: &str = " - ";

/// Strategies selectable by [`PatternCounts::strategy`] or forced by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingStrategy {
    SkuPrefix,
    NameDelimiter,
    FieldBased,
    /// Every product stays on its own.
    Simple,
}

impl std::fmt::Display for GroupingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupingStrategy::SkuPrefix => write!(f, "sku-prefix"),
            GroupingStrategy::NameDelimiter => write!(f, "name-delimiter"),
            GroupingStrategy::FieldBased => write!(f, "field-based"),
            GroupingStrategy::Simple => write!(f, "simple"),
        }
    }
}

/// Signal counters over one product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternCounts {
    pub with_hyphen_in_id: usize,
    pub with_hyphen_in_name: usize,
    pub with_variant_fields: usize,
    pub with_code: usize,
    pub total: usize,
}

impl PatternCounts {
    /// Picks name-delimiter when delimited names outnumber 80% of hyphenated
    /// ids, else field-based when more than 30% of products carry variant
    /// fields, else simple.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn strategy(&self) -> GroupingStrategy {
        if self.with_hyphen_in_name as f64 > 0.8 * self.with_hyphen_in_id as f64 {
            GroupingStrategy::NameDelimiter
        } else if self.with_variant_fields as f64 > 0.3 * self.total as f64 {
            GroupingStrategy::FieldBased
        } else {
            GroupingStrategy::Simple
        }
    }
}

/// Counts the grouping signals present in `products`.
#[must_use]
pub fn scan(products: &[RawProduct]) -> PatternCounts {
    products
        .iter()
        .fold(PatternCounts::default(), |mut counts, product| {
            counts.total += 1;
            if product.id.contains('-') {
                counts.with_hyphen_in_id += 1;
            }
            if product.name.contains(NAME_DELIMITER) {
                counts.with_hyphen_in_name += 1;
            }
            if product.attributes.any_present() {
                counts.with_variant_fields += 1;
            }
            if product.code.is_some() {
                counts.with_code += 1;
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use vitrine_core::VariantAttributes;

    use super::*;

    fn product(id: &str, name: &str, code: Option<&str>, grao: Option<&str>) -> RawProduct {
        RawProduct {
            id: id.to_owned(),
            name: name.to_owned(),
            code: code.map(str::to_owned),
            attributes: VariantAttributes {
                grao: grao.map(str::to_owned),
                ..VariantAttributes::default()
            },
            ..RawProduct::default()
        }
    }

    #[test]
    fn empty_input_counts_nothing_and_stays_simple() {
        let counts = scan(&[]);
        assert_eq!(counts, PatternCounts::default());
        assert_eq!(counts.strategy(), GroupingStrategy::Simple);
    }

    #[test]
    fn counts_each_signal() {
        let products = vec![
            product("a-1", "Disco - 40", Some("D40"), Some("40")),
            product("a-2", "Disco-60", None, None),
            product("3", "Roda", Some("R1"), None),
        ];
        let counts = scan(&products);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.with_hyphen_in_id, 2);
        assert_eq!(counts.with_hyphen_in_name, 1);
        assert_eq!(counts.with_variant_fields, 1);
        assert_eq!(counts.with_code, 2);
    }

    #[test]
    fn delimited_names_select_name_delimiter() {
        let products = vec![
            product("1", "Disco - 40", None, None),
            product("2", "Disco - 60", None, None),
        ];
        assert_eq!(scan(&products).strategy(), GroupingStrategy::NameDelimiter);
    }

    #[test]
    fn hyphenated_ids_raise_the_delimiter_bar() {
        let products = vec![
            product("a-1", "Disco - 40", None, Some("40")),
            product("a-2", "Disco 60", None, Some("60")),
        ];
        // 1 delimited name vs 0.8 * 2 hyphenated ids.
        assert_eq!(scan(&products).strategy(), GroupingStrategy::FieldBased);
    }

    #[test]
    fn sparse_variant_fields_stay_simple() {
        let products = vec![
            product("a-1", "Disco", None, Some("40")),
            product("a-2", "Roda", None, None),
            product("a-3", "Escova", None, None),
            product("a-4", "Broca", None, None),
        ];
        // 1 of 4 carries fields: 1 > 1.2 is false.
        assert_eq!(scan(&products).strategy(), GroupingStrategy::Simple);
    }

    #[test]
    fn strategy_display_names() {
        assert_eq!(GroupingStrategy::SkuPrefix.to_string(), "sku-prefix");
        assert_eq!(GroupingStrategy::FieldBased.to_string(), "field-based");
    }
}
