//! Storefront catalog state: the grouped catalog, the filtered view, and the
//! page cursor.
//!
//! One [`CatalogSession`] is built per catalog load and owned by whoever
//! renders it. Reloading replaces the session wholesale.

use crate::products::GroupedProduct;

/// Storefront category derived from a product's coarse `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Herramientas,
    Equipos,
    Componentes,
    Software,
    Outros,
}

impl Category {
    /// Maps an ERP `type` tag to its category (case-insensitive). Unknown or
    /// missing tags land in [`Category::Outros`].
    #[must_use]
    pub fn from_product_type(product_type: Option<&str>) -> Self {
        let Some(tag) = product_type else {
            return Self::Outros;
        };
        match tag.trim().to_lowercase().as_str() {
            "ferramenta" | "ferramentas" => Self::Herramientas,
            "equipamento" | "equipamentos" => Self::Equipos,
            "componente" | "componentes" => Self::Componentes,
            "software" => Self::Software,
            _ => Self::Outros,
        }
    }

    /// Slug used in filter controls.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Herramientas => "herramientas",
            Self::Equipos => "equipos",
            Self::Componentes => "componentes",
            Self::Software => "software",
            Self::Outros => "outros",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "herramientas" => Ok(Self::Herramientas),
            "equipos" => Ok(Self::Equipos),
            "componentes" => Ok(Self::Componentes),
            "software" => Ok(Self::Software),
            "outros" => Ok(Self::Outros),
            other => Err(format!("unknown category \"{other}\"")),
        }
    }
}

/// Price filter bands offered by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBand {
    /// `price <= 100`
    UpTo100,
    /// `100 < price <= 300`
    From100To300,
    /// `300 < price <= 500`
    From300To500,
    /// `price > 500`
    Above500,
}

impl PriceBand {
    #[must_use]
    pub fn contains(self, price: f64) -> bool {
        match self {
            Self::UpTo100 => price <= 100.0,
            Self::From100To300 => price > 100.0 && price <= 300.0,
            Self::From300To500 => price > 300.0 && price <= 500.0,
            Self::Above500 => price > 500.0,
        }
    }
}

impl std::str::FromStr for PriceBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0-100" => Ok(Self::UpTo100),
            "100-300" => Ok(Self::From100To300),
            "300-500" => Ok(Self::From300To500),
            "500+" => Ok(Self::Above500),
            other => Err(format!(
                "unknown price band \"{other}\"; expected 0-100, 100-300, 300-500 or 500+"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Alphabetical, case-insensitive.
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    /// Highest stock first.
    Stock,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "stock" | "rating" => Ok(Self::Stock),
            other => Err(format!(
                "unknown sort order \"{other}\"; expected name, price-low, price-high or stock"
            )),
        }
    }
}

/// Filter and sort settings applied to the catalog view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopFilter {
    pub category: Option<Category>,
    pub price_band: Option<PriceBand>,
    /// Case-insensitive substring matched against name, description and SKU.
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl ShopFilter {
    fn matches(&self, product: &GroupedProduct, needle: Option<&str>) -> bool {
        if let Some(category) = self.category {
            if Category::from_product_type(product.product_type.as_deref()) != category {
                return false;
            }
        }
        if let Some(band) = self.price_band {
            if !band.contains(product.price) {
                return false;
            }
        }
        if let Some(needle) = needle {
            let haystacks = [
                Some(product.name.as_str()),
                product.description.as_deref(),
                product.code.as_deref(),
            ];
            return haystacks
                .into_iter()
                .flatten()
                .any(|h| h.to_lowercase().contains(needle));
        }
        true
    }
}

/// The storefront's catalog state for one load.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    original: Vec<GroupedProduct>,
    visible: Vec<GroupedProduct>,
    current_page: usize,
    items_per_page: usize,
}

impl CatalogSession {
    /// Starts a session over a freshly grouped catalog. `items_per_page` is
    /// clamped to at least 1.
    #[must_use]
    pub fn new(products: Vec<GroupedProduct>, items_per_page: usize) -> Self {
        Self {
            visible: products.clone(),
            original: products,
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    /// Every product from the last load, unfiltered.
    #[must_use]
    pub fn all_products(&self) -> &[GroupedProduct] {
        &self.original
    }

    /// Products left after the current filter, in display order.
    #[must_use]
    pub fn visible_products(&self) -> &[GroupedProduct] {
        &self.visible
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Re-derives the visible list from the full catalog and resets to page 1.
    pub fn apply_filters(&mut self, filter: &ShopFilter) {
        let needle = filter
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut visible: Vec<GroupedProduct> = self
            .original
            .iter()
            .filter(|p| filter.matches(p, needle.as_deref()))
            .cloned()
            .collect();

        match filter.sort {
            SortOrder::Name => {
                visible.sort_by_cached_key(|p| p.name.to_lowercase());
            }
            SortOrder::PriceLow => visible.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceHigh => visible.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortOrder::Stock => visible.sort_by(|a, b| b.current_stock.cmp(&a.current_stock)),
        }

        self.visible = visible;
        self.current_page = 1;
    }

    /// Number of pages in the visible list; `0` when nothing is visible.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.visible.len().div_ceil(self.items_per_page)
    }

    /// Moves to `page`, clamped to the available range.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    /// Products on the current page.
    #[must_use]
    pub fn page_items(&self) -> &[GroupedProduct] {
        let start = (self.current_page - 1) * self.items_per_page;
        if start >= self.visible.len() {
            return &[];
        }
        let end = (start + self.items_per_page).min(self.visible.len());
        &self.visible[start..end]
    }

    /// 1-based `(first, last)` positions shown on the current page, or `None`
    /// when the view is empty.
    #[must_use]
    pub fn items_range(&self) -> Option<(usize, usize)> {
        let items = self.page_items();
        if items.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.items_per_page + 1;
        Some((first, first + items.len() - 1))
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
