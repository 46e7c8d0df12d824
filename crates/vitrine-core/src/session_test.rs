use super::*;
use crate::products::{RawProduct, VariantAttributes};

fn make(id: &str, name: &str, price: f64, stock: i64, product_type: Option<&str>) -> GroupedProduct {
    GroupedProduct::ungrouped(&RawProduct {
        id: id.to_owned(),
        name: name.to_owned(),
        code: Some(format!("SKU-{id}")),
        price,
        current_stock: stock,
        attributes: VariantAttributes::default(),
        product_type: product_type.map(str::to_owned),
        description: Some(format!("Descrição de {name}")),
        image_url: None,
        published: None,
    })
}

fn catalog() -> Vec<GroupedProduct> {
    vec![
        make("1", "Roda de Corte", 45.0, 30, Some("ferramenta")),
        make("2", "Disco Flap", 120.0, 3, Some("Ferramentas")),
        make("3", "Lixadeira Angular", 650.0, 0, Some("equipamento")),
        make("4", "Escova de Aço", 310.0, 12, Some("componente")),
        make("5", "abrasivo avulso", 80.0, 8, None),
    ]
}

fn ids(products: &[GroupedProduct]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

// -----------------------------------------------------------------------
// Category
// -----------------------------------------------------------------------

#[test]
fn category_maps_known_types_case_insensitively() {
    assert_eq!(
        Category::from_product_type(Some("FERRAMENTA")),
        Category::Herramientas
    );
    assert_eq!(
        Category::from_product_type(Some("equipamentos")),
        Category::Equipos
    );
    assert_eq!(
        Category::from_product_type(Some("Componente")),
        Category::Componentes
    );
    assert_eq!(
        Category::from_product_type(Some("software")),
        Category::Software
    );
}

#[test]
fn category_unknown_or_missing_is_outros() {
    assert_eq!(Category::from_product_type(Some("lixa")), Category::Outros);
    assert_eq!(Category::from_product_type(None), Category::Outros);
}

#[test]
fn category_parses_filter_slug() {
    assert_eq!("equipos".parse::<Category>(), Ok(Category::Equipos));
    assert!("tools".parse::<Category>().is_err());
}

// -----------------------------------------------------------------------
// PriceBand / SortOrder parsing
// -----------------------------------------------------------------------

#[test]
fn price_band_boundaries() {
    assert!(PriceBand::UpTo100.contains(100.0));
    assert!(!PriceBand::From100To300.contains(100.0));
    assert!(PriceBand::From100To300.contains(300.0));
    assert!(PriceBand::From300To500.contains(300.01));
    assert!(PriceBand::Above500.contains(500.01));
    assert!(!PriceBand::Above500.contains(500.0));
}

#[test]
fn price_band_parses_filter_values() {
    assert_eq!("500+".parse::<PriceBand>(), Ok(PriceBand::Above500));
    assert!("1000+".parse::<PriceBand>().is_err());
}

#[test]
fn sort_order_accepts_rating_as_stock() {
    assert_eq!("rating".parse::<SortOrder>(), Ok(SortOrder::Stock));
    assert_eq!("price-high".parse::<SortOrder>(), Ok(SortOrder::PriceHigh));
}

// -----------------------------------------------------------------------
// CatalogSession
// -----------------------------------------------------------------------

#[test]
fn new_session_shows_everything_on_page_one() {
    let session = CatalogSession::new(catalog(), 15);
    assert_eq!(session.visible_products().len(), 5);
    assert_eq!(session.current_page(), 1);
    assert_eq!(session.total_pages(), 1);
    assert_eq!(session.items_range(), Some((1, 5)));
}

#[test]
fn items_per_page_zero_is_clamped() {
    let session = CatalogSession::new(catalog(), 0);
    assert_eq!(session.items_per_page(), 1);
    assert_eq!(session.total_pages(), 5);
}

#[test]
fn default_filter_sorts_by_name_case_insensitively() {
    let mut session = CatalogSession::new(catalog(), 15);
    session.apply_filters(&ShopFilter::default());
    assert_eq!(ids(session.visible_products()), vec!["5", "2", "4", "3", "1"]);
}

#[test]
fn category_filter_uses_type_mapping() {
    let mut session = CatalogSession::new(catalog(), 15);
    session.apply_filters(&ShopFilter {
        category: Some(Category::Herramientas),
        ..ShopFilter::default()
    });
    assert_eq!(ids(session.visible_products()), vec!["2", "1"]);
}

#[test]
fn price_filter_and_price_sort() {
    let mut session = CatalogSession::new(catalog(), 15);
    session.apply_filters(&ShopFilter {
        price_band: Some(PriceBand::UpTo100),
        sort: SortOrder::PriceHigh,
        ..ShopFilter::default()
    });
    assert_eq!(ids(session.visible_products()), vec!["5", "1"]);
}

#[test]
fn search_matches_name_description_and_code() {
    let mut session = CatalogSession::new(catalog(), 15);
    session.apply_filters(&ShopFilter {
        search: Some("  DISCO ".to_owned()),
        ..ShopFilter::default()
    });
    assert_eq!(ids(session.visible_products()), vec!["2"]);

    session.apply_filters(&ShopFilter {
        search: Some("sku-4".to_owned()),
        ..ShopFilter::default()
    });
    assert_eq!(ids(session.visible_products()), vec!["4"]);
}

#[test]
fn blank_search_is_ignored() {
    let mut session = CatalogSession::new(catalog(), 15);
    session.apply_filters(&ShopFilter {
        search: Some("   ".to_owned()),
        ..ShopFilter::default()
    });
    assert_eq!(session.visible_products().len(), 5);
}

#[test]
fn stock_sort_puts_best_stocked_first() {
    let mut session = CatalogSession::new(catalog(), 15);
    session.apply_filters(&ShopFilter {
        sort: SortOrder::Stock,
        ..ShopFilter::default()
    });
    assert_eq!(ids(session.visible_products()), vec!["1", "4", "5", "2", "3"]);
}

#[test]
fn filters_always_start_from_the_full_catalog() {
    let mut session = CatalogSession::new(catalog(), 15);
    session.apply_filters(&ShopFilter {
        category: Some(Category::Equipos),
        ..ShopFilter::default()
    });
    assert_eq!(session.visible_products().len(), 1);

    session.apply_filters(&ShopFilter::default());
    assert_eq!(session.visible_products().len(), 5);
    assert_eq!(session.all_products().len(), 5);
}

#[test]
fn pagination_slices_and_clamps() {
    let mut session = CatalogSession::new(catalog(), 2);
    assert_eq!(session.total_pages(), 3);

    session.go_to_page(2);
    assert_eq!(ids(session.page_items()), vec!["3", "4"]);
    assert_eq!(session.items_range(), Some((3, 4)));

    session.go_to_page(99);
    assert_eq!(session.current_page(), 3);
    assert_eq!(ids(session.page_items()), vec!["5"]);
    assert_eq!(session.items_range(), Some((5, 5)));

    session.go_to_page(0);
    assert_eq!(session.current_page(), 1);
}

#[test]
fn applying_filters_resets_page() {
    let mut session = CatalogSession::new(catalog(), 2);
    session.go_to_page(3);
    session.apply_filters(&ShopFilter::default());
    assert_eq!(session.current_page(), 1);
}

#[test]
fn empty_view_has_no_range() {
    let mut session = CatalogSession::new(catalog(), 15);
    session.apply_filters(&ShopFilter {
        search: Some("inexistente".to_owned()),
        ..ShopFilter::default()
    });
    assert_eq!(session.total_pages(), 0);
    assert!(session.page_items().is_empty());
    assert!(session.items_range().is_none());
    session.go_to_page(4);
    assert_eq!(session.current_page(), 1);
}
