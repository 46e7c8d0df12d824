use std::fmt::Write as _;
use std::path::Path;

use vitrine_core::{CatalogSession, GroupedProduct, GroupingMode, ShopFilter, StockStatus};
use vitrine_grouping::{group_products, VariantSelector};

use super::load_products;

/// Longest product name printed before truncation.
const NAME_WIDTH: usize = 44;

#[derive(Debug, Clone)]
pub(crate) struct BrowseOptions {
    pub mode: GroupingMode,
    pub filter: ShopFilter,
    pub page: usize,
    pub per_page: usize,
}

/// Groups `input`, applies the filter, and prints the requested page with a
/// selector summary for each grouped product.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub(crate) async fn run_browse(input: &Path, options: &BrowseOptions) -> anyhow::Result<()> {
    let products = load_products(input).await?;
    let grouped = group_products(options.mode, &products);

    let mut session = CatalogSession::new(grouped, options.per_page);
    session.apply_filters(&options.filter);
    session.go_to_page(options.page);

    print!("{}", render_page(&session));
    Ok(())
}

/// Renders the current page of `session` as a text table.
fn render_page(session: &CatalogSession) -> String {
    let mut out = String::new();
    let Some((first, last)) = session.items_range() else {
        out.push_str("no products match the current filters\n");
        return out;
    };

    let _ = writeln!(
        out,
        "page {} of {} (showing {first}-{last} of {})",
        session.current_page(),
        session.total_pages(),
        session.visible_products().len()
    );
    let _ = writeln!(out, "{:<46}{:>12}  STOCK", "PRODUCT", "PRICE");
    for product in session.page_items() {
        out.push_str(&render_product(product));
    }
    out
}

fn render_product(product: &GroupedProduct) -> String {
    let name = if product.name.chars().count() > NAME_WIDTH {
        format!("{}...", product.name.chars().take(NAME_WIDTH - 3).collect::<String>())
    } else {
        product.name.clone()
    };
    let mut line = format!(
        "{name:<46}{:>12}  {}\n",
        format_price(product.price),
        StockStatus::from_stock(product.current_stock)
    );
    if let Some(selector) = VariantSelector::for_product(product) {
        line.push_str(&render_selector(&selector));
    }
    line
}

fn render_selector(selector: &VariantSelector) -> String {
    let options: Vec<String> = selector
        .options
        .iter()
        .map(|option| {
            let mut text = format!("{} {}", option.label, format_price(option.price));
            if !option.available {
                let _ = write!(text, " ({})", option.stock_status());
            }
            text
        })
        .collect();
    format!("    {}: {}\n", selector.label, options.join(" | "))
}

/// Formats a price in reais with a decimal comma, e.g. `R$ 12,90`.
fn format_price(price: f64) -> String {
    format!("R$ {price:.2}").replace('.', ",")
}
