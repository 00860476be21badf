//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! # Xbox games up to 60 dollars
//! gs-cli catalog list --platform xbox --category games --max-price 60
//!
//! # One product in full
//! gs-cli catalog show ps5console
//! ```

use std::fmt::Write as _;

use game_store_core::{CurrencyCode, Product};
use game_store_storefront::catalog::{Catalog, ProductFilter};
use game_store_storefront::display;

use super::CommandError;

/// Render the products matching `filter`, one per line.
#[must_use]
pub fn list(catalog: &Catalog, filter: &ProductFilter, currency: CurrencyCode) -> String {
    let products = catalog.filter(filter);
    if products.is_empty() {
        return "No products match.\n".to_string();
    }

    let mut out = String::new();
    for product in &products {
        let _ = writeln!(
            out,
            "{:<28} {:>10}  {:<11} {:<11} {}",
            product.id,
            product.formatted_price(currency),
            product.platform,
            product.category,
            product.name
        );
    }
    let _ = writeln!(out, "{} product(s)", products.len());
    out
}

/// Render a single product.
///
/// # Errors
///
/// Returns `CommandError::ProductNotFound` if no product has this id.
pub fn show(catalog: &Catalog, id: &str, currency: CurrencyCode) -> Result<String, CommandError> {
    let product = catalog
        .find(id)
        .ok_or_else(|| CommandError::ProductNotFound(id.to_owned()))?;
    Ok(render_detail(product, currency))
}

fn render_detail(product: &Product, currency: CurrencyCode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", product.name);
    let _ = writeln!(out, "  id:        {}", product.id);
    let _ = write!(out, "  price:     {}", product.formatted_price(currency));
    if let Some(was) = display::compare_at_price(product) {
        let _ = write!(out, " (was {})", currency.format(was));
    }
    out.push('\n');
    let _ = writeln!(out, "  platform:  {}", product.platform);
    let _ = writeln!(out, "  category:  {}", product.category);
    if let Some(kind) = product.accessory_kind {
        let _ = writeln!(out, "  kind:      {kind}");
    }
    let _ = writeln!(out, "  rating:    {:.1}", display::rating(product));
    if let Some(badge) = display::discount_badge(product) {
        let _ = writeln!(out, "  badge:     {}", badge.label());
    }
    if display::on_sale(product) {
        let _ = writeln!(out, "  SALE");
    }
    let _ = writeln!(out, "\n{}", product.description_or_default());
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use game_store_core::{Category, Platform};
    use game_store_storefront::catalog::PriceRange;

    use super::*;

    #[test]
    fn test_list_filters_and_counts() {
        let catalog = Catalog::builtin();
        let filter = ProductFilter::platform_page(Platform::Playstation)
            .with_categories([Category::Digital])
            .with_price(PriceRange::up_to(75));

        let out = list(&catalog, &filter, CurrencyCode::USD);
        assert!(out.contains("psngift20"));
        assert!(out.contains("psngift50"));
        assert!(out.ends_with("2 product(s)\n"));
    }

    #[test]
    fn test_list_empty() {
        let catalog = Catalog::builtin();
        let filter = ProductFilter::default().with_price(PriceRange::up_to(0));
        assert_eq!(list(&catalog, &filter, CurrencyCode::USD), "No products match.\n");
    }

    #[test]
    fn test_show_formats_in_currency() {
        let catalog = Catalog::builtin();
        let out = show(&catalog, "ps5console", CurrencyCode::GBP).unwrap();
        assert!(out.starts_with("PlayStation 5"));
        assert!(out.contains("£394.99"));
        assert!(out.contains("50% OFF"));
    }

    #[test]
    fn test_show_unknown_product() {
        let catalog = Catalog::builtin();
        let err = show(&catalog, "dreamcast", CurrencyCode::USD).unwrap_err();
        assert!(matches!(err, CommandError::ProductNotFound(id) if id == "dreamcast"));
    }
}
