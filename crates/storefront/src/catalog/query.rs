//! Page-level catalog filters.
//!
//! Listing pages combine a category selection and an inclusive price range
//! with simple conjunction. Each platform page starts from the defaults below;
//! query parameters narrow or widen them.

use std::collections::HashSet;

use game_store_core::{AccessoryKind, Category, Platform, Product};
use rust_decimal::Decimal;

/// Inclusive `[min, max]` price bounds in the base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    #[must_use]
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Range from zero up to `max`.
    #[must_use]
    pub fn up_to(max: impl Into<Decimal>) -> Self {
        Self::new(Decimal::ZERO, max.into())
    }

    /// A range with no effective bounds.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(Decimal::MIN, Decimal::MAX)
    }

    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }

    /// Replace either bound when given.
    #[must_use]
    pub fn with_overrides(self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        Self::new(min.unwrap_or(self.min), max.unwrap_or(self.max))
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Filter over platform, category set, and price range.
///
/// A product passes when every constraint holds. `None` for the platform or
/// the category set means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub platform: Option<Platform>,
    pub categories: Option<HashSet<Category>>,
    pub price: PriceRange,
}

impl ProductFilter {
    /// The default filter for a platform listing page.
    ///
    /// PlayStation shows every category up to 2000, Xbox up to 500, Nintendo
    /// up to 500, and PC filters on price only (up to 1000).
    #[must_use]
    pub fn platform_page(platform: Platform) -> Self {
        let (categories, max) = match platform {
            Platform::Playstation => (Some(Category::ALL.into_iter().collect()), 2000),
            Platform::Xbox | Platform::Nintendo => {
                (Some(Category::ALL.into_iter().collect()), 500)
            }
            Platform::Pc => (None, 1000),
        };
        Self {
            platform: Some(platform),
            categories,
            price: PriceRange::up_to(max),
        }
    }

    /// Restrict to a set of categories.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = Some(categories.into_iter().collect());
        self
    }

    #[must_use]
    pub const fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let platform_ok = self.platform.is_none_or(|p| p == product.platform);
        let category_ok = self
            .categories
            .as_ref()
            .is_none_or(|set| set.contains(&product.category));
        platform_ok && category_ok && self.price.contains(product.price)
    }
}

/// Accessories page filter: accessory kinds plus a price range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessoryFilter {
    pub kinds: HashSet<AccessoryKind>,
    pub price: PriceRange,
}

impl AccessoryFilter {
    /// Only products with a matching accessory kind pass.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        product.category == Category::Accessories
            && product
                .accessory_kind
                .is_some_and(|kind| self.kinds.contains(&kind))
            && self.price.contains(product.price)
    }

    /// Apply the filter to a product list, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

impl Default for AccessoryFilter {
    /// Every kind selected, priced up to 500.
    fn default() -> Self {
        Self {
            kinds: AccessoryKind::ALL.into_iter().collect(),
            price: PriceRange::up_to(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange::new(dec!(10), dec!(20));
        assert!(range.contains(dec!(10)));
        assert!(range.contains(dec!(20)));
        assert!(!range.contains(dec!(20.01)));
        assert!(!range.contains(dec!(9.99)));
    }

    #[test]
    fn test_platform_page_defaults() {
        let catalog = Catalog::builtin();
        let ps = catalog.filter(&ProductFilter::platform_page(Platform::Playstation));
        // The PS5 Pro at 1049.99 is inside the 0..=2000 default.
        assert!(ps.iter().any(|p| p.id == "ps5pro"));

        let xbox = catalog.filter(&ProductFilter::platform_page(Platform::Xbox));
        assert!(xbox.iter().all(|p| p.price <= dec!(500)));
        assert!(xbox.iter().any(|p| p.id == "xbox-series-x"));
    }

    #[test]
    fn test_category_and_price_conjunction() {
        let catalog = Catalog::builtin();
        let filter = ProductFilter::platform_page(Platform::Playstation)
            .with_categories([Category::Digital])
            .with_price(PriceRange::new(dec!(0), dec!(75)));
        let ids: Vec<_> = catalog
            .filter(&filter)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["psngift20", "psngift50"]);
    }

    #[test]
    fn test_empty_category_selection_matches_nothing() {
        let catalog = Catalog::builtin();
        let filter = ProductFilter::platform_page(Platform::Xbox).with_categories([]);
        assert!(catalog.filter(&filter).is_empty());
    }

    #[test]
    fn test_accessory_filter_uses_explicit_kind() {
        let catalog = Catalog::builtin();
        let filter = AccessoryFilter {
            kinds: [AccessoryKind::GamingDesks].into_iter().collect(),
            price: PriceRange::unbounded(),
        };
        let ids: Vec<_> = filter
            .apply(catalog.all())
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["rgbdesk"]);
    }

    #[test]
    fn test_accessory_default_price_cap() {
        let catalog = Catalog::builtin();
        let matched = AccessoryFilter::default().apply(catalog.all());
        assert!(!matched.is_empty());
        assert!(matched.iter().all(|p| p.price <= dec!(500)));
        assert!(matched.iter().all(|p| p.category == Category::Accessories));
    }
}
