//! Read-only product catalog.
//!
//! The catalog is compiled into the binary (see [`data`]) and materialized
//! once at startup. Lookups and platform queries are linear scans over the
//! product list; order is always the catalog's display order.

mod data;
pub mod query;

use game_store_core::{Category, Platform, Product, ProductId};

pub use query::{AccessoryFilter, PriceRange, ProductFilter};

/// The immutable product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the catalog shipped with the storefront.
    #[must_use]
    pub fn builtin() -> Self {
        let products = data::ENTRIES
            .iter()
            .map(|entry| Product {
                id: ProductId::new(entry.id),
                name: entry.name.to_owned(),
                price: entry.price,
                category: entry.category,
                platform: entry.platform,
                image: entry.image.to_owned(),
                description: entry.description.map(str::to_owned),
                accessory_kind: entry.accessory_kind,
            })
            .collect();
        Self { products }
    }

    /// Every product, in display order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    ///
    /// `None` is the storefront's "product not found" state.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products on `platform`.
    #[must_use]
    pub fn by_platform(&self, platform: Platform) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.platform == platform)
            .collect()
    }

    /// Products on `platform` in `category`.
    #[must_use]
    pub fn by_platform_and_category(&self, platform: Platform, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.platform == platform && product.category == category)
            .collect()
    }

    /// Products on the platform named `name`.
    ///
    /// Unknown platform names yield an empty list rather than an error.
    #[must_use]
    pub fn filter_by_platform_name(&self, name: &str) -> Vec<&Product> {
        name.parse::<Platform>()
            .map(|platform| self.by_platform(platform))
            .unwrap_or_default()
    }

    /// Products matching a page-level filter.
    #[must_use]
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use game_store_core::AccessoryKind;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(catalog.len(), 120);
    }

    #[test]
    fn test_builtin_prices_are_non_negative() {
        let catalog = Catalog::builtin();
        assert!(catalog.all().iter().all(|p| p.price >= dec!(0)));
    }

    #[test]
    fn test_accessory_kind_set_exactly_for_accessories() {
        for product in Catalog::builtin().all() {
            assert_eq!(
                product.accessory_kind.is_some(),
                product.category == Category::Accessories,
                "{}",
                product.id
            );
        }
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::builtin();
        let ps5 = catalog.find("ps5console").unwrap();
        assert_eq!(ps5.name, "PlayStation 5 Console");
        assert_eq!(ps5.price, dec!(499.99));
        assert!(catalog.find("gamecube").is_none());
    }

    #[test]
    fn test_by_platform_and_category() {
        let catalog = Catalog::builtin();
        let xbox_games = catalog.by_platform_and_category(Platform::Xbox, Category::Games);

        assert!(!xbox_games.is_empty());
        assert!(
            xbox_games
                .iter()
                .all(|p| p.platform == Platform::Xbox && p.category == Category::Games)
        );
        assert_eq!(xbox_games[0].id, "star-wars-outlaws");
    }

    #[test]
    fn test_by_platform_preserves_catalog_order() {
        let catalog = Catalog::builtin();
        let pc: Vec<_> = catalog.by_platform(Platform::Pc);
        let expected: Vec<_> = catalog
            .all()
            .iter()
            .filter(|p| p.platform == Platform::Pc)
            .collect();
        assert_eq!(pc, expected);
    }

    #[test]
    fn test_unknown_platform_name_is_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.filter_by_platform_name("dreamcast").is_empty());
        assert_eq!(
            catalog.filter_by_platform_name("xbox").len(),
            catalog.by_platform(Platform::Xbox).len()
        );
    }

    #[test]
    fn test_headsets_are_classified() {
        let catalog = Catalog::builtin();
        let headset = catalog.find("turtle-beach-headset-white").unwrap();
        assert_eq!(headset.accessory_kind, Some(AccessoryKind::Headsets));
    }
}
