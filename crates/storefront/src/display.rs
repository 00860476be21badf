//! Merchandising badges derived from product data.
//!
//! Star ratings, discount badges and strike-through prices have no backing
//! data; they are derived from a product's name, price and id. Every value
//! here is a pure function of the product, including the rating's random
//! component, which draws from an RNG seeded by the product id.

use game_store_core::{Product, ProductId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

const MIN_RATING: f64 = 3.5;
const MAX_RATING: f64 = 5.0;

/// Discount badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiscountBadge {
    #[serde(rename = "50% OFF")]
    Half,
    #[serde(rename = "30% OFF")]
    Thirty,
    #[serde(rename = "10% OFF")]
    Ten,
}

impl DiscountBadge {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Half => "50% OFF",
            Self::Thirty => "30% OFF",
            Self::Ten => "10% OFF",
        }
    }
}

/// Star rating between 3.5 and 5.0 in half-star steps.
#[must_use]
pub fn rating(product: &Product) -> f64 {
    #[allow(clippy::cast_precision_loss)] // Product names are short
    let name_factor = (product.name.chars().count() as f64 / 20.0).min(1.0);
    let price = product.price.to_f64().unwrap_or_default();
    let price_factor = 1.0 - price / 2000.0;
    let boost = StdRng::seed_from_u64(seed(&product.id)).random_range(0.0..0.5);

    let raw = 3.0 + name_factor * 0.5 + price_factor * 0.5 + boost;
    ((raw * 2.0).round() / 2.0).clamp(MIN_RATING, MAX_RATING)
}

/// Discount badge keyed off the id length, first match wins.
#[must_use]
pub fn discount_badge(product: &Product) -> Option<DiscountBadge> {
    let len = product.id.len();
    if len % 5 == 0 {
        Some(DiscountBadge::Half)
    } else if len % 3 == 0 {
        Some(DiscountBadge::Thirty)
    } else if len % 2 == 0 {
        Some(DiscountBadge::Ten)
    } else {
        None
    }
}

/// Strike-through "was" price (base currency), 30% above the real price.
#[must_use]
pub fn compare_at_price(product: &Product) -> Option<Decimal> {
    (product.id.len() % 4 == 0).then(|| product.price * Decimal::new(13, 1))
}

/// Whether the detail page shows a SALE badge.
#[must_use]
pub fn on_sale(product: &Product) -> bool {
    product.id.len() % 3 == 0
}

/// FNV-1a over the id bytes; stable across builds and platforms.
fn seed(id: &ProductId) -> u64 {
    id.as_str()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
        })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_rating_is_deterministic_and_bounded() {
        for product in Catalog::builtin().all() {
            let first = rating(product);
            assert!((first - rating(product)).abs() < f64::EPSILON);
            assert!((MIN_RATING..=MAX_RATING).contains(&first), "{}", product.id);
            assert!((first * 2.0).fract().abs() < f64::EPSILON, "{}", product.id);
        }
    }

    #[test]
    fn test_discount_badge_precedence() {
        let catalog = Catalog::builtin();
        let badge = |id| discount_badge(catalog.find(id).unwrap());

        assert_eq!(badge("ps5console"), Some(DiscountBadge::Half));
        assert_eq!(badge("topspin25"), Some(DiscountBadge::Thirty));
        assert_eq!(badge("civ7"), Some(DiscountBadge::Ten));
        assert_eq!(badge("ps5slimdisc"), None);
    }

    #[test]
    fn test_compare_at_price() {
        let catalog = Catalog::builtin();
        assert_eq!(
            compare_at_price(catalog.find("civ7").unwrap()),
            Some(dec!(103.337))
        );
        assert_eq!(compare_at_price(catalog.find("lords").unwrap()), None);
    }

    #[test]
    fn test_on_sale() {
        let catalog = Catalog::builtin();
        assert!(on_sale(catalog.find("ps5pro").unwrap()));
        assert!(!on_sale(catalog.find("civ7").unwrap()));
    }

    #[test]
    fn test_seed_differs_per_id() {
        assert_ne!(seed(&ProductId::new("a")), seed(&ProductId::new("b")));
    }
}
