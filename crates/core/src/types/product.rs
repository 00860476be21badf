//! Catalog product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AccessoryKind, Category, CurrencyCode, Platform, ProductId, format_price};

/// A catalog product.
///
/// Products are created once from static catalog data and never mutated.
/// The price is always in the base currency (USD); display conversion happens
/// at format time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Base price in USD.
    pub price: Decimal,
    pub category: Category,
    pub platform: Platform,
    /// Image path relative to the static asset root.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Set for every product in [`Category::Accessories`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessory_kind: Option<AccessoryKind>,
}

impl Product {
    /// Fallback copy for products without a description.
    pub const DEFAULT_DESCRIPTION: &'static str =
        "Premium quality product with excellent performance and durability.";

    /// Description, or the storefront's generic copy.
    #[must_use]
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(Self::DEFAULT_DESCRIPTION)
    }

    /// Price formatted in `currency`.
    #[must_use]
    pub fn formatted_price(&self, currency: CurrencyCode) -> String {
        format_price(self.price, currency)
    }
}
