//! The shopping cart collection.
//!
//! A [`Cart`] is an ordered list of [`CartLine`]s with at most one line per
//! product id. Lines keep their insertion position for display; quantity
//! changes never reorder them.
//!
//! The cart itself knows nothing about storage or display currency. The
//! storefront's cart store wraps it with persistence and notifications.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// Invariant violations found when rebuilding a cart from stored lines.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// A line carries a quantity below one.
    #[error("cart line for {0} has zero quantity")]
    ZeroQuantity(ProductId),
    /// Two lines reference the same product.
    #[error("cart contains duplicate lines for {0}")]
    DuplicateLine(ProductId),
    /// A line's product carries a price below zero.
    #[error("cart line for {0} has a negative price")]
    NegativePrice(ProductId),
    /// The cart total does not fit in a decimal.
    #[error("cart total overflows at the line for {0}")]
    TotalOverflow(ProductId),
}

/// A product snapshot and how many of it are in the cart.
///
/// Serialized as `{"product": {...}, "quantity": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Base-currency price of the whole line, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.checked_line_total().unwrap_or(Decimal::MAX)
    }

    fn checked_line_total(&self) -> Option<Decimal> {
        self.product.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Ordered cart lines, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuild a cart from previously stored lines.
    ///
    /// # Errors
    ///
    /// Returns an error if any line has a zero quantity or a negative price,
    /// if two lines share a product id, or if the total overflows.
    pub fn from_lines(lines: Vec<CartLine>) -> Result<Self, CartError> {
        let mut total = Decimal::ZERO;
        for (index, line) in lines.iter().enumerate() {
            if line.quantity == 0 {
                return Err(CartError::ZeroQuantity(line.product.id.clone()));
            }
            if line.product.price < Decimal::ZERO {
                return Err(CartError::NegativePrice(line.product.id.clone()));
            }
            total = line
                .checked_line_total()
                .and_then(|line_total| total.checked_add(line_total))
                .ok_or_else(|| CartError::TotalOverflow(line.product.id.clone()))?;
            let duplicated = lines
                .iter()
                .take(index)
                .any(|earlier| earlier.product.id == line.product.id);
            if duplicated {
                return Err(CartError::DuplicateLine(line.product.id.clone()));
            }
        }
        Ok(Self { lines })
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product.id == id)
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line or appends a new one with quantity 1.
    /// Returns `true` when a new line was appended.
    pub fn add(&mut self, product: &Product) -> bool {
        if let Some(line) = self.line_mut(&product.id) {
            line.quantity = line.quantity.saturating_add(1);
            false
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
            true
        }
    }

    /// Remove the line for `id`, returning it if it existed.
    pub fn remove(&mut self, id: &ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| &line.product.id == id)?;
        Some(self.lines.remove(index))
    }

    /// Set the quantity of an existing line in place.
    ///
    /// Returns `false` if there is no line for `id`. A zero quantity is
    /// rejected the same way; callers turn it into a removal.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        match self.line_mut(id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Sum of `price x quantity` in the base currency, saturating at
    /// `Decimal::MAX`.
    #[must_use]
    pub fn base_total(&self) -> Decimal {
        self.lines.iter().fold(Decimal::ZERO, |total, line| {
            total
                .checked_add(line.line_total())
                .unwrap_or(Decimal::MAX)
        })
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{Category, Platform};

    fn product(id: &str, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price,
            category: Category::Games,
            platform: Platform::Xbox,
            image: format!("/images/{id}.png"),
            description: None,
            accessory_kind: None,
        }
    }

    #[test]
    fn test_add_twice_merges_lines() {
        let mut cart = Cart::new();
        let game = product("lords", dec!(9.99));

        assert!(cart.add(&game));
        assert!(!cart.add(&game));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&game.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product("b", dec!(1)));
        cart.add(&product("a", dec!(1)));
        cart.add(&product("b", dec!(1)));

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_set_quantity_keeps_position() {
        let mut cart = Cart::new();
        cart.add(&product("a", dec!(1)));
        cart.add(&product("b", dec!(1)));

        assert!(cart.set_quantity(&ProductId::new("a"), 7));
        assert_eq!(cart.lines()[0].quantity, 7);
        assert_eq!(cart.len(), 2);

        assert!(!cart.set_quantity(&ProductId::new("missing"), 3));
        assert!(!cart.set_quantity(&ProductId::new("a"), 0));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product("a", dec!(1)));
        assert!(cart.remove(&ProductId::new("zzz")).is_none());
        assert_eq!(cart.len(), 1);
        assert!(cart.remove(&ProductId::new("a")).is_some());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        let console = product("ps5console", dec!(499.99));
        let game = product("lords", dec!(9.99));
        cart.add(&console);
        cart.add(&console);
        cart.add(&game);

        assert_eq!(cart.base_total(), dec!(1009.97));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_from_lines_rejects_invariant_violations() {
        let line = CartLine {
            product: product("a", dec!(1)),
            quantity: 1,
        };
        let zero = CartLine {
            product: product("b", dec!(1)),
            quantity: 0,
        };

        assert_eq!(
            Cart::from_lines(vec![line.clone(), line.clone()]),
            Err(CartError::DuplicateLine(ProductId::new("a")))
        );
        assert_eq!(
            Cart::from_lines(vec![zero]),
            Err(CartError::ZeroQuantity(ProductId::new("b")))
        );
        assert_eq!(Cart::from_lines(vec![line]).unwrap().len(), 1);
    }

    #[test]
    fn test_from_lines_rejects_bad_prices() {
        let negative = CartLine {
            product: product("refund", dec!(-5)),
            quantity: 1,
        };
        let huge = CartLine {
            product: product("gold", Decimal::MAX),
            quantity: 2,
        };

        assert_eq!(
            Cart::from_lines(vec![negative]),
            Err(CartError::NegativePrice(ProductId::new("refund")))
        );
        assert_eq!(
            Cart::from_lines(vec![huge]),
            Err(CartError::TotalOverflow(ProductId::new("gold")))
        );
    }

    #[test]
    fn test_totals_saturate() {
        let mut cart = Cart::new();
        let gold = product("gold", Decimal::MAX);
        cart.add(&gold);
        cart.add(&product("lords", dec!(9.99)));
        cart.set_quantity(&gold.id, u32::MAX);

        assert_eq!(cart.lines()[0].line_total(), Decimal::MAX);
        assert_eq!(cart.base_total(), Decimal::MAX);
    }

    #[test]
    fn test_serializes_as_array_of_lines() {
        let mut cart = Cart::new();
        cart.add(&product("a", dec!(2.50)));
        let json: serde_json::Value = serde_json::to_value(&cart).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["quantity"], 1);
        assert_eq!(json[0]["product"]["id"], "a");
    }
}
