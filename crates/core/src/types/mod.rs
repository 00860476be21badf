//! Core types for Game Store.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod category;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{Cart, CartError, CartLine};
pub use category::*;
pub use id::ProductId;
pub use price::{CurrencyCode, ParseCurrencyError, format_price};
pub use product::Product;
