//! Game Store Core - Shared types library.
//!
//! This crate provides common types used across all Game Store components:
//! - `storefront` - Catalog, cart store, and the JSON storefront service
//! - `cli` - Command-line tools for browsing the catalog and driving a cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! storage access, no HTTP. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product records, currency conversion, and the cart collection

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
