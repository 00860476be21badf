//! CLI command implementations.
//!
//! Commands render their output to a `String`; `main` decides where it goes.

pub mod cart;
pub mod catalog;
pub mod currency;

use game_store_storefront::storage::StorageError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Local storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// No catalog product has this id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// An argument parsed but is not acceptable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
