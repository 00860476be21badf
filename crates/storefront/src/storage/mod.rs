//! Synchronous string key/value storage, modeled on browser local storage.
//!
//! The cart store persists through the [`LocalStorage`] trait so the same
//! logic runs against an in-memory map (tests), a JSON file (the CLI), or a
//! snapshot of the shopper's HTTP session (the storefront service).

mod file;
mod memory;
mod session;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use session::SessionStorage;

/// Storage key holding the serialized cart.
pub const CART_KEY: &str = "cart";

/// Storage key holding the selected currency code.
pub const CURRENCY_KEY: &str = "currency";

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored items could not be encoded.
    #[error("storage JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A synchronous string key/value store.
pub trait LocalStorage {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: LocalStorage + ?Sized> LocalStorage for &mut S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
