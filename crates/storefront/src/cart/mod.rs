//! The cart store: single owner of the shopper's cart and currency.
//!
//! All cart mutation goes through [`CartStore`]. Every mutation rewrites the
//! full cart snapshot to local storage under [`CART_KEY`]; currency changes
//! are written under [`CURRENCY_KEY`]. Opening a store rehydrates both keys,
//! falling back to an empty cart and USD when a value is absent or malformed.
//!
//! ```
//! use game_store_core::CurrencyCode;
//! use game_store_storefront::cart::CartStore;
//! use game_store_storefront::catalog::Catalog;
//! use game_store_storefront::storage::MemoryStorage;
//!
//! let catalog = Catalog::builtin();
//! let ps5 = catalog.find("ps5console").unwrap();
//!
//! let mut store = CartStore::open(MemoryStorage::new());
//! store.add_to_cart(ps5).unwrap();
//! store.set_currency(CurrencyCode::GBP).unwrap();
//! assert_eq!(store.formatted_total(), "£394.99");
//! ```

mod notification;

use game_store_core::{Cart, CartLine, CurrencyCode, Product, ProductId, format_price};
use rust_decimal::Decimal;

use crate::storage::{CART_KEY, CURRENCY_KEY, LocalStorage, StorageError};

pub use notification::{Notification, NotificationKind};

/// Cart and currency state persisted to a [`LocalStorage`].
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    cart: Cart,
    currency: CurrencyCode,
    notifications: Vec<Notification>,
}

impl<S: LocalStorage> CartStore<S> {
    /// Rehydrate the cart and currency from `storage`.
    ///
    /// Never fails: unreadable or malformed values are logged and discarded.
    pub fn open(storage: S) -> Self {
        let cart = load_cart(&storage);
        let currency = load_currency(&storage);
        tracing::debug!(lines = cart.len(), %currency, "Cart store opened");
        Self {
            storage,
            cart,
            currency,
            notifications: Vec::new(),
        }
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line or appends a new one. The in-memory cart
    /// is updated even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written to storage.
    pub fn add_to_cart(&mut self, product: &Product) -> Result<(), StorageError> {
        let kind = if self.cart.add(product) {
            NotificationKind::Added
        } else {
            NotificationKind::Incremented
        };
        tracing::info!(product_id = %product.id, ?kind, "Cart updated");
        self.notifications.push(Notification::new(kind, product));
        self.persist_cart()
    }

    /// Remove the line for `product_id`; missing ids are a no-op.
    ///
    /// Returns the removed line, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written to storage.
    pub fn remove_from_cart(
        &mut self,
        product_id: &ProductId,
    ) -> Result<Option<CartLine>, StorageError> {
        let removed = self.cart.remove(product_id);
        if let Some(line) = &removed {
            tracing::info!(%product_id, "Removed from cart");
            self.notifications
                .push(Notification::new(NotificationKind::Removed, &line.product));
        }
        self.persist_cart()?;
        Ok(removed)
    }

    /// Set the quantity of a line.
    ///
    /// A quantity below one removes the line exactly like
    /// [`remove_from_cart`](Self::remove_from_cart). Quantities above
    /// `u32::MAX` saturate. Unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written to storage.
    pub fn update_cart_item_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), StorageError> {
        if quantity < 1 {
            self.remove_from_cart(product_id)?;
            return Ok(());
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if self.cart.set_quantity(product_id, quantity) {
            tracing::info!(%product_id, quantity, "Cart quantity changed");
        }
        self.persist_cart()
    }

    /// Cart total converted to the active currency, unrounded.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.currency.convert(self.cart.base_total())
    }

    /// Format a base-currency amount in the active currency.
    #[must_use]
    pub fn formatted_price(&self, base_amount: Decimal) -> String {
        format_price(base_amount, self.currency)
    }

    /// Cart total formatted in the active currency.
    #[must_use]
    pub fn formatted_total(&self) -> String {
        self.formatted_price(self.cart.base_total())
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Switch the display currency and persist the preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be written to storage.
    pub fn set_currency(&mut self, currency: CurrencyCode) -> Result<(), StorageError> {
        self.currency = currency;
        tracing::info!(%currency, "Currency changed");
        self.storage.set_item(CURRENCY_KEY, currency.code())
    }

    /// Drain notifications raised since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Release the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist_cart(&mut self) -> Result<(), StorageError> {
        let snapshot = serde_json::to_string(&self.cart)?;
        self.storage.set_item(CART_KEY, &snapshot)
    }
}

fn load_cart(storage: &impl LocalStorage) -> Cart {
    let raw = match storage.get_item(CART_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read cart from storage");
            return Cart::new();
        }
    };

    let lines = match serde_json::from_str::<Vec<CartLine>>(&raw) {
        Ok(lines) => lines,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse cart from storage");
            return Cart::new();
        }
    };

    Cart::from_lines(lines).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Discarding invalid stored cart");
        Cart::new()
    })
}

fn load_currency(storage: &impl LocalStorage) -> CurrencyCode {
    match storage.get_item(CURRENCY_KEY) {
        Ok(Some(raw)) => raw.parse::<CurrencyCode>().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Discarding stored currency");
            CurrencyCode::default()
        }),
        Ok(None) => CurrencyCode::default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read currency from storage");
            CurrencyCode::default()
        }
    }
}
