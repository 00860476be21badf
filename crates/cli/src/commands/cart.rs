//! Cart commands against the local storage file.
//!
//! # Usage
//!
//! ```bash
//! gs-cli cart add ps5console
//! gs-cli cart set ps5console 3
//! gs-cli cart remove ps5console
//! gs-cli cart show
//! ```

use std::fmt::Write as _;

use game_store_core::ProductId;
use game_store_storefront::cart::CartStore;
use game_store_storefront::catalog::Catalog;
use game_store_storefront::storage::LocalStorage;

use super::CommandError;

/// Render the cart lines and total.
#[must_use]
pub fn show<S: LocalStorage>(store: &CartStore<S>) -> String {
    if store.lines().is_empty() {
        return format!("Your cart is empty. Total: {}\n", store.formatted_total());
    }

    let mut out = String::new();
    for line in store.lines() {
        let _ = writeln!(
            out,
            "{:>3} x {:<40} {:>10}",
            line.quantity,
            line.product.name,
            store.formatted_price(line.line_total())
        );
    }
    let _ = writeln!(
        out,
        "{} item(s), total {}",
        store.item_count(),
        store.formatted_total()
    );
    out
}

/// Add one unit of a catalog product.
///
/// # Errors
///
/// Returns an error if the product is unknown or storage cannot be written.
pub fn add<S: LocalStorage>(
    store: &mut CartStore<S>,
    catalog: &Catalog,
    id: &str,
) -> Result<String, CommandError> {
    let product = catalog
        .find(id)
        .ok_or_else(|| CommandError::ProductNotFound(id.to_owned()))?;
    store.add_to_cart(product)?;
    Ok(with_notifications(store))
}

/// Remove a product's line. Unknown ids leave the cart unchanged.
///
/// # Errors
///
/// Returns an error if storage cannot be written.
pub fn remove<S: LocalStorage>(store: &mut CartStore<S>, id: &str) -> Result<String, CommandError> {
    store.remove_from_cart(&ProductId::new(id))?;
    Ok(with_notifications(store))
}

/// Set a line's quantity; zero or less removes it.
///
/// # Errors
///
/// Returns an error if storage cannot be written.
pub fn set<S: LocalStorage>(
    store: &mut CartStore<S>,
    id: &str,
    quantity: i64,
) -> Result<String, CommandError> {
    store.update_cart_item_quantity(&ProductId::new(id), quantity)?;
    Ok(with_notifications(store))
}

fn with_notifications<S: LocalStorage>(store: &mut CartStore<S>) -> String {
    let mut out = String::new();
    for notification in store.take_notifications() {
        let _ = writeln!(out, "{}", notification.message);
    }
    out.push_str(&show(store));
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use game_store_core::CurrencyCode;
    use game_store_storefront::storage::MemoryStorage;

    use super::*;

    #[test]
    fn test_add_set_remove() {
        let catalog = Catalog::builtin();
        let mut store = CartStore::open(MemoryStorage::new());

        let out = add(&mut store, &catalog, "ps5console").unwrap();
        assert!(out.starts_with("PlayStation 5 Console added to your cart\n"));
        assert!(out.ends_with("1 item(s), total $499.99\n"));

        let out = add(&mut store, &catalog, "ps5console").unwrap();
        assert!(out.starts_with("Added another PlayStation 5 Console to your cart\n"));

        let out = set(&mut store, "ps5console", 3).unwrap();
        assert!(out.ends_with("3 item(s), total $1499.97\n"));

        let out = remove(&mut store, "ps5console").unwrap();
        assert!(out.starts_with("PlayStation 5 Console removed from cart\n"));
        assert!(store.lines().is_empty());
    }

    #[test]
    fn test_set_zero_removes() {
        let catalog = Catalog::builtin();
        let mut store = CartStore::open(MemoryStorage::new());
        add(&mut store, &catalog, "civ7").unwrap();

        set(&mut store, "civ7", 0).unwrap();
        assert!(store.lines().is_empty());
    }

    #[test]
    fn test_show_in_active_currency() {
        let catalog = Catalog::builtin();
        let mut store = CartStore::open(MemoryStorage::new());
        add(&mut store, &catalog, "ps5console").unwrap();
        store.set_currency(CurrencyCode::GBP).unwrap();

        assert!(show(&store).ends_with("total £394.99\n"));
    }

    #[test]
    fn test_add_unknown_product() {
        let catalog = Catalog::builtin();
        let mut store = CartStore::open(MemoryStorage::new());
        let err = add(&mut store, &catalog, "dreamcast").unwrap_err();
        assert!(matches!(err, CommandError::ProductNotFound(_)));
        assert!(store.lines().is_empty());
    }
}
