//! Display currency commands.

use game_store_core::CurrencyCode;
use game_store_storefront::cart::CartStore;
use game_store_storefront::storage::LocalStorage;

use super::CommandError;

#[must_use]
pub fn show<S: LocalStorage>(store: &CartStore<S>) -> String {
    let currency = store.currency();
    format!("{} ({})\n", currency.code(), currency.symbol())
}

/// Switch the display currency.
///
/// # Errors
///
/// Returns an error if the code is not USD, GBP, or EUR, or the preference
/// cannot be saved.
pub fn set<S: LocalStorage>(store: &mut CartStore<S>, code: &str) -> Result<String, CommandError> {
    let currency = code
        .parse::<CurrencyCode>()
        .map_err(|e| CommandError::InvalidArgument(e.to_string()))?;
    store.set_currency(currency)?;
    Ok(format!(
        "Currency set to {}. Cart total: {}\n",
        currency.code(),
        store.formatted_total()
    ))
}
