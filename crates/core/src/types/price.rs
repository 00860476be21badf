//! Currency conversion and price formatting.
//!
//! Catalog prices are stored in the base currency (USD). Display currencies
//! are a fixed table of three codes with static rates; nothing is fetched at
//! runtime, so conversion is a pure function of its inputs.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CurrencyCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported currency: {0}")]
pub struct ParseCurrencyError(pub String);

/// Supported display currencies.
///
/// Serialized as the ISO 4217 code (`"USD"`, `"GBP"`, `"EUR"`), which is also
/// the value persisted under the `currency` storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    GBP,
    EUR,
}

impl CurrencyCode {
    /// Every supported currency, in switcher order.
    pub const ALL: [Self; 3] = [Self::USD, Self::GBP, Self::EUR];

    /// Conversion rate from the base currency (USD).
    #[must_use]
    pub fn rate(self) -> Decimal {
        match self {
            Self::USD => Decimal::ONE,
            Self::GBP => Decimal::new(79, 2),
            Self::EUR => Decimal::new(92, 2),
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::GBP => "£",
            Self::EUR => "€",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::GBP => "GBP",
            Self::EUR => "EUR",
        }
    }

    /// Convert a base-currency amount into this currency, unrounded.
    ///
    /// Saturates at the decimal bounds instead of overflowing.
    #[must_use]
    pub fn convert(self, base_amount: Decimal) -> Decimal {
        base_amount.checked_mul(self.rate()).unwrap_or_else(|| {
            if base_amount.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        })
    }

    /// Convert and format a base-currency amount, e.g. `£394.99`.
    #[must_use]
    pub fn format(self, base_amount: Decimal) -> String {
        format_price(base_amount, self)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "USD" => Ok(Self::USD),
            "GBP" => Ok(Self::GBP),
            "EUR" => Ok(Self::EUR),
            other => Err(ParseCurrencyError(other.to_string())),
        }
    }
}

/// Format a base-currency amount for display in `currency`.
///
/// Converts with the static rate, rounds to two decimal places (midpoint away
/// from zero) and always prints two decimals.
///
/// ```
/// use game_store_core::{CurrencyCode, format_price};
/// use rust_decimal::Decimal;
///
/// let price = Decimal::new(49999, 2);
/// assert_eq!(format_price(price, CurrencyCode::USD), "$499.99");
/// assert_eq!(format_price(price, CurrencyCode::GBP), "£394.99");
/// ```
#[must_use]
pub fn format_price(base_amount: Decimal, currency: CurrencyCode) -> String {
    let converted = currency
        .convert(base_amount)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{converted:.2}", currency.symbol())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_rates() {
        assert_eq!(CurrencyCode::USD.rate(), dec!(1));
        assert_eq!(CurrencyCode::GBP.rate(), dec!(0.79));
        assert_eq!(CurrencyCode::EUR.rate(), dec!(0.92));
    }

    #[test]
    fn test_format_rounds_to_two_places() {
        assert_eq!(format_price(dec!(499.99), CurrencyCode::GBP), "£394.99");
        assert_eq!(format_price(dec!(999.98), CurrencyCode::GBP), "£789.98");
        assert_eq!(format_price(dec!(499.99), CurrencyCode::EUR), "€459.99");
    }

    #[test]
    fn test_format_pads_decimals() {
        assert_eq!(format_price(dec!(30), CurrencyCode::USD), "$30.00");
        assert_eq!(format_price(dec!(0), CurrencyCode::EUR), "€0.00");
        assert_eq!(format_price(dec!(9.5), CurrencyCode::USD), "$9.50");
    }

    #[test]
    fn test_parse_round_trip() {
        for currency in CurrencyCode::ALL {
            assert_eq!(currency.code().parse::<CurrencyCode>(), Ok(currency));
        }
        assert!("JPY".parse::<CurrencyCode>().is_err());
        assert!("usd".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(
            serde_json::to_string(&CurrencyCode::GBP).unwrap(),
            "\"GBP\""
        );
    }
}
