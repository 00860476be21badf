//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /products               - Product listing (platform, categories, price range)
//! GET  /products/{id}          - Product detail
//! GET  /platforms/{platform}   - Platform page with its default filters
//! GET  /accessories            - Accessories page (kinds, price range)
//!
//! # Cart
//! GET  /cart                   - Cart contents and total
//! GET  /cart/count             - Cart badge count
//! POST /cart/add               - Add one unit of a product
//! POST /cart/update            - Set a line's quantity (< 1 removes)
//! POST /cart/remove            - Remove a line
//!
//! # Currency
//! GET  /currency               - Active currency
//! POST /currency               - Switch currency
//! ```

pub mod accessories;
pub mod cart;
pub mod currency;
pub mod platforms;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use game_store_core::{CurrencyCode, Product};
use rust_decimal::Decimal;
use serde::Serialize;
use tower_sessions::Session;

use crate::cart::CartStore;
use crate::display::{self, DiscountBadge};
use crate::error::Result;
use crate::state::AppState;
use crate::storage::SessionStorage;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all storefront routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .route("/platforms/{platform}", get(platforms::show))
        .route("/accessories", get(accessories::index))
        .nest("/cart", cart_routes())
        .route("/currency", get(currency::show).post(currency::update))
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the shopper's cart store from their session.
pub(crate) async fn open_store(session: &Session) -> Result<CartStore<SessionStorage>> {
    let storage = SessionStorage::load(session).await?;
    Ok(CartStore::open(storage))
}

/// Write any storage keys the store changed back to the session.
pub(crate) async fn save_store(store: CartStore<SessionStorage>, session: &Session) -> Result<()> {
    let storage = store.into_storage();
    if storage.is_dirty() {
        storage.flush(session).await?;
    }
    Ok(())
}

// =============================================================================
// Shared Views
// =============================================================================

/// Product card data, with prices formatted in the active currency.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub base_price: Decimal,
    pub category: String,
    pub platform: String,
    pub image: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory_kind: Option<String>,
    pub rating: f64,
    pub discount_badge: Option<DiscountBadge>,
    pub compare_at_price: Option<String>,
    pub on_sale: bool,
}

impl ProductView {
    #[must_use]
    pub fn new(product: &Product, currency: CurrencyCode) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.formatted_price(currency),
            base_price: product.price,
            category: product.category.to_string(),
            platform: product.platform.to_string(),
            image: product.image.clone(),
            description: product.description_or_default().to_string(),
            accessory_kind: product.accessory_kind.map(|kind| kind.label().to_string()),
            rating: display::rating(product),
            discount_badge: display::discount_badge(product),
            compare_at_price: display::compare_at_price(product)
                .map(|amount| currency.format(amount)),
            on_sale: display::on_sale(product),
        }
    }
}

/// A filtered product listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListView {
    pub currency: CurrencyCode,
    pub count: usize,
    pub products: Vec<ProductView>,
}

impl ProductListView {
    #[must_use]
    pub fn new(products: &[&Product], currency: CurrencyCode) -> Self {
        Self {
            currency,
            count: products.len(),
            products: products
                .iter()
                .map(|product| ProductView::new(product, currency))
                .collect(),
        }
    }
}

/// Parse a comma-separated query value, ignoring blank entries.
pub(crate) fn parse_list<T>(raw: Option<&str>) -> std::result::Result<Option<Vec<T>>, String>
where
    T: std::str::FromStr<Err = String>,
{
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use game_store_core::{AccessoryKind, Category};

    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list::<Category>(None), Ok(None));
        assert_eq!(
            parse_list::<Category>(Some("games, digital,")),
            Ok(Some(vec![Category::Games, Category::Digital]))
        );
        assert!(parse_list::<Category>(Some("games,toys")).is_err());
        assert_eq!(
            parse_list::<AccessoryKind>(Some("Gaming Desks")),
            Ok(Some(vec![AccessoryKind::GamingDesks]))
        );
    }

    #[test]
    fn test_product_view_formats_in_currency() {
        let catalog = Catalog::builtin();
        let ps5 = catalog.find("ps5console").unwrap();
        let view = ProductView::new(ps5, CurrencyCode::GBP);
        assert_eq!(view.price, "£394.99");
        assert_eq!(view.discount_badge, Some(DiscountBadge::Half));
        assert!(view.accessory_kind.is_none());
    }
}
