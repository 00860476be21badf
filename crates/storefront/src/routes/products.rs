//! Product listing and detail route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use game_store_core::{Category, Platform};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{ProductListView, ProductView, open_store, parse_list};
use crate::catalog::{PriceRange, ProductFilter};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for the product listing.
///
/// `categories` is comma-separated; omitting it means every category.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub platform: Option<String>,
    pub categories: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl ProductQuery {
    fn to_filter(&self) -> std::result::Result<ProductFilter, String> {
        let platform = self
            .platform
            .as_deref()
            .map(str::parse::<Platform>)
            .transpose()?;
        let mut filter = ProductFilter {
            platform,
            ..ProductFilter::default()
        };
        if let Some(categories) = parse_list::<Category>(self.categories.as_deref())? {
            filter = filter.with_categories(categories);
        }
        Ok(filter.with_price(PriceRange::default().with_overrides(self.min_price, self.max_price)))
    }
}

/// Product listing.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ProductListView>> {
    let filter = query.to_filter().map_err(AppError::BadRequest)?;
    let currency = open_store(&session).await?.currency();
    let products = state.catalog().filter(&filter);
    tracing::debug!(count = products.len(), "Filtered products");
    Ok(Json(ProductListView::new(&products, currency)))
}

/// Product detail.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Json<ProductView>> {
    let product = state
        .catalog()
        .find(&id)
        .ok_or_else(|| AppError::NotFound(format!("Product {id}")))?;
    let currency = open_store(&session).await?.currency();
    Ok(Json(ProductView::new(product, currency)))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_query_to_filter() {
        let query = ProductQuery {
            platform: Some("xbox".to_string()),
            categories: Some("games".to_string()),
            min_price: None,
            max_price: Some(dec!(60)),
        };
        let filter = query.to_filter().unwrap();
        assert_eq!(filter.platform, Some(Platform::Xbox));
        assert!(filter.categories.unwrap().contains(&Category::Games));
        assert!(filter.price.contains(dec!(60)));
        assert!(!filter.price.contains(dec!(60.01)));
    }

    #[test]
    fn test_query_rejects_unknown_platform() {
        let query = ProductQuery {
            platform: Some("sega".to_string()),
            ..ProductQuery::default()
        };
        assert!(query.to_filter().is_err());
    }
}
