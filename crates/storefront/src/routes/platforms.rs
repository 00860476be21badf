//! Platform landing pages.
//!
//! Each platform page starts from its own default filter; query parameters
//! narrow the category set or move the price bounds. An unrecognized
//! platform name yields an empty listing rather than an error.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use game_store_core::{Category, Platform};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{ProductListView, open_store, parse_list};
use crate::catalog::ProductFilter;
use crate::error::{AppError, Result};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PlatformQuery {
    pub categories: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

/// Platform listing with page defaults.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(platform): Path<String>,
    Query(query): Query<PlatformQuery>,
) -> Result<Json<ProductListView>> {
    let currency = open_store(&session).await?.currency();

    let Ok(platform) = platform.parse::<Platform>() else {
        tracing::debug!(%platform, "Unknown platform page");
        return Ok(Json(ProductListView::new(&[], currency)));
    };

    let mut filter = ProductFilter::platform_page(platform);
    if let Some(categories) =
        parse_list::<Category>(query.categories.as_deref()).map_err(AppError::BadRequest)?
    {
        filter = filter.with_categories(categories);
    }
    let price = filter.price.with_overrides(query.min_price, query.max_price);
    let filter = filter.with_price(price);

    let products = state.catalog().filter(&filter);
    Ok(Json(ProductListView::new(&products, currency)))
}
