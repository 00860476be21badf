//! Accessories page: filter by accessory kind and price.

use axum::{
    Json,
    extract::{Query, State},
};
use game_store_core::AccessoryKind;
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{ProductListView, open_store, parse_list};
use crate::catalog::AccessoryFilter;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// `kinds` is comma-separated slugs or labels (`gaming_desks`, `Gaming Desks`).
#[derive(Debug, Default, Deserialize)]
pub struct AccessoryQuery {
    pub kinds: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

/// Accessories listing.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AccessoryQuery>,
) -> Result<Json<ProductListView>> {
    let mut filter = AccessoryFilter::default();
    if let Some(kinds) =
        parse_list::<AccessoryKind>(query.kinds.as_deref()).map_err(AppError::BadRequest)?
    {
        filter.kinds = kinds.into_iter().collect();
    }
    filter.price = filter.price.with_overrides(query.min_price, query.max_price);

    let currency = open_store(&session).await?.currency();
    let products = filter.apply(state.catalog().all());
    Ok(Json(ProductListView::new(&products, currency)))
}
