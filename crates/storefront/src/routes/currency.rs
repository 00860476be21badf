//! Currency selection handlers.

use axum::Json;
use game_store_core::CurrencyCode;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use super::{open_store, save_store};
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct CurrencyView {
    pub currency: CurrencyCode,
    pub symbol: &'static str,
    pub available: [CurrencyCode; 3],
}

impl From<CurrencyCode> for CurrencyView {
    fn from(currency: CurrencyCode) -> Self {
        Self {
            currency,
            symbol: currency.symbol(),
            available: CurrencyCode::ALL,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetCurrencyRequest {
    pub currency: String,
}

/// Active currency.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CurrencyView>> {
    let store = open_store(&session).await?;
    Ok(Json(store.currency().into()))
}

/// Switch the active currency.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(request): Json<SetCurrencyRequest>,
) -> Result<Json<CurrencyView>> {
    let currency = request
        .currency
        .parse::<CurrencyCode>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut store = open_store(&session).await?;
    store.set_currency(currency)?;
    save_store(store, &session).await?;
    Ok(Json(currency.into()))
}
