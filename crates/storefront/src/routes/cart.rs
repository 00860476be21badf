//! Cart route handlers.
//!
//! The cart lives in the shopper's session under the same keys the cart
//! store uses for local storage. Each handler loads the store, applies one
//! operation, and writes changed keys back before responding.

use axum::{Json, extract::State};
use game_store_core::{CurrencyCode, ProductId};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use super::{open_store, save_store};
use crate::cart::{CartStore, Notification};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;
use crate::storage::{LocalStorage, SessionStorage};

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub total: String,
    pub currency: CurrencyCode,
}

impl CartView {
    fn new<S: LocalStorage>(store: &CartStore<S>) -> Self {
        Self {
            items: store
                .lines()
                .iter()
                .map(|line| CartItemView {
                    product_id: line.product.id.to_string(),
                    name: line.product.name.clone(),
                    image: line.product.image.clone(),
                    quantity: line.quantity,
                    price: store.formatted_price(line.product.price),
                    line_price: store.formatted_price(line.line_total()),
                })
                .collect(),
            item_count: store.item_count(),
            total: store.formatted_total(),
            currency: store.currency(),
        }
    }
}

/// Response to a cart mutation: the updated cart plus shopper notifications.
#[derive(Debug, Clone, Serialize)]
pub struct CartUpdateView {
    pub cart: CartView,
    pub notifications: Vec<Notification>,
}

/// Cart badge count.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CartCountView {
    pub count: u32,
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
}

/// Update quantity request body. Quantities below one remove the line.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: String,
    pub quantity: i64,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: String,
}

/// Show the cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let store = open_store(&session).await?;
    Ok(Json(CartView::new(&store)))
}

/// Cart count for the header badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<CartCountView>> {
    let store = open_store(&session).await?;
    Ok(Json(CartCountView {
        count: store.item_count(),
    }))
}

/// Add one unit of a catalog product.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartUpdateView>> {
    let product = state
        .catalog()
        .find(&request.product_id)
        .ok_or_else(|| AppError::NotFound(format!("Product {}", request.product_id)))?;

    let mut store = open_store(&session).await?;
    store.add_to_cart(product)?;
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product_id", product.id.as_str())]),
    );
    respond(store, &session).await
}

/// Set a line's quantity.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(request): Json<UpdateCartRequest>,
) -> Result<Json<CartUpdateView>> {
    let mut store = open_store(&session).await?;
    store.update_cart_item_quantity(&ProductId::new(request.product_id), request.quantity)?;
    respond(store, &session).await
}

/// Remove a line.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(request): Json<RemoveFromCartRequest>,
) -> Result<Json<CartUpdateView>> {
    let mut store = open_store(&session).await?;
    store.remove_from_cart(&ProductId::new(request.product_id))?;
    respond(store, &session).await
}

async fn respond(
    mut store: CartStore<SessionStorage>,
    session: &Session,
) -> Result<Json<CartUpdateView>> {
    let view = CartUpdateView {
        cart: CartView::new(&store),
        notifications: store.take_notifications(),
    };
    save_store(store, session).await?;
    Ok(Json(view))
}
