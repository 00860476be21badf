//! Shopper-facing cart notifications (toasts).

use chrono::{DateTime, Utc};
use game_store_core::{Product, ProductId};
use serde::Serialize;

/// What happened to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Added,
    Incremented,
    Removed,
}

/// A message for the shopper naming the affected product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub product_id: ProductId,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub(crate) fn new(kind: NotificationKind, product: &Product) -> Self {
        let name = &product.name;
        let message = match kind {
            NotificationKind::Added => format!("{name} added to your cart"),
            NotificationKind::Incremented => format!("Added another {name} to your cart"),
            NotificationKind::Removed => format!("{name} removed from cart"),
        };
        Self {
            kind,
            product_id: product.id.clone(),
            message,
            created_at: Utc::now(),
        }
    }
}
