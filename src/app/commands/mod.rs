pub mod add;
pub mod clear;
pub mod remove;
pub mod show;
pub mod update;

use serde::Serialize;

use crate::domain::{AppError, Cart, CartError, LineItem, Notice};
use crate::ports::Notifier;

/// Snapshot of the cart returned by every command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub items: Vec<LineItem>,
    /// Distinct products.
    pub products: usize,
    pub units: u64,
    pub total: f64,
}

impl CartSummary {
    pub fn of(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            products: cart.len(),
            units: cart.units(),
            total: cart.total(),
        }
    }
}

/// Surface a rejected mutation on the notification channel and hand it back as an error.
fn reject(ui: &impl Notifier, err: CartError) -> AppError {
    tracing::debug!(kind = ?err.kind(), error = %err, "cart mutation rejected");
    ui.notify(&Notice::from(&err));
    AppError::Cart(err)
}
