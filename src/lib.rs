//! rocketcart: shopping-cart state for the RocketShoes storefront.
//!
//! The cart lives in a [`CartStore`] that validates every mutation against the
//! storefront's stock endpoint and mirrors its state into local storage.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CartSummary, WorkspaceContext, add, add_at, clear, clear_at, open_at, remove, remove_at, show,
    show_at, update_amount, update_amount_at,
};
pub use app::{AppContext, CartStore};
pub use domain::{AppError, Cart, CartError, CartErrorKind, LineItem, Product, ProductId, Stock};
