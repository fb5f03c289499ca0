use std::io;

use thiserror::Error;

use super::ProductId;

/// Library-wide error type for rocketcart operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Storefront API request failed (transport, status, or body).
    #[error("Storefront API error: {0}")]
    Api(String),

    /// Product identifier is invalid.
    #[error("Invalid product identifier '{0}': must be a positive integer")]
    InvalidProductId(String),

    /// URL could not be parsed or joined.
    #[error("Invalid URL '{url}': {details}")]
    InvalidUrl { url: String, details: String },

    /// A cart mutation was rejected.
    #[error(transparent)]
    Cart(#[from] CartError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParse(_)
            | AppError::InvalidProductId(_)
            | AppError::InvalidUrl { .. } => io::ErrorKind::InvalidInput,
            AppError::Json(_) => io::ErrorKind::InvalidData,
            AppError::Api(_) => io::ErrorKind::Other,
            AppError::Cart(err) => match err.kind() {
                CartErrorKind::RemoveFailed => io::ErrorKind::NotFound,
                CartErrorKind::OutOfStock
                | CartErrorKind::AddFailed
                | CartErrorKind::UpdateFailed => io::ErrorKind::InvalidInput,
            },
        }
    }
}

/// Discriminant of a rejected cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartErrorKind {
    OutOfStock,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

/// A cart mutation that was abandoned. The cart is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    #[error("Product {product_id} is out of stock (requested {requested}, available {available})")]
    OutOfStock { product_id: ProductId, requested: i64, available: i64 },

    #[error("Failed to add product {product_id}: {reason}")]
    AddFailed { product_id: ProductId, reason: String },

    #[error("Failed to remove product {product_id}: not in cart")]
    RemoveFailed { product_id: ProductId },

    #[error("Failed to update amount of product {product_id}: {reason}")]
    UpdateFailed { product_id: ProductId, reason: String },
}

impl CartError {
    pub fn kind(&self) -> CartErrorKind {
        match self {
            CartError::OutOfStock { .. } => CartErrorKind::OutOfStock,
            CartError::AddFailed { .. } => CartErrorKind::AddFailed,
            CartError::RemoveFailed { .. } => CartErrorKind::RemoveFailed,
            CartError::UpdateFailed { .. } => CartErrorKind::UpdateFailed,
        }
    }

    pub fn product_id(&self) -> ProductId {
        match self {
            CartError::OutOfStock { product_id, .. }
            | CartError::AddFailed { product_id, .. }
            | CartError::RemoveFailed { product_id }
            | CartError::UpdateFailed { product_id, .. } => *product_id,
        }
    }

    /// User-facing text for the notification channel.
    pub fn notice(&self) -> &'static str {
        match self.kind() {
            CartErrorKind::OutOfStock => "Requested quantity is out of stock",
            CartErrorKind::AddFailed => "Failed to add product",
            CartErrorKind::RemoveFailed => "Failed to remove product",
            CartErrorKind::UpdateFailed => "Failed to update product amount",
        }
    }
}
