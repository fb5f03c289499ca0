//! Storefront API port definitions.

use crate::domain::{AppError, Product, ProductId, Stock};

/// Port for reading available stock per product.
pub trait StockLookup {
    /// Fetch the current stock snapshot. Never cached by callers.
    fn stock(&self, id: ProductId) -> Result<Stock, AppError>;
}

/// Port for reading product metadata.
pub trait ProductCatalog {
    fn product(&self, id: ProductId) -> Result<Product, AppError>;
}
