mod local_storage;
mod storefront;
mod ui;

pub use local_storage::LocalStorage;
pub use storefront::{ProductCatalog, StockLookup};
pub use ui::{Navigator, Notifier};
