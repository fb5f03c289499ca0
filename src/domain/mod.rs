pub mod cart;
pub mod configuration;
pub mod error;
pub mod notice;
pub mod product_id;

pub use cart::{Cart, LineItem, Product, Stock};
pub use configuration::{
    API_URL_ENV, ApiConfig, CONFIG_DIR, CONFIG_FILE, CartConfig, NavigationConfig, StorageConfig,
};
pub use error::{AppError, CartError, CartErrorKind};
pub use notice::{Notice, NoticeLevel};
pub use product_id::ProductId;
