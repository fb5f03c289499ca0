mod file_local_storage;
mod http_storefront;
mod memory_local_storage;
mod terminal_ui;

pub use file_local_storage::FileLocalStorage;
pub use http_storefront::HttpStorefrontClient;
pub use memory_local_storage::MemoryLocalStorage;
pub use terminal_ui::TerminalUi;
