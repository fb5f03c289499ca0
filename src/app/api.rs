//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution against the cart workspace on disk.

use std::path::{Path, PathBuf};

use crate::app::config::{config_dir, load_config};
use crate::app::store::CartStore;
use crate::app::{
    AppContext,
    commands::{add, clear, remove, show, update},
};
use crate::services::{FileLocalStorage, HttpStorefrontClient, TerminalUi};

pub use crate::app::commands::CartSummary;
pub use crate::domain::{AppError, ProductId};

/// Context wired to the real storefront API, file storage, and the terminal.
pub type WorkspaceContext = AppContext<HttpStorefrontClient, FileLocalStorage, TerminalUi>;

/// Create an `AppContext` for the cart workspace rooted at `path`.
pub fn open_at(path: &Path) -> Result<WorkspaceContext, AppError> {
    let config = load_config(path)?;
    let api = HttpStorefrontClient::new(&config.api)?;
    let storage = FileLocalStorage::new(config_dir(path).join(&config.storage.file));
    let store = CartStore::open(api, storage, config.storage.key.clone());
    Ok(AppContext::new(store, TerminalUi, config.navigation.root_url))
}

fn current_root() -> Result<PathBuf, AppError> {
    Ok(std::env::current_dir()?)
}

/// Add one unit of a product to the cart in the current directory.
pub fn add(id: ProductId) -> Result<CartSummary, AppError> {
    add_at(&current_root()?, id)
}

/// Add one unit of a product to the cart at the specified path.
pub fn add_at(path: &Path, id: ProductId) -> Result<CartSummary, AppError> {
    let mut ctx = open_at(path)?;
    add::execute(&mut ctx, id)
}

/// Remove a product from the cart in the current directory.
pub fn remove(id: ProductId) -> Result<CartSummary, AppError> {
    remove_at(&current_root()?, id)
}

/// Remove a product from the cart at the specified path.
pub fn remove_at(path: &Path, id: ProductId) -> Result<CartSummary, AppError> {
    let mut ctx = open_at(path)?;
    remove::execute(&mut ctx, id)
}

/// Set the amount of a product in the cart in the current directory.
pub fn update_amount(id: ProductId, amount: i64) -> Result<CartSummary, AppError> {
    update_amount_at(&current_root()?, id, amount)
}

/// Set the amount of a product in the cart at the specified path.
pub fn update_amount_at(path: &Path, id: ProductId, amount: i64) -> Result<CartSummary, AppError> {
    let mut ctx = open_at(path)?;
    update::execute(&mut ctx, id, amount)
}

/// Empty the cart in the current directory and return to the storefront root.
pub fn clear() -> Result<CartSummary, AppError> {
    clear_at(&current_root()?)
}

/// Empty the cart at the specified path and return to the storefront root.
pub fn clear_at(path: &Path) -> Result<CartSummary, AppError> {
    let mut ctx = open_at(path)?;
    clear::execute(&mut ctx)
}

/// Current contents of the cart in the current directory.
pub fn show() -> Result<CartSummary, AppError> {
    show_at(&current_root()?)
}

/// Current contents of the cart at the specified path.
pub fn show_at(path: &Path) -> Result<CartSummary, AppError> {
    let ctx = open_at(path)?;
    Ok(show::execute(&ctx))
}
