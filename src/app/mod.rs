pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod store;

pub use context::AppContext;
pub use store::CartStore;
