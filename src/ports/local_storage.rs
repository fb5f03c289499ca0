use crate::domain::AppError;

/// Port for a string key/value store with browser `localStorage` semantics.
pub trait LocalStorage {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Overwrite the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
}
