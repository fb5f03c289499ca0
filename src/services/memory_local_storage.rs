use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::LocalStorage;

/// In-memory `localStorage` for tests and embedding.
///
/// Clones share the same entries, so a test can keep a handle while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocalStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryLocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.entries.lock().map_err(|_| AppError::config_error("local storage lock poisoned"))
    }
}

impl LocalStorage for MemoryLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
