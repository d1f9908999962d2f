use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::BoardError;

/// Durable string key-value storage scoped to the app origin.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), BoardError>;
}

/// `window.localStorage`.
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    pub fn open() -> Result<Self, BoardError> {
        let window = web_sys::window()
            .ok_or_else(|| BoardError::Unavailable("window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| BoardError::from_js("localStorage", &e))?
            .ok_or_else(|| BoardError::Unavailable("localStorage".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), BoardError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| BoardError::from_js(&format!("setItem({})", key), &e))
    }
}

/// In-memory store used when localStorage is unavailable, and in tests.
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), BoardError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Opens localStorage, degrading to a session-only memory store.
pub fn open_store() -> Box<dyn KeyValueStore> {
    match LocalStorageStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("falling back to in-memory store: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_last_writer_wins() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k"), None);
        store.set_item("k", "1.0.0").unwrap();
        store.set_item("k", "2.0.0").unwrap();
        assert_eq!(store.get_item("k").as_deref(), Some("2.0.0"));
    }

    #[test]
    fn seeded_memory_store_returns_item() {
        let store = MemoryStore::with_item("marker", "2.0.0");
        assert_eq!(store.get_item("marker").as_deref(), Some("2.0.0"));
        assert_eq!(store.get_item("other"), None);
    }
}
