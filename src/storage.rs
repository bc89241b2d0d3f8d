//! Persistent key/value storage for the access token

use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage write failed: {0}")]
    Write(String),
}

pub trait TokenStore {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserStorage {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn load(&self, key: &str) -> Option<String> {
        self.storage().ok()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-process storage used by the desktop build
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStorage {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?
            .remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub fn token_store() -> &'static BrowserStorage {
    static STORE: BrowserStorage = BrowserStorage;
    &STORE
}

#[cfg(not(target_arch = "wasm32"))]
pub fn token_store() -> &'static MemoryStorage {
    static STORE: std::sync::OnceLock<MemoryStorage> = std::sync::OnceLock::new();
    STORE.get_or_init(MemoryStorage::new)
}
