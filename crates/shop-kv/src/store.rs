//! Key-value store wrapper with automatic serialization.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::{Arc, Mutex, OnceLock};

/// Shared backing maps for native builds, keyed by store name. Reopening a
/// store by name attaches to the same map, matching the platform store's
/// behavior within a process.
#[cfg(not(target_arch = "wasm32"))]
type SharedMap = Arc<Mutex<HashMap<String, Vec<u8>>>>;

#[cfg(not(target_arch = "wasm32"))]
fn registry() -> &'static Mutex<HashMap<String, SharedMap>> {
    static REGISTRY: OnceLock<Mutex<HashMap<String, SharedMap>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Type-safe key-value store.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Backed by Spin's Key-Value Store on
/// `wasm32`; native builds use an in-process map (development/testing).
pub struct Store {
    #[cfg(target_arch = "wasm32")]
    store: spin_sdk::key_value::Store,
    #[cfg(not(target_arch = "wasm32"))]
    entries: SharedMap,
}

impl Store {
    /// Open the default store.
    #[cfg(target_arch = "wasm32")]
    pub fn open_default() -> Result<Self, StoreError> {
        let store = spin_sdk::key_value::Store::open_default()
            .map_err(|e| StoreError::Open(e.to_string()))?;
        Ok(Self { store })
    }

    /// Open a named store.
    #[cfg(target_arch = "wasm32")]
    pub fn open(name: &str) -> Result<Self, StoreError> {
        let store = spin_sdk::key_value::Store::open(name)
            .map_err(|e| StoreError::Open(e.to_string()))?;
        Ok(Self { store })
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    #[cfg(target_arch = "wasm32")]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(key) {
            Ok(Some(bytes)) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }

    /// Set a value in the store, replacing any prior value.
    #[cfg(target_arch = "wasm32")]
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.store
            .set(key, &bytes)
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    /// Delete a value from the store.
    #[cfg(target_arch = "wasm32")]
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store
            .delete(key)
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    /// Check if a key exists in the store.
    #[cfg(target_arch = "wasm32")]
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.store
            .exists(key)
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    // Native implementation over the shared in-process map.

    #[cfg(not(target_arch = "wasm32"))]
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open("default")
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn open(name: &str) -> Result<Self, StoreError> {
        let mut registry = registry()
            .lock()
            .map_err(|_| StoreError::Open("store registry poisoned".to_string()))?;
        let entries = registry.entry(name.to_string()).or_default().clone();
        Ok(Self { entries })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store poisoned".to_string()))?;
        match entries.get(key) {
            Some(bytes) => {
                let value: T = serde_json::from_slice(bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store poisoned".to_string()))?;
        entries.insert(key.to_string(), bytes);
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store poisoned".to_string()))?;
        Ok(entries.contains_key(key))
    }
}
