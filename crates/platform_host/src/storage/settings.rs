//! Settings storage contracts and adapters.
//!
//! Values are JSON text stored per key. Reads and writes happen at session boundaries only
//! (boot and explicit settings changes), so the contract is synchronous.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Host service for persisted settings values (JSON stored as text per key).
pub trait SettingsStore {
    /// Loads the raw JSON string stored under `key`.
    fn load_raw(&self, key: &str) -> Result<Option<String>, String>;

    /// Saves a raw JSON string under `key`.
    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), String>;

    /// Deletes `key`.
    fn delete(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op settings store for unsupported targets and baseline tests.
pub struct NoopSettingsStore;

impl SettingsStore for NoopSettingsStore {
    fn load_raw(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_raw(&self, _key: &str, _raw_json: &str) -> Result<(), String> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory settings store keyed by string. Clones share the same map.
pub struct MemorySettingsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySettingsStore {
    /// Returns the raw value under `key` without going through the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed setting through a [`SettingsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub fn load_setting_with<S: SettingsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_raw(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed setting through a [`SettingsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or the store save fails.
pub fn save_setting_with<S: SettingsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_raw(key, &raw)
}
