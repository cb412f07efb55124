//! Synchronous per-origin key-value preference store.
//!
//! On wasm targets this wraps `window.localStorage`; elsewhere it falls back to a
//! process-local map so the same round-trip semantics are testable on the host.
//! All values are JSON strings; typed helpers layer `serde` on top.

use serde::{de::DeserializeOwned, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::{cell::RefCell, collections::HashMap};

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static HOST_PREFS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

#[derive(Debug, Clone, Copy, Default)]
/// Preference store handle. Copy-cheap; carries no state of its own.
pub struct PrefsStore;

impl PrefsStore {
    /// Loads a raw JSON string for a preference key.
    pub fn load_json(self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            HOST_PREFS.with(|prefs| prefs.borrow().get(key).cloned())
        }
    }

    /// Saves a raw JSON string for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the write fails.
    pub fn save_json(self, key: &str, raw_json: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .set_item(key, raw_json)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            HOST_PREFS.with(|prefs| {
                prefs
                    .borrow_mut()
                    .insert(key.to_string(), raw_json.to_string());
            });
            Ok(())
        }
    }

    /// Deletes a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the delete fails.
    pub fn delete_json(self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .remove_item(key)
                .map_err(|e| format!("localStorage remove_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            HOST_PREFS.with(|prefs| {
                prefs.borrow_mut().remove(key);
            });
            Ok(())
        }
    }

    /// Loads and deserializes a typed preference value, or `default` when the key is
    /// missing or its payload no longer parses.
    pub fn load_typed_or<T: DeserializeOwned>(self, key: &str, default: T) -> T {
        self.load_typed(key).unwrap_or(default)
    }

    /// Loads and deserializes a typed preference value.
    pub fn load_typed<T: DeserializeOwned>(self, key: &str) -> Option<T> {
        let raw = self.load_json(key)?;
        serde_json::from_str(&raw).ok()
    }

    /// Serializes and saves a typed preference value.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the backing write fails.
    pub fn save_typed<T: Serialize>(self, key: &str, value: &T) -> Result<(), String> {
        let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
        self.save_json(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn typed_round_trip_preserves_value() {
        let store = PrefsStore;
        let value = Sample {
            name: "dock".to_string(),
            count: 7,
        };

        store.save_typed("prefs.test.round_trip", &value).unwrap();
        let loaded: Option<Sample> = store.load_typed("prefs.test.round_trip");

        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn missing_key_yields_default() {
        let store = PrefsStore;
        let loaded: u32 = store.load_typed_or("prefs.test.missing", 42);
        assert_eq!(loaded, 42);
    }

    #[test]
    fn corrupt_payload_yields_default() {
        let store = PrefsStore;
        store.save_json("prefs.test.corrupt", "{not json").unwrap();
        let loaded: Option<Sample> = store.load_typed("prefs.test.corrupt");
        assert_eq!(loaded, None);
    }

    #[test]
    fn delete_removes_key() {
        let store = PrefsStore;
        store.save_typed("prefs.test.delete", &1u32).unwrap();
        store.delete_json("prefs.test.delete").unwrap();
        assert_eq!(store.load_typed::<u32>("prefs.test.delete"), None);
    }
}
