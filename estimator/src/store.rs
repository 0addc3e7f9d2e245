//! Persistence through a host provided key-value store.
//!
//! Every collection lives under one key as a JSON array and is rewritten
//! whole on each change.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{BoxError, StorageError};

pub const HISTORY_KEY: &str = "estimation_history";
pub const HEALTH_RECORDS_KEY: &str = "healthRecords";
pub const TRAINING_PLANS_KEY: &str = "training_plans";
pub const VBT_HISTORY_KEY: &str = "vbt_history_data";

/// String key-value storage, e.g. the device store of a mobile host.
pub trait KeyValueStore {
    /// Value of `key`, `None` when never written.
    fn get(&self, key: &str) -> Result<Option<String>, BoxError>;

    fn set(&mut self, key: &str, value: String) -> Result<(), BoxError>;
}

/// Store kept in memory, for tests and hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BoxError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), BoxError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Items stored under `key`, empty when the key was never written.
pub fn load_list<S, T>(store: &S, key: &str) -> Result<Vec<T>, StorageError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = store.get(key).map_err(|source| StorageError::Read {
        key: key.to_string(),
        source,
    })?;

    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
        key: key.to_string(),
        source,
    })
}

/// Replace the items stored under `key`.
pub fn save_list<S, T>(store: &mut S, key: &str, items: &[T]) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(items).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;

    store.set(key, raw).map_err(|source| StorageError::Write {
        key: key.to_string(),
        source,
    })?;

    debug!(key, len = items.len(), "stored list");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_empty_list() {
        let store = MemoryStore::new();
        let items: Vec<u32> = load_list(&store, "nothing").unwrap();

        assert!(items.is_empty());
    }

    #[test]
    fn test_list_round_trip() {
        let mut store = MemoryStore::new();
        save_list(&mut store, "numbers", &[1, 2, 3]).unwrap();

        assert_eq!(store.get("numbers").unwrap().as_deref(), Some("[1,2,3]"));
        assert_eq!(load_list::<_, u32>(&store, "numbers").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_corrupt_value_is_decode_error() {
        let mut store = MemoryStore::new();
        store.set("numbers", "{not json".to_string()).unwrap();

        let err = load_list::<_, u32>(&store, "numbers").unwrap_err();
        assert!(matches!(err, StorageError::Decode { ref key, .. } if key == "numbers"));
    }
}
