use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

// ============================================================================
// State Storage - Key/Value Backend for Persisted Slices
// ============================================================================

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("State serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String key/value backend behind the persisted state slices. Implementations
/// must tolerate concurrent calls; values are opaque JSON blobs to the store.
pub trait StateStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend. The default for tests and the demo binary; swap in a
/// real implementation to persist across process restarts.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Backend("storage lock poisoned".to_string()))
    }
}

impl StateStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();

        assert!(storage.get("missing").unwrap().is_none());

        storage.set("cart-storage", "{}".to_string()).unwrap();
        assert_eq!(storage.get("cart-storage").unwrap().as_deref(), Some("{}"));

        storage.set("cart-storage", "{\"v\":1}".to_string()).unwrap();
        assert_eq!(
            storage.get("cart-storage").unwrap().as_deref(),
            Some("{\"v\":1}")
        );

        storage.remove("cart-storage").unwrap();
        assert!(storage.get("cart-storage").unwrap().is_none());
    }
}
