use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::storage::{StateStorage, StorageError};

// ============================================================================
// Persist Envelope - Versioned State Blobs
// ============================================================================
//
// Each persisted slice is stored as `{"state": <slice>, "version": 0}` under
// a well-known key. The version gates restoration: a blob written by an
// incompatible schema is discarded rather than half-parsed.
//
// ============================================================================

pub const CART_STORAGE_KEY: &str = "cart-storage";
pub const AUTH_STORAGE_KEY: &str = "auth-storage";

/// Schema version stamped into every blob this build writes.
pub const PERSIST_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct PersistEnvelope<T> {
    state: T,
    version: u32,
}

/// Wrap `state` in the versioned envelope and write it under `key`.
pub fn persist_state<T: Serialize>(
    storage: &dyn StateStorage,
    key: &str,
    state: &T,
) -> Result<(), StorageError> {
    let envelope = PersistEnvelope {
        state,
        version: PERSIST_VERSION,
    };
    let blob = serde_json::to_string(&envelope)?;
    storage.set(key, blob)
}

/// Read and unwrap the blob under `key`. Missing, unreadable, corrupt, and
/// version-mismatched blobs all restore as None; the caller starts fresh.
pub fn restore_state<T: DeserializeOwned>(storage: &dyn StateStorage, key: &str) -> Option<T> {
    let blob = match storage.get(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return None,
        Err(error) => {
            tracing::warn!(key, %error, "Failed to read persisted state");
            return None;
        }
    };

    let envelope: PersistEnvelope<T> = match serde_json::from_str(&blob) {
        Ok(envelope) => envelope,
        Err(error) => {
            tracing::warn!(key, %error, "Discarding corrupt persisted state");
            return None;
        }
    };

    if envelope.version != PERSIST_VERSION {
        tracing::warn!(
            key,
            found_version = envelope.version,
            expected_version = PERSIST_VERSION,
            "Discarding persisted state with unsupported version"
        );
        return None;
    }

    Some(envelope.state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::storage::MemoryStorage;
    use serde_json::Value;

    #[test]
    fn test_blob_wire_format() {
        let storage = MemoryStorage::new();
        persist_state(&storage, "cart-storage", &serde_json::json!({"items": []})).unwrap();

        let blob = storage.get("cart-storage").unwrap().unwrap();
        let value: Value = serde_json::from_str(&blob).unwrap();

        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["items"], serde_json::json!([]));
    }

    #[test]
    fn test_round_trip_restores_state() {
        let storage = MemoryStorage::new();
        persist_state(&storage, "auth-storage", &vec![1u32, 2, 3]).unwrap();

        let restored: Option<Vec<u32>> = restore_state(&storage, "auth-storage");
        assert_eq!(restored, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_missing_key_restores_none() {
        let storage = MemoryStorage::new();
        let restored: Option<Vec<u32>> = restore_state(&storage, "cart-storage");
        assert!(restored.is_none());
    }

    #[test]
    fn test_corrupt_blob_restores_none() {
        let storage = MemoryStorage::new();
        storage
            .set("cart-storage", "not json at all".to_string())
            .unwrap();

        let restored: Option<Vec<u32>> = restore_state(&storage, "cart-storage");
        assert!(restored.is_none());
    }

    #[test]
    fn test_version_mismatch_restores_none() {
        let storage = MemoryStorage::new();
        storage
            .set(
                "cart-storage",
                "{\"state\": [1, 2], \"version\": 99}".to_string(),
            )
            .unwrap();

        let restored: Option<Vec<u32>> = restore_state(&storage, "cart-storage");
        assert!(restored.is_none());
    }
}
