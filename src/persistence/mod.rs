// ============================================================================
// Persistence Module
// ============================================================================

pub mod envelope;
pub mod storage;

pub use envelope::{
    persist_state, restore_state, AUTH_STORAGE_KEY, CART_STORAGE_KEY, PERSIST_VERSION,
};
pub use storage::{MemoryStorage, StateStorage, StorageError};
