// ============================================================================
// Session Domain Module
// ============================================================================

pub mod errors;
pub mod store;
pub mod value_objects;

pub use errors::SessionError;
pub use store::SessionStore;
pub use value_objects::{User, UserRole};
