// ============================================================================
// Cart Domain Module
// ============================================================================

pub mod cart;
pub mod store;
pub mod value_objects;

pub use cart::Cart;
pub use store::CartStore;
pub use value_objects::{CanteenConflictPolicy, CartChange, CartItem};
