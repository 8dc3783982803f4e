// ============================================================================
// Order Domain - Placement and Lifecycle of Orders
// ============================================================================
//
// This module contains ALL order-specific code:
// - Value objects (OrderItem, OrderStatus)
// - The Order entity itself
// - Errors (OrderError enum)
// - Ready-time policy (pickup estimates)
// - The store (placement, status updates, queue views)
//
// ============================================================================

pub mod errors;
pub mod eta;
pub mod order;
pub mod store;
pub mod value_objects;

// Re-export for convenience
pub use errors::OrderError;
pub use eta::{FixedLeadTime, ReadyTimePolicy, DEFAULT_READY_LEAD_MINUTES};
pub use order::Order;
pub use store::{OrderQueue, OrderStore, TransitionMode};
pub use value_objects::{OrderItem, OrderStatus};
