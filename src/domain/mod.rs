// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// One subdirectory per domain area, each with its value objects, errors and
// store. Stores own their slice of app state; cross-store flows (checkout)
// live in the app facade, not here.
//
// ============================================================================

pub mod cart;
pub mod catalog;
pub mod order;
pub mod session;
