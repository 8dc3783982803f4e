// ============================================================================
// CanteenQ - Campus Canteen Ordering Core
// ============================================================================
//
// State management core for a campus food-ordering app: canteen catalog and
// menus, a single-canteen cart, order placement and lifecycle, and the
// signed-in session. UI-free; the demo binary drives the same API a UI
// would.
//
// Carts and sessions persist through a pluggable key/value storage; orders
// and the catalog are reseeded from fixtures. All outbound calls go through
// a gateway trait with a latency-simulating mock behind it.
//
// ============================================================================

pub mod app;
pub mod config;
pub mod domain;
pub mod fixtures;
pub mod persistence;
pub mod remote;

pub use app::{CanteenApp, CheckoutError};
pub use config::AppConfig;
