// ============================================================================
// Remote Module
// ============================================================================

pub mod gateway;

pub use gateway::{GatewayError, MockGateway, RemoteGateway, Resource};
