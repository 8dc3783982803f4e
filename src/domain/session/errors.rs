use crate::remote::GatewayError;

// ============================================================================
// Session Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Authentication call failed: {0}")]
    Gateway(#[from] GatewayError),
}
