use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

// ============================================================================
// Remote Gateway - Outbound Calls to the Canteen Backend
// ============================================================================
//
// Everything that leaves the process goes through this trait: order
// submission, sign-in, registration. The bundled implementation is a mock
// that sleeps for a configurable latency and answers success, which stands in
// for the real backend during development and in tests.
//
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Remote resource a call addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Orders,
    Sessions,
    Users,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = match self {
            Resource::Orders => "orders",
            Resource::Sessions => "sessions",
            Resource::Users => "users",
        };
        write!(f, "{path}")
    }
}

#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// Submit a new record to the backend.
    async fn create(
        &self,
        resource: Resource,
        payload: serde_json::Value,
    ) -> Result<(), GatewayError>;

    /// Overwrite a record by id.
    async fn update(
        &self,
        resource: Resource,
        id: &str,
        payload: serde_json::Value,
    ) -> Result<(), GatewayError>;

    /// Fetch a record by id. The mock backend holds nothing, so this answers
    /// None until a real gateway is plugged in.
    async fn fetch(
        &self,
        resource: Resource,
        id: &str,
    ) -> Result<Option<serde_json::Value>, GatewayError>;
}

/// Development stand-in for the backend: sleeps, then succeeds. A single
/// failure can be scripted ahead of time to exercise error paths.
pub struct MockGateway {
    latency: Duration,
    fail_next: Mutex<Option<GatewayError>>,
}

impl MockGateway {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            fail_next: Mutex::new(None),
        }
    }

    /// No artificial latency. For tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Make the next call fail with `error`, once.
    pub fn fail_next(&self, error: GatewayError) {
        if let Ok(mut slot) = self.fail_next.lock() {
            *slot = Some(error);
        }
    }

    async fn round_trip(&self, resource: Resource, verb: &str) -> Result<(), GatewayError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let scripted = self
            .fail_next
            .lock()
            .ok()
            .and_then(|mut slot| slot.take());
        if let Some(error) = scripted {
            tracing::warn!(%resource, verb, %error, "Mock gateway answering scripted failure");
            return Err(error);
        }

        tracing::debug!(%resource, verb, latency_ms = self.latency.as_millis() as u64, "Mock gateway call completed");
        Ok(())
    }
}

#[async_trait]
impl RemoteGateway for MockGateway {
    async fn create(
        &self,
        resource: Resource,
        _payload: serde_json::Value,
    ) -> Result<(), GatewayError> {
        self.round_trip(resource, "create").await
    }

    async fn update(
        &self,
        resource: Resource,
        _id: &str,
        _payload: serde_json::Value,
    ) -> Result<(), GatewayError> {
        self.round_trip(resource, "update").await
    }

    async fn fetch(
        &self,
        resource: Resource,
        _id: &str,
    ) -> Result<Option<serde_json::Value>, GatewayError> {
        self.round_trip(resource, "fetch").await?;
        Ok(None)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_gateway_succeeds_by_default() {
        let gateway = MockGateway::instant();
        let result = gateway.create(Resource::Orders, json!({"ok": true})).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_scripted_failure_fires_once() {
        let gateway = MockGateway::instant();
        gateway.fail_next(GatewayError::Unavailable("backend down".to_string()));

        let first = gateway.create(Resource::Sessions, json!({})).await;
        assert_eq!(
            first,
            Err(GatewayError::Unavailable("backend down".to_string()))
        );

        let second = gateway.create(Resource::Sessions, json!({})).await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_mock_latency_elapses() {
        let gateway = MockGateway::new(Duration::from_millis(20));
        let started = std::time::Instant::now();

        gateway.create(Resource::Orders, json!({})).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_fetch_answers_none() {
        let gateway = MockGateway::instant();
        let fetched = gateway.fetch(Resource::Orders, "any-id").await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_update_acknowledges() {
        let gateway = MockGateway::instant();
        let result = gateway
            .update(Resource::Orders, "any-id", json!({"status": "ready"}))
            .await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(Resource::Orders.to_string(), "orders");
        assert_eq!(Resource::Sessions.to_string(), "sessions");
        assert_eq!(Resource::Users.to_string(), "users");
    }
}
