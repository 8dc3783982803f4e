use std::sync::Arc;
use std::time::Duration;

use crate::domain::cart::CanteenConflictPolicy;
use crate::domain::order::{FixedLeadTime, ReadyTimePolicy, TransitionMode};

// ============================================================================
// App Configuration
// ============================================================================

/// Tunable behavior of the app core. The defaults mirror the production
/// setup: one second of mock latency, carts replaced on canteen switch,
/// permissive status updates, a flat 15-minute pickup estimate.
#[derive(Clone)]
pub struct AppConfig {
    pub gateway_latency: Duration,
    pub conflict_policy: CanteenConflictPolicy,
    pub transition_mode: TransitionMode,
    pub ready_time: Arc<dyn ReadyTimePolicy>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gateway_latency: Duration::from_secs(1),
            conflict_policy: CanteenConflictPolicy::default(),
            transition_mode: TransitionMode::default(),
            ready_time: Arc::new(FixedLeadTime::default()),
        }
    }
}

impl AppConfig {
    /// Defaults minus the artificial latency. For tests.
    pub fn instant() -> Self {
        Self {
            gateway_latency: Duration::ZERO,
            ..Self::default()
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("gateway_latency", &self.gateway_latency)
            .field("conflict_policy", &self.conflict_policy)
            .field("transition_mode", &self.transition_mode)
            .finish_non_exhaustive()
    }
}
