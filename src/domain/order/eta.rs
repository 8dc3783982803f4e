use chrono::{DateTime, Duration, Utc};

use super::value_objects::OrderItem;

// ============================================================================
// Ready-Time Policy - Pluggable Pickup Estimates
// ============================================================================

/// Lead time quoted when no other policy is configured.
pub const DEFAULT_READY_LEAD_MINUTES: i64 = 15;

/// Computes when a newly placed order is expected to be ready for pickup.
/// Implementations may look at the order lines (load-aware estimates, per-dish
/// prep times); the default ignores them.
pub trait ReadyTimePolicy: Send + Sync {
    fn estimated_ready_time(&self, placed_at: DateTime<Utc>, items: &[OrderItem]) -> DateTime<Utc>;
}

/// Flat lead time added to the placement timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FixedLeadTime {
    lead: Duration,
}

impl FixedLeadTime {
    pub fn new(lead: Duration) -> Self {
        Self { lead }
    }

    pub fn minutes(minutes: i64) -> Self {
        Self::new(Duration::minutes(minutes))
    }
}

impl Default for FixedLeadTime {
    fn default() -> Self {
        Self::minutes(DEFAULT_READY_LEAD_MINUTES)
    }
}

impl ReadyTimePolicy for FixedLeadTime {
    fn estimated_ready_time(
        &self,
        placed_at: DateTime<Utc>,
        _items: &[OrderItem],
    ) -> DateTime<Utc> {
        placed_at + self.lead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_quotes_fifteen_minutes() {
        let placed_at = Utc::now();
        let ready = FixedLeadTime::default().estimated_ready_time(placed_at, &[]);
        assert_eq!(ready, placed_at + Duration::minutes(15));
    }

    #[test]
    fn test_custom_lead_time() {
        let placed_at = Utc::now();
        let ready = FixedLeadTime::minutes(25).estimated_ready_time(placed_at, &[]);
        assert_eq!(ready, placed_at + Duration::minutes(25));
    }
}
