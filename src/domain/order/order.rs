use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{OrderItem, OrderStatus};

// ============================================================================
// Order Entity
// ============================================================================

/// A placed order. Lines and total are frozen at placement; only `status`
/// changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub canteen_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub order_time: DateTime<Utc>,
    pub estimated_ready_time: DateTime<Utc>,
}

impl Order {
    /// Short human-readable code for receipts and pickup calls, derived from
    /// the tail of the order id.
    pub fn reference(&self) -> String {
        let simple = self.id.simple().to_string();
        format!("#{}", &simple[simple.len() - 4..])
    }

    /// Whole minutes until the order is expected to be ready, rounded up.
    /// None once the order left the kitchen (ready or terminal) or the
    /// estimate has already passed.
    pub fn minutes_remaining(&self, now: DateTime<Utc>) -> Option<i64> {
        if !matches!(self.status, OrderStatus::Pending | OrderStatus::Preparing) {
            return None;
        }
        let remaining = self.estimated_ready_time.signed_duration_since(now);
        let seconds = remaining.num_seconds();
        if seconds <= 0 {
            return None;
        }
        Some((seconds + 59) / 60)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
