use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cart::CartItem;

// ============================================================================
// Order Value Objects
// ============================================================================

/// One line of a placed order. A trimmed copy of the cart line: the order
/// keeps only what the kitchen and the receipt need.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

impl From<&CartItem> for OrderItem {
    fn from(line: &CartItem) -> Self {
        Self {
            id: line.item.id,
            name: line.item.name.clone(),
            price: line.item.price,
            quantity: line.quantity,
        }
    }
}

/// Lifecycle of an order from placement to pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Completed and cancelled orders never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Orders still moving through the kitchen queue.
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Whether `self -> to` is a legal step in the strict lifecycle. The
    /// permissive mode bypasses this table entirely.
    pub fn can_transition_to(&self, to: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (*self, to),
            (Pending, Preparing)
                | (Pending, Cancelled)
                | (Preparing, Ready)
                | (Preparing, Cancelled)
                | (Ready, Completed)
        )
    }

    /// Sort rank for the kitchen queue: pending first, then preparing, then
    /// ready for pickup.
    pub(crate) fn queue_priority(&self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::Ready => 2,
            OrderStatus::Completed | OrderStatus::Cancelled => 3,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{label}")
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{FoodCategory, FoodItem};
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_item_from_cart_line() {
        let line = CartItem {
            item: FoodItem {
                id: Uuid::from_u128(0x11),
                name: "Idli".to_string(),
                price: dec!(30),
                image: "idli.png".to_string(),
                description: "Steamed rice cakes".to_string(),
                category: FoodCategory::Breakfast,
                canteen_id: Uuid::from_u128(0xC1),
                available: true,
            },
            quantity: 2,
        };

        let item = OrderItem::from(&line);
        assert_eq!(item.id, Uuid::from_u128(0x11));
        assert_eq!(item.name, "Idli");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.line_total(), dec!(60));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            "\"preparing\""
        );
        let status: OrderStatus = serde_json::from_str("\"ready\"").unwrap();
        assert_eq!(status, OrderStatus::Ready);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(OrderStatus::Pending.is_active());
        assert!(OrderStatus::Preparing.is_active());
        assert!(OrderStatus::Ready.is_active());
    }

    #[test]
    fn test_strict_lifecycle_table() {
        use OrderStatus::*;

        assert!(Pending.can_transition_to(Preparing));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Preparing.can_transition_to(Ready));
        assert!(Preparing.can_transition_to(Cancelled));
        assert!(Ready.can_transition_to(Completed));

        assert!(!Pending.can_transition_to(Ready));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Ready.can_transition_to(Cancelled));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Preparing));
        assert!(!Preparing.can_transition_to(Pending));
    }

    #[test]
    fn test_queue_priority_ordering() {
        assert!(OrderStatus::Pending.queue_priority() < OrderStatus::Preparing.queue_priority());
        assert!(OrderStatus::Preparing.queue_priority() < OrderStatus::Ready.queue_priority());
        assert_eq!(
            OrderStatus::Completed.queue_priority(),
            OrderStatus::Cancelled.queue_priority()
        );
    }
}
