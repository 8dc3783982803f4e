use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::FoodItem;

// ============================================================================
// Cart Value Objects
// ============================================================================

/// A menu item plus the quantity of it in the cart. Serialized flat, so the
/// persisted line carries the full item snapshot alongside `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    #[serde(flatten)]
    pub item: FoodItem,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// Outcome of an add-to-cart attempt. Adding from a second canteen either
/// replaces the cart or is rejected, depending on [`CanteenConflictPolicy`].
#[derive(Debug, Clone, PartialEq)]
pub enum CartChange {
    /// First unit of this item entered the cart.
    Added,
    /// Item was already present; its quantity is now this value.
    Incremented { quantity: u32 },
    /// Cart held items from another canteen and was replaced wholesale.
    ReplacedCart { dropped: Vec<CartItem> },
    /// Cart held items from another canteen and the add was refused.
    RejectedOtherCanteen { cart_canteen_id: Uuid },
}

/// What to do when an add targets a different canteen than the cart holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanteenConflictPolicy {
    /// Discard the current cart and start over with the new item.
    #[default]
    Replace,
    /// Keep the current cart and reject the conflicting add.
    Keep,
}
