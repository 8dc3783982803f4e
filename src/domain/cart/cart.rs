use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::FoodItem;

use super::value_objects::{CanteenConflictPolicy, CartChange, CartItem};

// ============================================================================
// Cart - Single-Canteen Shopping Cart
// ============================================================================
//
// Invariant: every line in the cart belongs to the same canteen, tracked by
// `canteen_id`. The field is Some exactly when the cart is non-empty. Lines
// hold a snapshot of the menu item taken at add time, so later catalog edits
// do not change what is already in the cart.
//
// This struct is also the persisted shape: it serializes to the `cart-storage`
// state blob as-is.
//
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
    canteen_id: Option<Uuid>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn canteen_id(&self) -> Option<Uuid> {
        self.canteen_id
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a menu item, snapshotting it into the cart.
    ///
    /// An existing line for the same item id is incremented. An add from a
    /// different canteen than the cart currently holds is resolved by the
    /// conflict policy: `Replace` drops the cart and starts over with the new
    /// item, `Keep` refuses the add and leaves the cart untouched.
    pub fn add_item(&mut self, item: &FoodItem, policy: CanteenConflictPolicy) -> CartChange {
        if let Some(cart_canteen_id) = self.canteen_id {
            if cart_canteen_id != item.canteen_id {
                match policy {
                    CanteenConflictPolicy::Replace => {
                        let dropped = std::mem::take(&mut self.items);
                        tracing::info!(
                            dropped_lines = dropped.len(),
                            from_canteen = %cart_canteen_id,
                            to_canteen = %item.canteen_id,
                            "Cart replaced on canteen switch"
                        );
                        self.items.push(CartItem {
                            item: item.clone(),
                            quantity: 1,
                        });
                        self.canteen_id = Some(item.canteen_id);
                        return CartChange::ReplacedCart { dropped };
                    }
                    CanteenConflictPolicy::Keep => {
                        tracing::warn!(
                            cart_canteen = %cart_canteen_id,
                            item_canteen = %item.canteen_id,
                            "Rejected add from another canteen"
                        );
                        return CartChange::RejectedOtherCanteen { cart_canteen_id };
                    }
                }
            }
        }

        if let Some(line) = self.items.iter_mut().find(|line| line.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return CartChange::Incremented {
                quantity: line.quantity,
            };
        }

        self.items.push(CartItem {
            item: item.clone(),
            quantity: 1,
        });
        self.canteen_id = Some(item.canteen_id);
        CartChange::Added
    }

    /// Drop a line entirely. Clears the canteen binding when the last line
    /// goes; unknown ids are a no-op.
    pub fn remove_item(&mut self, item_id: Uuid) {
        self.items.retain(|line| line.item.id != item_id);
        if self.items.is_empty() {
            self.canteen_id = None;
        }
    }

    /// Set a line's quantity outright. Zero removes the line; unknown ids are
    /// a no-op.
    pub fn update_quantity(&mut self, item_id: Uuid, quantity: u32) {
        if quantity == 0 {
            self.remove_item(item_id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|line| line.item.id == item_id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.canteen_id = None;
    }

    /// Sum of price times quantity over all lines.
    pub fn total_amount(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total unit count across all lines, summed in u64. A single line can
    /// carry a quantity all the way up to u32::MAX.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
