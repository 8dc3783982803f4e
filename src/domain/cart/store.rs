use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::catalog::FoodItem;
use crate::persistence::{persist_state, restore_state, StateStorage, CART_STORAGE_KEY};

use super::cart::Cart;
use super::value_objects::{CanteenConflictPolicy, CartChange, CartItem};

// ============================================================================
// Cart Store - Persisted Cart With Write-Through
// ============================================================================
//
// Owns the live cart and mirrors it into storage after every mutation, under
// the `cart-storage` key. On construction the previous cart is restored if a
// valid blob exists; anything unreadable starts an empty cart instead.
//
// A failed write is logged and otherwise ignored: the in-memory cart stays
// authoritative for the session and the next successful write catches up.
//
// ============================================================================

pub struct CartStore {
    cart: Cart,
    policy: CanteenConflictPolicy,
    storage: Arc<dyn StateStorage>,
}

impl CartStore {
    pub fn new(policy: CanteenConflictPolicy, storage: Arc<dyn StateStorage>) -> Self {
        let cart: Cart = restore_state(storage.as_ref(), CART_STORAGE_KEY).unwrap_or_default();
        if !cart.is_empty() {
            tracing::info!(
                lines = cart.items().len(),
                total_items = cart.total_items(),
                "Restored cart from storage"
            );
        }
        Self {
            cart,
            policy,
            storage,
        }
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn canteen_id(&self) -> Option<Uuid> {
        self.cart.canteen_id()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn total_amount(&self) -> Decimal {
        self.cart.total_amount()
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    // ------------------------------------------------------------------------
    // Mutations (each one persists)
    // ------------------------------------------------------------------------

    pub fn add_item(&mut self, item: &FoodItem) -> CartChange {
        let change = self.cart.add_item(item, self.policy);
        if !matches!(change, CartChange::RejectedOtherCanteen { .. }) {
            self.persist();
        }
        change
    }

    pub fn remove_item(&mut self, item_id: Uuid) {
        self.cart.remove_item(item_id);
        self.persist();
    }

    pub fn update_quantity(&mut self, item_id: Uuid, quantity: u32) {
        self.cart.update_quantity(item_id, quantity);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(error) = persist_state(self.storage.as_ref(), CART_STORAGE_KEY, &self.cart) {
            tracing::error!(%error, "Failed to persist cart state");
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
