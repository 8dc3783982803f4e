use std::cmp::Reverse;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::remote::{RemoteGateway, Resource};

use super::errors::OrderError;
use super::eta::ReadyTimePolicy;
use super::order::Order;
use super::value_objects::{OrderItem, OrderStatus};

// ============================================================================
// Order Store - Placement, Lifecycle, Queue Views
// ============================================================================
//
// Holds every order of the session in placement order. Placement round-trips
// through the remote gateway before any local state changes, so a failed
// submission leaves the store untouched. Status updates are local and
// synchronous.
//
// Orders are not persisted across restarts; the demo seeds a few from fixture
// data instead.
//
// ============================================================================

/// How status updates are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionMode {
    /// Any status can be set from any other. Mirrors a counter where staff
    /// correct mistakes by jumping states freely.
    #[default]
    Permissive,
    /// Only the forward lifecycle steps are allowed.
    Strict,
}

/// Which slice of a canteen's orders to view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderQueue {
    /// Orders the kitchen still has to act on, in working order.
    Active,
    /// Finished orders (completed or cancelled), newest first.
    Completed,
}

pub struct OrderStore {
    orders: Vec<Order>,
    mode: TransitionMode,
    ready_time: Arc<dyn ReadyTimePolicy>,
    gateway: Arc<dyn RemoteGateway>,
}

impl OrderStore {
    pub fn new(
        mode: TransitionMode,
        ready_time: Arc<dyn ReadyTimePolicy>,
        gateway: Arc<dyn RemoteGateway>,
    ) -> Self {
        Self {
            orders: Vec::new(),
            mode,
            ready_time,
            gateway,
        }
    }

    /// Preload orders, e.g. fixture data for the demo. Appended as-is.
    pub fn seed(&mut self, orders: Vec<Order>) {
        tracing::debug!(count = orders.len(), "Seeding order store");
        self.orders.extend(orders);
    }

    // ------------------------------------------------------------------------
    // Placement
    // ------------------------------------------------------------------------

    /// Submit an order to the backend, then record it locally as pending.
    ///
    /// Timestamps are taken after the submission round-trip completes, so the
    /// pickup estimate counts from when the kitchen actually saw the order.
    /// An empty order is accepted but flagged in the log.
    pub async fn place_order(
        &mut self,
        user_id: Uuid,
        canteen_id: Uuid,
        items: Vec<OrderItem>,
        total_amount: Decimal,
    ) -> Result<Order, OrderError> {
        if items.is_empty() {
            tracing::warn!(%user_id, %canteen_id, "Placing order with no items");
        }

        let payload = json!({
            "userId": user_id,
            "canteenId": canteen_id,
            "items": &items,
            "totalAmount": total_amount,
        });
        self.gateway.create(Resource::Orders, payload).await?;

        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            user_id,
            canteen_id,
            total_amount,
            status: OrderStatus::Pending,
            order_time: now,
            estimated_ready_time: self.ready_time.estimated_ready_time(now, &items),
            items,
        };
        self.orders.push(order.clone());

        tracing::info!(
            order_id = %order.id,
            reference = %order.reference(),
            %user_id,
            %canteen_id,
            total_amount = %total_amount,
            "Order placed"
        );
        Ok(order)
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Move an order to a new status. Unknown ids are an error; in strict
    /// mode, so are steps outside the forward lifecycle.
    pub fn update_status(
        &mut self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let mode = self.mode;
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == order_id)
            .ok_or(OrderError::NotFound(order_id))?;

        if mode == TransitionMode::Strict && !order.status.can_transition_to(status) {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: status,
            });
        }

        let from = order.status;
        order.status = status;
        tracing::info!(order_id = %order_id, %from, to = %status, "Order status updated");
        Ok(order.clone())
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn order(&self, order_id: Uuid) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == order_id)
    }

    /// All orders in placement order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// A user's orders in placement order.
    pub fn orders_for_user(&self, user_id: Uuid) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.user_id == user_id)
            .collect()
    }

    /// A canteen's orders in placement order, all statuses.
    pub fn orders_for_canteen(&self, canteen_id: Uuid) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.canteen_id == canteen_id)
            .collect()
    }

    /// A user's orders, newest first. The "my orders" screen.
    pub fn user_history(&self, user_id: Uuid) -> Vec<&Order> {
        let mut history = self.orders_for_user(user_id);
        history.sort_by_key(|order| Reverse(order.order_time));
        history
    }

    /// A canteen's orders, sliced and sorted for the staff dashboard.
    ///
    /// The active queue ranks pending before preparing before ready, newest
    /// first within each rank. The completed queue is terminal orders only,
    /// newest first.
    pub fn canteen_queue(&self, canteen_id: Uuid, queue: OrderQueue) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .orders
            .iter()
            .filter(|order| {
                order.canteen_id == canteen_id
                    && match queue {
                        OrderQueue::Active => order.status.is_active(),
                        OrderQueue::Completed => order.status.is_terminal(),
                    }
            })
            .collect();

        match queue {
            OrderQueue::Active => {
                orders.sort_by_key(|order| {
                    (order.status.queue_priority(), Reverse(order.order_time))
                });
            }
            OrderQueue::Completed => {
                orders.sort_by_key(|order| Reverse(order.order_time));
            }
        }
        orders
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
