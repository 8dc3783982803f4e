use std::sync::Arc;

use thiserror::Error;

use crate::config::AppConfig;
use crate::domain::cart::CartStore;
use crate::domain::catalog::CatalogStore;
use crate::domain::order::{Order, OrderError, OrderItem, OrderStore};
use crate::domain::session::SessionStore;
use crate::fixtures;
use crate::persistence::{MemoryStorage, StateStorage};
use crate::remote::{MockGateway, RemoteGateway};

// ============================================================================
// App Facade - Wired Stores Plus Cross-Store Flows
// ============================================================================
//
// Owns the four stores and the one flow that spans them: checkout, which
// drains the cart into a placed order for the signed-in user. Everything
// else is reached through the store fields directly.
//
// ============================================================================

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Order(#[from] OrderError),
}

pub struct CanteenApp {
    pub catalog: CatalogStore,
    pub cart: CartStore,
    pub orders: OrderStore,
    pub session: SessionStore,
}

impl CanteenApp {
    /// Stand-alone app over fresh in-memory collaborators.
    pub fn new(config: AppConfig) -> Self {
        let storage: Arc<dyn StateStorage> = Arc::new(MemoryStorage::new());
        let gateway: Arc<dyn RemoteGateway> = Arc::new(MockGateway::new(config.gateway_latency));
        Self::with_collaborators(config, storage, gateway)
    }

    /// App over caller-supplied storage and gateway. Catalog and sample
    /// orders are seeded from fixtures; cart and session hydrate from
    /// whatever the storage already holds.
    pub fn with_collaborators(
        config: AppConfig,
        storage: Arc<dyn StateStorage>,
        gateway: Arc<dyn RemoteGateway>,
    ) -> Self {
        let catalog = CatalogStore::new(fixtures::canteens(), fixtures::menu_items());
        let cart = CartStore::new(config.conflict_policy, Arc::clone(&storage));
        let mut orders = OrderStore::new(
            config.transition_mode,
            config.ready_time,
            Arc::clone(&gateway),
        );
        orders.seed(fixtures::sample_orders());
        let session = SessionStore::new(storage, gateway);

        Self {
            catalog,
            cart,
            orders,
            session,
        }
    }

    /// Place the current cart as an order for the signed-in user. The cart is
    /// cleared only after the order went through; a failed placement leaves
    /// it untouched for retry.
    pub async fn checkout(&mut self) -> Result<Order, CheckoutError> {
        let user_id = self
            .session
            .current_user()
            .ok_or(CheckoutError::NotSignedIn)?
            .id;
        let canteen_id = self.cart.canteen_id().ok_or(CheckoutError::EmptyCart)?;

        let items: Vec<OrderItem> = self.cart.items().iter().map(OrderItem::from).collect();
        let total_amount = self.cart.total_amount();

        let order = self
            .orders
            .place_order(user_id, canteen_id, items, total_amount)
            .await?;
        self.cart.clear();

        tracing::info!(
            order_id = %order.id,
            reference = %order.reference(),
            "Checkout completed"
        );
        Ok(order)
    }
}

// ============================================================================
// Integration-Style Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::GatewayError;
    use rust_decimal_macros::dec;

    fn app() -> CanteenApp {
        CanteenApp::new(AppConfig::instant())
    }

    async fn signed_in_app() -> CanteenApp {
        let mut app = app();
        app.session.login("priya@campus.edu", "pw").await.unwrap();
        app
    }

    #[tokio::test]
    async fn test_checkout_places_order_and_clears_cart() {
        let mut app = signed_in_app().await;

        let idli = app.catalog.item(fixtures::menu_items()[0].id).unwrap().clone();
        let dosa = app.catalog.item(fixtures::menu_items()[1].id).unwrap().clone();
        app.cart.add_item(&idli);
        app.cart.add_item(&idli);
        app.cart.add_item(&dosa);

        let order = app.checkout().await.unwrap();

        assert_eq!(order.total_amount, dec!(110));
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.user_id, fixtures::STUDENT_USER_ID);
        assert!(app.cart.is_empty());

        // Newest entry in the student's history.
        let history = app.orders.user_history(fixtures::STUDENT_USER_ID);
        assert_eq!(history[0].id, order.id);
    }

    #[tokio::test]
    async fn test_checkout_requires_sign_in() {
        let mut app = app();
        let idli = fixtures::menu_items()[0].clone();
        app.cart.add_item(&idli);

        let result = app.checkout().await;
        assert!(matches!(result, Err(CheckoutError::NotSignedIn)));
    }

    #[tokio::test]
    async fn test_checkout_requires_a_non_empty_cart() {
        let mut app = signed_in_app().await;

        let result = app.checkout().await;
        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }

    #[tokio::test]
    async fn test_failed_checkout_keeps_the_cart() {
        let storage: Arc<dyn StateStorage> = Arc::new(MemoryStorage::new());
        let gateway = Arc::new(MockGateway::instant());
        let mut app = CanteenApp::with_collaborators(
            AppConfig::instant(),
            storage,
            Arc::clone(&gateway) as Arc<dyn RemoteGateway>,
        );
        app.session.login("priya@campus.edu", "pw").await.unwrap();

        let idli = fixtures::menu_items()[0].clone();
        app.cart.add_item(&idli);
        let orders_before = app.orders.orders().len();

        gateway.fail_next(GatewayError::Unavailable("backend down".to_string()));
        let result = app.checkout().await;

        assert!(matches!(
            result,
            Err(CheckoutError::Order(OrderError::Gateway(_)))
        ));
        assert_eq!(app.cart.total_items(), 1);
        assert_eq!(app.orders.orders().len(), orders_before);
    }

    #[tokio::test]
    async fn test_cart_and_session_survive_an_app_restart() {
        let storage: Arc<dyn StateStorage> = Arc::new(MemoryStorage::new());
        let gateway: Arc<dyn RemoteGateway> = Arc::new(MockGateway::instant());

        let mut app = CanteenApp::with_collaborators(
            AppConfig::instant(),
            Arc::clone(&storage),
            Arc::clone(&gateway),
        );
        app.session.login("priya@campus.edu", "pw").await.unwrap();
        let idli = fixtures::menu_items()[0].clone();
        app.cart.add_item(&idli);
        drop(app);

        let restarted =
            CanteenApp::with_collaborators(AppConfig::instant(), storage, gateway);

        assert!(restarted.session.is_authenticated());
        assert_eq!(restarted.cart.total_items(), 1);
        assert_eq!(restarted.cart.items()[0].item.name, "Idli");
    }
}
