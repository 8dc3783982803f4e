use chrono::Utc;
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use canteenq::domain::catalog::{FoodCategory, FoodItem, FoodItemPatch, MenuQuery, NewFoodItem};
use canteenq::domain::order::{OrderQueue, OrderStatus};
use canteenq::{fixtures, AppConfig, CanteenApp};

fn menu_pick(app: &CanteenApp, canteen_id: Uuid, name: &str) -> anyhow::Result<FoodItem> {
    app.catalog
        .items_for_canteen(canteen_id)
        .into_iter()
        .find(|item| item.name == name)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("{name} missing from menu"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,canteenq=debug")),
        )
        .init();

    tracing::info!("🚀 Starting CanteenQ Ordering Demo");

    // === 1. Build the app over fresh collaborators ===
    let mut app = CanteenApp::new(AppConfig::default());

    // === 2. Student signs in ===
    let student = app.session.login("priya@campus.edu", "demo-password").await?;
    tracing::info!("✅ Signed in as {} ({})", student.name, student.email);

    // === 3. Browse canteens and a menu ===
    for canteen in app.catalog.canteens() {
        tracing::info!(
            "🏫 {} @ {} (rating {}, {})",
            canteen.name,
            canteen.location,
            canteen.rating,
            canteen.estimated_time
        );
    }

    let breakfast = app.catalog.menu(
        fixtures::CENTRAL_CANTEEN_ID,
        &MenuQuery {
            category: Some(FoodCategory::Breakfast),
            only_available: true,
            ..MenuQuery::default()
        },
    );
    tracing::info!("🍽️ Central Canteen breakfast menu has {} items", breakfast.len());

    // === 4. Fill the cart ===
    // Start from the wrong canteen to show the single-canteen rule in action.
    let samosa = menu_pick(&app, fixtures::NORTH_BLOCK_CAFE_ID, "Samosa")?;
    app.cart.add_item(&samosa);

    let idli = menu_pick(&app, fixtures::CENTRAL_CANTEEN_ID, "Idli")?;
    let dosa = menu_pick(&app, fixtures::CENTRAL_CANTEEN_ID, "Dosa")?;

    let change = app.cart.add_item(&idli);
    tracing::info!(change = ?change, "🛒 Added Idli, cart moved to Central Canteen");
    app.cart.add_item(&idli);
    app.cart.add_item(&dosa);

    tracing::info!(
        "🛒 Cart: {} items, ₹{}",
        app.cart.total_items(),
        app.cart.total_amount()
    );

    // === 5. Checkout ===
    let order = app.checkout().await?;
    tracing::info!(
        "✅ Order {} placed: ₹{}, ready in ~{} mins",
        order.reference(),
        order.total_amount,
        order.minutes_remaining(Utc::now()).unwrap_or_default()
    );

    // === 6. Admin takes over the counter ===
    app.session.logout();
    let admin = app.session.login(fixtures::ADMIN_EMAIL, "demo-password").await?;
    let counter = admin
        .canteen_id
        .ok_or_else(|| anyhow::anyhow!("Admin account has no canteen assigned"))?;
    tracing::info!("✅ Signed in as {} running the counter", admin.name);

    // === 7. Work the kitchen queue ===
    let active = app.orders.canteen_queue(counter, OrderQueue::Active);
    tracing::info!("📋 Active queue has {} orders", active.len());
    for queued in &active {
        tracing::info!(
            "  {} [{}] ₹{}",
            queued.reference(),
            queued.status,
            queued.total_amount
        );
    }

    for status in [OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Completed] {
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        let updated = app.orders.update_status(order.id, status)?;
        tracing::info!("✅ Order {} is now {}", updated.reference(), updated.status);
    }

    let done = app.orders.canteen_queue(counter, OrderQueue::Completed);
    tracing::info!("📋 Completed queue has {} orders", done.len());

    // === 8. Menu upkeep ===
    let oats = app.catalog.add_item(NewFoodItem {
        name: "Masala Oats".to_string(),
        price: Decimal::from(35u64),
        image: "https://images.canteenq.dev/items/masala-oats.jpg".to_string(),
        description: "Savory oats with vegetables".to_string(),
        category: FoodCategory::Breakfast,
        canteen_id: counter,
        available: true,
    });
    tracing::info!("🍽️ Listed {} at ₹{}", oats.name, oats.price);

    if let Some(updated) = app.catalog.update_item(
        oats.id,
        FoodItemPatch {
            price: Some(Decimal::from(40u64)),
            ..FoodItemPatch::default()
        },
    ) {
        tracing::info!("🍽️ Repriced {} to ₹{}", updated.name, updated.price);
    }

    if let Some(available) = app.catalog.toggle_availability(oats.id) {
        tracing::info!("🍽️ {} is now {}", oats.name, if available { "available" } else { "sold out" });
    }

    // === 9. Student checks their history ===
    app.session.logout();
    app.session.login("priya@campus.edu", "demo-password").await?;
    let history = app.orders.user_history(fixtures::STUDENT_USER_ID);
    tracing::info!("📜 Order history ({} orders, newest first):", history.len());
    for past in &history {
        tracing::info!(
            "  {} [{}] ₹{} at {}",
            past.reference(),
            past.status,
            past.total_amount,
            past.order_time.format("%H:%M")
        );
    }

    tracing::info!("🎉 Demo complete!");

    Ok(())
}
