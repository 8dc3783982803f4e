use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::catalog::{Canteen, FoodCategory, FoodItem};
use crate::domain::order::{Order, OrderItem, OrderStatus};
use crate::domain::session::{User, UserRole};

// ============================================================================
// Fixture Data - Canteens, Menus, Accounts, Sample Orders
// ============================================================================
//
// Development stand-in for the real backend catalog. Ids are fixed so that
// seeded data lines up across runs and tests can reference entries directly.
//
// ============================================================================

/// Signing in with this address yields the admin account; any other address
/// yields a student.
pub const ADMIN_EMAIL: &str = "admin@canteenq.com";

pub const ADMIN_USER_ID: Uuid = Uuid::from_u128(0x01);
pub const STUDENT_USER_ID: Uuid = Uuid::from_u128(0x02);

pub const CENTRAL_CANTEEN_ID: Uuid = Uuid::from_u128(0xC1);
pub const NORTH_BLOCK_CAFE_ID: Uuid = Uuid::from_u128(0xC2);
pub const TECH_PARK_COURT_ID: Uuid = Uuid::from_u128(0xC3);

fn rupees(amount: u64) -> Decimal {
    Decimal::from(amount)
}

fn canteen(
    id: Uuid,
    name: &str,
    image: &str,
    rating: f32,
    estimated_time: &str,
    location: &str,
) -> Canteen {
    Canteen {
        id,
        name: name.to_string(),
        image: image.to_string(),
        rating,
        estimated_time: estimated_time.to_string(),
        location: location.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn food_item(
    id: u128,
    name: &str,
    price: u64,
    image: &str,
    description: &str,
    category: FoodCategory,
    canteen_id: Uuid,
    available: bool,
) -> FoodItem {
    FoodItem {
        id: Uuid::from_u128(id),
        name: name.to_string(),
        price: rupees(price),
        image: image.to_string(),
        description: description.to_string(),
        category,
        canteen_id,
        available,
    }
}

pub fn canteens() -> Vec<Canteen> {
    vec![
        canteen(
            CENTRAL_CANTEEN_ID,
            "Central Canteen",
            "https://images.canteenq.dev/canteens/central.jpg",
            4.5,
            "10-15 mins",
            "Academic Block A",
        ),
        canteen(
            NORTH_BLOCK_CAFE_ID,
            "North Block Cafe",
            "https://images.canteenq.dev/canteens/north-block.jpg",
            4.2,
            "15-20 mins",
            "Library Lawn",
        ),
        canteen(
            TECH_PARK_COURT_ID,
            "Tech Park Food Court",
            "https://images.canteenq.dev/canteens/tech-park.jpg",
            3.9,
            "20-25 mins",
            "Tech Park, Gate 2",
        ),
    ]
}

pub fn menu_items() -> Vec<FoodItem> {
    vec![
        food_item(
            0x11,
            "Idli",
            30,
            "https://images.canteenq.dev/items/idli.jpg",
            "Steamed rice cakes with sambar and chutney",
            FoodCategory::Breakfast,
            CENTRAL_CANTEEN_ID,
            true,
        ),
        food_item(
            0x12,
            "Dosa",
            50,
            "https://images.canteenq.dev/items/dosa.jpg",
            "Crispy rice crepe with potato masala",
            FoodCategory::Breakfast,
            CENTRAL_CANTEEN_ID,
            true,
        ),
        food_item(
            0x13,
            "Filter Coffee",
            15,
            "https://images.canteenq.dev/items/filter-coffee.jpg",
            "South Indian filter coffee, served hot",
            FoodCategory::Beverages,
            CENTRAL_CANTEEN_ID,
            true,
        ),
        food_item(
            0x14,
            "Veg Thali",
            80,
            "https://images.canteenq.dev/items/veg-thali.jpg",
            "Rice, two sabzis, dal, roti and curd",
            FoodCategory::Lunch,
            CENTRAL_CANTEEN_ID,
            true,
        ),
        food_item(
            0x21,
            "Samosa",
            15,
            "https://images.canteenq.dev/items/samosa.jpg",
            "Fried pastry with spiced potato filling",
            FoodCategory::Snacks,
            NORTH_BLOCK_CAFE_ID,
            true,
        ),
        food_item(
            0x22,
            "Veg Sandwich",
            45,
            "https://images.canteenq.dev/items/veg-sandwich.jpg",
            "Grilled sandwich with mint chutney",
            FoodCategory::Snacks,
            NORTH_BLOCK_CAFE_ID,
            true,
        ),
        food_item(
            0x23,
            "Masala Chai",
            12,
            "https://images.canteenq.dev/items/masala-chai.jpg",
            "Spiced milk tea",
            FoodCategory::Beverages,
            NORTH_BLOCK_CAFE_ID,
            true,
        ),
        food_item(
            0x24,
            "Gulab Jamun",
            20,
            "https://images.canteenq.dev/items/gulab-jamun.jpg",
            "Fried milk dumplings in sugar syrup",
            FoodCategory::Desserts,
            NORTH_BLOCK_CAFE_ID,
            false,
        ),
        food_item(
            0x31,
            "Chole Bhature",
            70,
            "https://images.canteenq.dev/items/chole-bhature.jpg",
            "Spiced chickpeas with fried bread",
            FoodCategory::Lunch,
            TECH_PARK_COURT_ID,
            true,
        ),
        food_item(
            0x32,
            "Paneer Roll",
            60,
            "https://images.canteenq.dev/items/paneer-roll.jpg",
            "Paneer tikka wrapped in rumali roti",
            FoodCategory::Snacks,
            TECH_PARK_COURT_ID,
            true,
        ),
        food_item(
            0x33,
            "Cold Coffee",
            40,
            "https://images.canteenq.dev/items/cold-coffee.jpg",
            "Blended iced coffee with ice cream",
            FoodCategory::Beverages,
            TECH_PARK_COURT_ID,
            true,
        ),
    ]
}

/// The admin account runs the Central Canteen.
pub fn admin_user() -> User {
    User {
        id: ADMIN_USER_ID,
        name: "Canteen Admin".to_string(),
        email: ADMIN_EMAIL.to_string(),
        role: UserRole::Admin,
        canteen_id: Some(CENTRAL_CANTEEN_ID),
    }
}

/// Every non-admin sign-in resolves to the same demo student, keeping the
/// mock backend stateless.
pub fn student_user(email: &str) -> User {
    User {
        id: STUDENT_USER_ID,
        name: "Student User".to_string(),
        email: email.to_string(),
        role: UserRole::Student,
        canteen_id: None,
    }
}

/// A couple of orders for the demo student, timestamped relative to now: one
/// mid-preparation and one completed yesterday.
pub fn sample_orders() -> Vec<Order> {
    let now = Utc::now();
    let preparing_placed = now - Duration::minutes(10);
    let completed_placed = now - Duration::days(1);

    vec![
        Order {
            id: Uuid::from_u128(0xA1),
            user_id: STUDENT_USER_ID,
            canteen_id: CENTRAL_CANTEEN_ID,
            items: vec![
                OrderItem {
                    id: Uuid::from_u128(0x11),
                    name: "Idli".to_string(),
                    price: rupees(30),
                    quantity: 2,
                },
                OrderItem {
                    id: Uuid::from_u128(0x12),
                    name: "Dosa".to_string(),
                    price: rupees(50),
                    quantity: 1,
                },
            ],
            total_amount: rupees(110),
            status: OrderStatus::Preparing,
            order_time: preparing_placed,
            estimated_ready_time: preparing_placed + Duration::minutes(15),
        },
        Order {
            id: Uuid::from_u128(0xA2),
            user_id: STUDENT_USER_ID,
            canteen_id: CENTRAL_CANTEEN_ID,
            items: vec![OrderItem {
                id: Uuid::from_u128(0x14),
                name: "Veg Thali".to_string(),
                price: rupees(80),
                quantity: 1,
            }],
            total_amount: rupees(80),
            status: OrderStatus::Completed,
            order_time: completed_placed,
            estimated_ready_time: completed_placed + Duration::minutes(15),
        },
    ]
}

// ============================================================================
// Unit Tests
// ============================================================================
