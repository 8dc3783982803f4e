use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Catalog Value Objects
// ============================================================================

/// A food vendor location. Canteens are seeded fixture data and read-only at
/// runtime; they scope menu items, carts, and orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Canteen {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub rating: f32,
    pub estimated_time: String,
    pub location: String,
}

/// Fixed menu category set. Filtering by "all categories" is expressed as the
/// absence of a category filter, not an extra variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodCategory {
    Breakfast,
    Lunch,
    Snacks,
    Beverages,
    Desserts,
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FoodCategory::Breakfast => "Breakfast",
            FoodCategory::Lunch => "Lunch",
            FoodCategory::Snacks => "Snacks",
            FoodCategory::Beverages => "Beverages",
            FoodCategory::Desserts => "Desserts",
        };
        f.write_str(label)
    }
}

/// A menu entry owned by exactly one canteen.
///
/// Price positivity and required-field checks belong to the calling layer;
/// the catalog stores whatever it is handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
    pub category: FoodCategory,
    pub canteen_id: Uuid,
    pub available: bool,
}

/// Payload for creating a menu entry. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodItem {
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
    pub category: FoodCategory,
    pub canteen_id: Uuid,
    pub available: bool,
}

impl NewFoodItem {
    pub(crate) fn into_item(self, id: Uuid) -> FoodItem {
        FoodItem {
            id,
            name: self.name,
            price: self.price,
            image: self.image,
            description: self.description,
            category: self.category,
            canteen_id: self.canteen_id,
            available: self.available,
        }
    }
}

/// Partial update for a menu entry; `None` fields are left untouched.
/// The owning canteen is fixed at creation and cannot be patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodItemPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub category: Option<FoodCategory>,
    pub available: Option<bool>,
}

impl FoodItemPatch {
    pub(crate) fn apply(self, item: &mut FoodItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(image) = self.image {
            item.image = image;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(available) = self.available {
            item.available = available;
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_item() -> FoodItem {
        FoodItem {
            id: Uuid::from_u128(0x11),
            name: "Idli".to_string(),
            price: dec!(30),
            image: "idli.png".to_string(),
            description: "Steamed rice cakes".to_string(),
            category: FoodCategory::Breakfast,
            canteen_id: Uuid::from_u128(0xC1),
            available: true,
        }
    }

    #[test]
    fn test_food_item_wire_field_names() {
        let json = serde_json::to_value(sample_item()).unwrap();

        assert!(json.get("canteenId").is_some());
        assert!(json.get("canteen_id").is_none());
        assert_eq!(json["category"], "Breakfast");
        assert_eq!(json["available"], true);
    }

    #[test]
    fn test_food_item_roundtrip() {
        let item = sample_item();
        let json = serde_json::to_string(&item).unwrap();
        let back: FoodItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut item = sample_item();
        let patch = FoodItemPatch {
            price: Some(dec!(35)),
            available: Some(false),
            ..FoodItemPatch::default()
        };

        patch.apply(&mut item);

        assert_eq!(item.price, dec!(35));
        assert!(!item.available);
        assert_eq!(item.name, "Idli");
        assert_eq!(item.category, FoodCategory::Breakfast);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(FoodCategory::Breakfast.to_string(), "Breakfast");
        assert_eq!(FoodCategory::Beverages.to_string(), "Beverages");
    }
}
