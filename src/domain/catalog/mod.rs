// ============================================================================
// Catalog Domain Module
// ============================================================================

pub mod store;
pub mod value_objects;

pub use store::{CatalogStore, MenuQuery};
pub use value_objects::{Canteen, FoodCategory, FoodItem, FoodItemPatch, NewFoodItem};
