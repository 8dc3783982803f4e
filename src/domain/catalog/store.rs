use uuid::Uuid;

use super::value_objects::{Canteen, FoodCategory, FoodItem, FoodItemPatch, NewFoodItem};

// ============================================================================
// Catalog Store - Menu Items and Canteen Directory
// ============================================================================
//
// In-memory, insertion-ordered. Not persisted across restarts: the catalog is
// reseeded from fixture data on construction, so menu edits are lost when the
// process exits. Mutations never fail; looking up an id that does not exist
// yields None rather than an error.
//
// ============================================================================

/// Filter for menu retrieval. `category: None` means all categories; the
/// search term matches item names case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct MenuQuery {
    pub search: Option<String>,
    pub category: Option<FoodCategory>,
    pub only_available: bool,
}

impl MenuQuery {
    fn matches(&self, item: &FoodItem) -> bool {
        if self.only_available && !item.available {
            return false;
        }
        if let Some(category) = self.category {
            if item.category != category {
                return false;
            }
        }
        if let Some(ref term) = self.search {
            if !item.name.to_lowercase().contains(&term.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

pub struct CatalogStore {
    canteens: Vec<Canteen>,
    items: Vec<FoodItem>,
}

impl CatalogStore {
    pub fn new(canteens: Vec<Canteen>, items: Vec<FoodItem>) -> Self {
        tracing::debug!(
            canteen_count = canteens.len(),
            item_count = items.len(),
            "Seeding catalog store"
        );
        Self { canteens, items }
    }

    pub fn empty() -> Self {
        Self {
            canteens: Vec::new(),
            items: Vec::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Canteen directory (read-only)
    // ------------------------------------------------------------------------

    pub fn canteens(&self) -> &[Canteen] {
        &self.canteens
    }

    pub fn canteen(&self, id: Uuid) -> Option<&Canteen> {
        self.canteens.iter().find(|c| c.id == id)
    }

    /// Case-insensitive name search over the canteen directory.
    pub fn search_canteens(&self, term: &str) -> Vec<&Canteen> {
        let term = term.to_lowercase();
        self.canteens
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&term))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Menu retrieval
    // ------------------------------------------------------------------------

    pub fn item(&self, id: Uuid) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items belonging to a canteen, in insertion order.
    pub fn items_for_canteen(&self, canteen_id: Uuid) -> Vec<&FoodItem> {
        self.items
            .iter()
            .filter(|item| item.canteen_id == canteen_id)
            .collect()
    }

    /// Canteen menu narrowed by a query (search term, category, availability).
    pub fn menu(&self, canteen_id: Uuid, query: &MenuQuery) -> Vec<&FoodItem> {
        self.items
            .iter()
            .filter(|item| item.canteen_id == canteen_id && query.matches(item))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Keyed mutations (admin surface)
    // ------------------------------------------------------------------------

    /// Add a menu entry with a freshly generated id.
    pub fn add_item(&mut self, new_item: NewFoodItem) -> FoodItem {
        let item = new_item.into_item(Uuid::new_v4());
        tracing::info!(
            item_id = %item.id,
            canteen_id = %item.canteen_id,
            name = %item.name,
            "Menu item added"
        );
        self.items.push(item.clone());
        item
    }

    /// Apply a partial update; returns the updated item, or None if the id
    /// is unknown.
    pub fn update_item(&mut self, id: Uuid, patch: FoodItemPatch) -> Option<FoodItem> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        patch.apply(item);
        tracing::info!(item_id = %id, "Menu item updated");
        Some(item.clone())
    }

    /// Remove a menu entry; returns the removed item, or None if absent.
    pub fn remove_item(&mut self, id: Uuid) -> Option<FoodItem> {
        let position = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(position);
        tracing::info!(item_id = %id, name = %removed.name, "Menu item removed");
        Some(removed)
    }

    /// Flip availability; returns the new flag, or None if the id is unknown.
    pub fn toggle_availability(&mut self, id: Uuid) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.available = !item.available;
        tracing::info!(item_id = %id, available = item.available, "Menu item availability toggled");
        Some(item.available)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
