use crate::{Component, ComponentKind};

/// Stack of items of the same type.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub item_id: String,
    pub quantity: u32,
    /// Weight of a single item.
    pub weight: f32,
}

/// Items carried by the game object, stacked by item identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    items: Vec<InventoryItem>,
    max_slots: usize,
}

impl Inventory {
    pub fn new(max_slots: usize) -> Self {
        Self {
            items: Vec::new(),
            max_slots,
        }
    }

    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    /// Adds items to the existing stack or to a new slot.
    ///
    /// Returns `false` and leaves the inventory untouched if `quantity` is zero,
    /// if the stack would overflow or if a new slot was needed but all slots are taken.
    ///
    pub fn add_item(&mut self, item_id: &str, quantity: u32, weight: f32) -> bool {
        if quantity == 0 {
            return false;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.item_id == item_id) {
            let Some(total) = item.quantity.checked_add(quantity) else {
                return false;
            };
            item.quantity = total;
            return true;
        }
        if self.items.len() >= self.max_slots {
            return false;
        }
        self.items.push(InventoryItem {
            item_id: item_id.to_string(),
            quantity,
            weight,
        });
        true
    }

    /// Removes items from the stack, freeing the slot once it is empty.
    ///
    /// Returns `false` if there was no such item.
    ///
    pub fn remove_item(&mut self, item_id: &str, quantity: u32) -> bool {
        let Some(index) = self.items.iter().position(|item| item.item_id == item_id) else {
            return false;
        };
        let item = &mut self.items[index];
        item.quantity = item.quantity.saturating_sub(quantity);
        if item.quantity == 0 {
            self.items.remove(index);
        }
        true
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Count of occupied slots.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_weight(&self) -> f32 {
        self.items
            .iter()
            .map(|item| item.weight * item.quantity as f32)
            .sum()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(50)
    }
}

impl Component for Inventory {
    const KIND: ComponentKind = ComponentKind::new("inventory");
}
