//! Items that can be carried, used, and placed.

use serde::{Deserialize, Serialize};

use crate::ids::RoomId;

/// A portable (or fixed) object defined by the world author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Display name of the item.
    pub name: String,
    /// Description shown when the item is examined.
    pub description: String,
    /// Whether the player can pick this item up.
    pub collectable: bool,
    /// Unique plot items win auto-disambiguation ties.
    pub quest_item: bool,
    /// Carry weight.
    pub weight: u32,
    /// Message shown when the item is used without a target.
    pub use_message: Option<String>,
    /// Health restored per use.
    pub healing: u32,
    /// Number of uses before the item is spent. Zero means unlimited.
    pub max_uses: u32,
    /// Description once all uses are spent.
    pub empty_description: Option<String>,
    /// Remove the item from inventory once spent.
    pub disappears_when_empty: bool,
    /// Room the item starts in, if it starts anywhere.
    pub home_room: Option<RoomId>,
}

impl Item {
    /// Create a collectable item with a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            collectable: true,
            quest_item: false,
            weight: 0,
            use_message: None,
            healing: 0,
            max_uses: 0,
            empty_description: None,
            disappears_when_empty: false,
            home_room: None,
        }
    }

    /// Whether this item has a use limit.
    pub fn is_limited_use(&self) -> bool {
        self.max_uses > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_collectable_and_unlimited() {
        let item = Item::new("Brass Lantern", "A dented brass lantern.");
        assert!(item.collectable);
        assert!(!item.quest_item);
        assert!(!item.is_limited_use());
    }

    #[test]
    fn limited_use_requires_positive_max() {
        let mut item = Item::new("Potion", "A small red potion.");
        item.max_uses = 1;
        assert!(item.is_limited_use());
    }
}
