//! Examinable scenery objects and the reveal triggers that expose them.

use serde::{Deserialize, Serialize};

use crate::ids::{ActionId, ExaminableId, ItemId, RoomId};
use crate::room::Direction;

/// The event that reveals a hidden entity.
///
/// Each hidden entity declares at most one trigger; on the matching event
/// the reveal happens exactly once per save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealTrigger {
    /// A specific room action was completed.
    ActionCompleted(ActionId),
    /// A specific examinable was examined.
    Examined(ExaminableId),
    /// A specific item was picked up.
    ItemPickedUp(ItemId),
}

/// An object fixed in a room that the player can examine and, sometimes,
/// activate or unlock things with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Examinable {
    /// Room this object belongs to.
    pub room: RoomId,
    /// The noun used to refer to this object.
    pub name: String,
    /// Capitalized name for output, when `name` is not presentable.
    pub display_name: Option<String>,
    /// Text shown when the object is examined.
    pub description: String,
    /// Shorter text used in room listings.
    pub look_description: Option<String>,
    /// Alternative nouns that resolve to this object.
    pub keywords: Vec<String>,
    /// The object starts invisible and must be revealed.
    pub hidden: bool,
    /// List this object when the player looks around.
    pub show_in_look: bool,
    /// Event that reveals this object, when hidden.
    pub revealed_by: Option<RevealTrigger>,
    /// Message surfaced when the reveal happens in the player's room.
    pub reveal_message: Option<String>,
    /// Whether the reveal message should be surfaced at all.
    pub show_reveal_message: bool,
    /// Item that must be applied to interact with this object.
    pub required_item: Option<ItemId>,
    /// Room unlocked by a successful interaction.
    pub unlocks_room: Option<RoomId>,
    /// Direction the unlocked room is reached through.
    pub unlocks_direction: Option<Direction>,
    /// Message for a successful interaction.
    pub success_message: Option<String>,
    /// Message for an interaction attempted without the required item.
    pub failure_message: Option<String>,
    /// Whether the object can be activated like a switch.
    pub activatable: bool,
    /// Activations allowed before the object is spent. Zero means unlimited.
    pub max_uses: u32,
    /// Message shown on activation.
    pub activation_message: Option<String>,
    /// Description once the object is spent.
    pub empty_description: Option<String>,
    /// Entity revealed when this object is activated.
    pub reveals: Option<ExaminableId>,
}

impl Examinable {
    /// Create a visible examinable in a room.
    pub fn new(room: RoomId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            room,
            name: name.into(),
            display_name: None,
            description: description.into(),
            look_description: None,
            keywords: Vec::new(),
            hidden: false,
            show_in_look: true,
            revealed_by: None,
            reveal_message: None,
            show_reveal_message: true,
            required_item: None,
            unlocks_room: None,
            unlocks_direction: None,
            success_message: None,
            failure_message: None,
            activatable: false,
            max_uses: 0,
            activation_message: None,
            empty_description: None,
            reveals: None,
        }
    }

    /// Name to show the player.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Whether a phrase matches this object's name or one of its keywords
    /// by substring.
    pub fn matches_phrase(&self, phrase: &str) -> bool {
        let phrase = phrase.to_lowercase();
        self.name.to_lowercase().contains(&phrase)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(&phrase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_name() {
        let mut obj = Examinable::new(RoomId(1), "statue", "A marble statue.");
        assert_eq!(obj.display_name(), "statue");
        obj.display_name = Some("Marble Statue".to_string());
        assert_eq!(obj.display_name(), "Marble Statue");
    }

    #[test]
    fn matches_name_and_keywords() {
        let mut obj = Examinable::new(RoomId(1), "bookshelf", "Sagging shelves.");
        obj.keywords = vec!["shelves".to_string(), "books".to_string()];
        assert!(obj.matches_phrase("bookshelf"));
        assert!(obj.matches_phrase("shelf"));
        assert!(obj.matches_phrase("Books"));
        assert!(!obj.matches_phrase("statue"));
    }
}
