//! Containers that hold items behind an openable, lockable lid.

use serde::{Deserialize, Serialize};

use crate::ids::{ExaminableId, ItemId, RoomId};

/// A chest, box, cabinet, or similar holder of items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    /// Room the container sits in, if placed anywhere.
    pub room: Option<RoomId>,
    /// The noun used to refer to this container.
    pub name: String,
    /// Capitalized name for output, when `name` is not presentable.
    pub display_name: Option<String>,
    /// Description shown when the container is examined.
    pub description: String,
    /// Alternative nouns that resolve to this container.
    pub keywords: Vec<String>,
    /// Description shown while open with contents.
    pub open_description: Option<String>,
    /// Description shown while open and empty.
    pub empty_description: Option<String>,
    /// Items the container starts with.
    pub contents: Vec<ItemId>,
    /// Whether the container starts open.
    pub starts_open: bool,
    /// Whether the container can be locked and unlocked at all.
    pub lockable: bool,
    /// Whether the container starts locked.
    pub starts_locked: bool,
    /// Key required to lock or unlock.
    pub key_item: Option<ItemId>,
    /// Message for a successful unlock.
    pub unlock_message: Option<String>,
    /// Message for an open attempt while locked.
    pub locked_message: Option<String>,
    /// List this container when the player looks around.
    pub show_in_look: bool,
    /// The container starts invisible and must be revealed.
    pub hidden: bool,
    /// Examinable whose examination reveals this container.
    pub revealed_by: Option<ExaminableId>,
    /// Message surfaced when the reveal happens in the player's room.
    pub reveal_message: Option<String>,
}

impl Container {
    /// Create a visible, closed, unlockable container.
    pub fn new(room: RoomId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            room: Some(room),
            name: name.into(),
            display_name: None,
            description: description.into(),
            keywords: Vec::new(),
            open_description: None,
            empty_description: None,
            contents: Vec::new(),
            starts_open: false,
            lockable: false,
            starts_locked: false,
            key_item: None,
            unlock_message: None,
            locked_message: None,
            show_in_look: true,
            hidden: false,
            revealed_by: None,
            reveal_message: None,
        }
    }

    /// Name to show the player.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Whether a phrase matches this container's name or keywords.
    pub fn matches_phrase(&self, phrase: &str) -> bool {
        let phrase = phrase.to_lowercase();
        self.name.to_lowercase() == phrase
            || self.keywords.iter().any(|k| k.to_lowercase() == phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_closed_and_visible() {
        let chest = Container::new(RoomId(1), "chest", "An oak chest.");
        assert!(!chest.starts_open);
        assert!(!chest.starts_locked);
        assert!(!chest.hidden);
        assert!(chest.show_in_look);
    }

    #[test]
    fn phrase_matching_is_exact_per_keyword() {
        let mut chest = Container::new(RoomId(1), "chest", "An oak chest.");
        chest.keywords = vec!["box".to_string()];
        assert!(chest.matches_phrase("chest"));
        assert!(chest.matches_phrase("BOX"));
        assert!(!chest.matches_phrase("che"));
    }
}
