//! Room actions: named feats the player can perform in a specific room.

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, RoomId};

/// A special action available in one room, such as prying open a grate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomAction {
    /// Room the action belongs to.
    pub room: RoomId,
    /// Name the player invokes the action by.
    pub name: String,
    /// Description of the action.
    pub description: String,
    /// Item the player must hold to perform the action.
    pub required_item: Option<ItemId>,
    /// Message for a successful performance.
    pub success_message: Option<String>,
    /// Message for an attempt without the required item.
    pub failure_message: Option<String>,
    /// Room unlocked by completing the action.
    pub unlocks_room: Option<RoomId>,
    /// Whether the action can be performed more than once.
    pub repeatable: bool,
}

impl RoomAction {
    /// Create a repeatable action with no requirements.
    pub fn new(room: RoomId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            room,
            name: name.into(),
            description: description.into(),
            required_item: None,
            success_message: None,
            failure_message: None,
            unlocks_room: None,
            repeatable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_action_is_repeatable() {
        let action = RoomAction::new(RoomId(1), "pry grate", "Pry the grate open.");
        assert!(action.repeatable);
        assert!(action.required_item.is_none());
    }
}
