//! Conditional room descriptions.
//!
//! A room can carry any number of alternate descriptions, each guarded by
//! a condition and ranked by priority. The engine evaluates them in
//! descending priority order and uses the first one whose condition holds.

use serde::{Deserialize, Serialize};

use crate::ids::{ActionId, ItemId, RoomId};

/// The condition guarding a conditional room description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionCondition {
    /// Matches unconditionally; the authored default text.
    Default,
    /// Matches unconditionally; used for forced overrides at high priority.
    Always,
    /// Player must own (or, with `owned: false`, not own) an item.
    HasItem {
        /// The item being checked.
        item: ItemId,
        /// Whether the item must be held or must be absent.
        owned: bool,
    },
    /// Player must own an item that is currently in a specific state.
    ItemInState {
        /// The item being checked.
        item: ItemId,
        /// Required state, e.g. `"lit"`.
        state: String,
    },
    /// A room action must be completed (or, with `completed: false`, not).
    ActionCompleted {
        /// The action being checked.
        action: ActionId,
        /// Whether the action must be done or must be pending.
        completed: bool,
    },
}

/// One alternate description for a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDescription {
    /// Room the description belongs to.
    pub room: RoomId,
    /// The description text.
    pub text: String,
    /// Higher priorities are evaluated first.
    pub priority: i32,
    /// Condition that must hold for this text to be used.
    pub condition: DescriptionCondition,
}

impl RoomDescription {
    /// Create a default-condition description at priority zero.
    pub fn default_text(room: RoomId, text: impl Into<String>) -> Self {
        Self {
            room,
            text: text.into(),
            priority: 0,
            condition: DescriptionCondition::Default,
        }
    }

    /// Create a conditional description at the given priority.
    pub fn conditional(
        room: RoomId,
        text: impl Into<String>,
        priority: i32,
        condition: DescriptionCondition,
    ) -> Self {
        Self {
            room,
            text: text.into(),
            priority,
            condition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_text_sits_at_priority_zero() {
        let desc = RoomDescription::default_text(RoomId(1), "A bare room.");
        assert_eq!(desc.priority, 0);
        assert_eq!(desc.condition, DescriptionCondition::Default);
    }

    #[test]
    fn conditional_keeps_its_priority() {
        let desc = RoomDescription::conditional(
            RoomId(1),
            "The lantern throws long shadows.",
            100,
            DescriptionCondition::ItemInState {
                item: ItemId(4),
                state: "lit".to_string(),
            },
        );
        assert_eq!(desc.priority, 100);
    }
}
