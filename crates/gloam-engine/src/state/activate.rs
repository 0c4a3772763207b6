//! Examination, activation, item interactions, and room actions.

use gloam_world::{ActionId, Direction, ExaminableId, ItemId, RevealTrigger, RoomId};

use crate::context;
use crate::error::{EngineError, EngineResult};
use crate::store::{SaveId, SaveStore};

use super::StateEngine;

/// The result of examining an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Examination {
    /// The description to show: the empty description once the object is
    /// spent, otherwise the normal one.
    pub description: String,
    /// Reveal messages the examination triggered.
    pub reveal_messages: Vec<String>,
}

/// The result of activating an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// The authored activation message, when present.
    pub message: Option<String>,
    /// Messages from the one-hop reveal this activation cascaded to.
    pub reveal_messages: Vec<String>,
    /// This activation spent the object's last use.
    pub now_exhausted: bool,
}

/// The result of applying an item to an examinable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    /// Whether the required item was present and the interaction stuck.
    pub success: bool,
    /// The authored success or failure message, with generic fallbacks.
    pub message: String,
    /// The room and direction this interaction unlocked, on success.
    pub unlocked: Option<(RoomId, Option<Direction>)>,
}

/// The result of performing a room action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Whether the required item was present and the action completed.
    pub success: bool,
    /// The authored success or failure message, with generic fallbacks.
    pub message: String,
    /// Score awarded by this performance.
    pub score_awarded: u32,
    /// Reveal messages the completion triggered.
    pub reveal_messages: Vec<String>,
}

impl<S: SaveStore> StateEngine<'_, S> {
    /// Examine an object: produce its description, remember it as the
    /// last-examined object, and fire the examination reveal trigger.
    pub fn examine(&mut self, save: SaveId, object: ExaminableId) -> EngineResult<Examination> {
        let definition = self.require_examinable(object)?;
        self.record(save)?;

        let spent = definition.max_uses > 0
            && self.store().examinable_uses(save, object) >= definition.max_uses;
        let description = if spent {
            definition
                .empty_description
                .clone()
                .unwrap_or_else(|| definition.description.clone())
        } else {
            definition.description.clone()
        };

        let now = self.now();
        context::remember_examined(self.store_mut(), save, object, now);

        let outcome = self.check_and_reveal(save, RevealTrigger::Examined(object))?;
        Ok(Examination {
            description,
            reveal_messages: outcome.messages,
        })
    }

    /// Activate a switch-like object, counting a use and cascading to its
    /// designated reveal, if any.
    pub fn activate(&mut self, save: SaveId, object: ExaminableId) -> EngineResult<Activation> {
        let definition = self.require_examinable(object)?;
        self.record(save)?;

        if !definition.activatable {
            return Err(EngineError::NotActivatable(
                definition.display_name().to_string(),
            ));
        }
        if definition.max_uses > 0
            && self.store().examinable_uses(save, object) >= definition.max_uses
        {
            return Err(EngineError::Exhausted {
                name: definition.display_name().to_string(),
                message: definition.empty_description.clone().unwrap_or_else(|| {
                    format!("The {} no longer responds.", definition.display_name())
                }),
            });
        }

        let now = self.now();
        let uses = self.store_mut().increment_examinable_uses(save, object);
        self.store_mut().mark_activated(save, object, now);
        tracing::debug!(%save, examinable = %object, uses, "activated");

        let reveal_messages = match definition.reveals {
            Some(target) => self.reveal_one(save, target)?.messages,
            None => Vec::new(),
        };

        Ok(Activation {
            message: definition.activation_message.clone(),
            reveal_messages,
            now_exhausted: definition.max_uses > 0 && uses >= definition.max_uses,
        })
    }

    /// Apply an item to an examinable, completing its one-shot
    /// interaction when the requirement is met.
    pub fn apply_item(
        &mut self,
        save: SaveId,
        object: ExaminableId,
        item: ItemId,
    ) -> EngineResult<Interaction> {
        let definition = self.require_examinable(object)?;
        self.require_item(item)?;
        self.record(save)?;

        if self.store().is_interaction_completed(save, object) {
            return Err(EngineError::AlreadyCompleted);
        }

        let satisfied = match definition.required_item {
            Some(required) => required == item && self.store().holds(save, item),
            None => true,
        };
        if !satisfied {
            return Ok(Interaction {
                success: false,
                message: definition
                    .failure_message
                    .clone()
                    .unwrap_or_else(|| "That doesn't work.".to_string()),
                unlocked: None,
            });
        }

        let now = self.now();
        self.store_mut().mark_interaction_completed(save, object, now);
        tracing::debug!(%save, examinable = %object, %item, "interaction completed");

        Ok(Interaction {
            success: true,
            message: definition
                .success_message
                .clone()
                .unwrap_or_else(|| "It works.".to_string()),
            unlocked: definition
                .unlocks_room
                .map(|room| (room, definition.unlocks_direction)),
        })
    }

    /// Perform a named room action: check its requirement, record the
    /// completion, award score, and fire the completion reveal trigger.
    pub fn perform_action(&mut self, save: SaveId, action: ActionId) -> EngineResult<ActionOutcome> {
        let definition = self.require_action(action)?;
        self.record(save)?;

        if self.store().is_action_completed(save, action) && !definition.repeatable {
            return Err(EngineError::AlreadyCompleted);
        }

        let satisfied = match definition.required_item {
            Some(required) => self.store().holds(save, required),
            None => true,
        };
        if !satisfied {
            return Ok(ActionOutcome {
                success: false,
                message: definition
                    .failure_message
                    .clone()
                    .unwrap_or_else(|| "You can't do that yet.".to_string()),
                score_awarded: 0,
                reveal_messages: Vec::new(),
            });
        }

        let now = self.now();
        let first_completion = !self.store().is_action_completed(save, action);
        self.store_mut().mark_action_completed(save, action, now);
        let score_awarded = if first_completion {
            self.award_score(save, self.config().action_score)?;
            self.config().action_score
        } else {
            0
        };
        tracing::debug!(%save, action = %action, score_awarded, "room action performed");

        let outcome = self.check_and_reveal(save, RevealTrigger::ActionCompleted(action))?;
        Ok(ActionOutcome {
            success: true,
            message: definition
                .success_message
                .clone()
                .unwrap_or_else(|| format!("You {}.", definition.name)),
            score_awarded,
            reveal_messages: outcome.messages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::store::MemoryStore;
    use gloam_world::{Examinable, Item, Room, RoomAction, World, WorldBuilder};

    fn world() -> World {
        let mut builder = WorldBuilder::new();
        let mut room = Room::new("Vault", "A vault antechamber.");
        room.is_starting = true;
        builder.room(RoomId(1), room).unwrap();
        builder
            .room(RoomId(2), Room::new("Vault Proper", "The vault."))
            .unwrap();

        let mut crowbar = Item::new("crowbar", "A pry bar.");
        crowbar.home_room = Some(RoomId(1));
        builder.item(ItemId(1), crowbar).unwrap();

        let mut lever = Examinable::new(RoomId(1), "lever", "A heavy lever.");
        lever.activatable = true;
        lever.max_uses = 1;
        lever.activation_message = Some("The lever grinds down.".to_string());
        lever.empty_description = Some("The lever is stuck down.".to_string());
        builder.examinable(ExaminableId(1), lever).unwrap();

        let mut seam = Examinable::new(RoomId(1), "seam", "A seam in the wall.");
        seam.hidden = true;
        seam.revealed_by = Some(RevealTrigger::Examined(ExaminableId(1)));
        seam.reveal_message = Some("You notice a seam in the wall.".to_string());
        seam.required_item = Some(ItemId(1));
        seam.success_message = Some("The seam pries open into a doorway.".to_string());
        seam.failure_message = Some("You need something to pry with.".to_string());
        seam.unlocks_room = Some(RoomId(2));
        seam.unlocks_direction = Some(Direction::North);
        builder.examinable(ExaminableId(2), seam).unwrap();

        let mut dig = RoomAction::new(RoomId(1), "dig", "Dig at the floor.");
        dig.repeatable = false;
        dig.required_item = Some(ItemId(1));
        dig.success_message = Some("You lever up a flagstone.".to_string());
        dig.failure_message = Some("The flagstones won't budge bare-handed.".to_string());
        builder.action(ActionId(1), dig).unwrap();

        builder.build().unwrap()
    }

    fn engine(world: &World) -> StateEngine<'_, MemoryStore> {
        StateEngine::new(world, MemoryStore::new(), EngineConfig::default())
    }

    #[test]
    fn examining_fires_the_reveal_trigger() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();

        let result = engine.examine(save, ExaminableId(1)).unwrap();
        assert_eq!(result.description, "A heavy lever.");
        assert_eq!(
            result.reveal_messages,
            vec!["You notice a seam in the wall.".to_string()]
        );
        // Second look reveals nothing new.
        let again = engine.examine(save, ExaminableId(1)).unwrap();
        assert!(again.reveal_messages.is_empty());
    }

    #[test]
    fn activation_counts_uses_and_exhausts() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();

        let first = engine.activate(save, ExaminableId(1)).unwrap();
        assert_eq!(first.message.as_deref(), Some("The lever grinds down."));
        assert!(first.now_exhausted);

        let err = engine.activate(save, ExaminableId(1)).unwrap_err();
        let EngineError::Exhausted { message, .. } = err else {
            panic!("expected exhaustion");
        };
        assert_eq!(message, "The lever is stuck down.");
    }

    #[test]
    fn non_switches_cannot_be_activated() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();
        assert!(matches!(
            engine.activate(save, ExaminableId(2)),
            Err(EngineError::NotActivatable(_))
        ));
    }

    #[test]
    fn spent_object_shows_its_empty_description() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();
        engine.activate(save, ExaminableId(1)).unwrap();
        let result = engine.examine(save, ExaminableId(1)).unwrap();
        assert_eq!(result.description, "The lever is stuck down.");
    }

    #[test]
    fn interaction_needs_the_required_item_in_hand() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();

        let without = engine.apply_item(save, ExaminableId(2), ItemId(1)).unwrap();
        assert!(!without.success);
        assert_eq!(without.message, "You need something to pry with.");

        engine.take_item(save, ItemId(1)).unwrap();
        let with = engine.apply_item(save, ExaminableId(2), ItemId(1)).unwrap();
        assert!(with.success);
        assert_eq!(with.message, "The seam pries open into a doorway.");
        assert_eq!(with.unlocked, Some((RoomId(2), Some(Direction::North))));

        assert!(matches!(
            engine.apply_item(save, ExaminableId(2), ItemId(1)),
            Err(EngineError::AlreadyCompleted)
        ));
    }

    #[test]
    fn room_action_awards_score_once_and_blocks_repeats() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();
        engine.take_item(save, ItemId(1)).unwrap();

        let done = engine.perform_action(save, ActionId(1)).unwrap();
        assert!(done.success);
        assert_eq!(done.score_awarded, 10);
        assert_eq!(engine.record(save).unwrap().score, 10);

        assert!(matches!(
            engine.perform_action(save, ActionId(1)),
            Err(EngineError::AlreadyCompleted)
        ));
    }

    #[test]
    fn room_action_failure_keeps_it_pending() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();

        let attempt = engine.perform_action(save, ActionId(1)).unwrap();
        assert!(!attempt.success);
        assert_eq!(attempt.message, "The flagstones won't budge bare-handed.");
        assert!(!engine.store().is_action_completed(save, ActionId(1)));
        assert_eq!(engine.record(save).unwrap().score, 0);
    }
}
