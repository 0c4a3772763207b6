//! Movement, room descriptions, deadly rooms, darkness, and visits.

use gloam_world::{DescriptionCondition, Direction, RoomId};

use crate::context;
use crate::error::EngineResult;
use crate::store::{SaveId, SaveStore};

use super::{StateEngine, LIT_STATE};

/// What happened when the player entered a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomEntry {
    /// The room entered.
    pub room: RoomId,
    /// The description to show on entry.
    pub description: String,
    /// Damage taken on entry, for deadly rooms without protection.
    pub damage_taken: u32,
    /// The entry reduced health to zero.
    pub died: bool,
    /// The room is the winning room and the game is now complete.
    pub won: bool,
    /// The room is dark and the player carries no burning light source.
    pub dark: bool,
    /// The final message for a death or a win, when authored.
    pub ending_message: Option<String>,
}

/// The result of trying to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player entered the neighboring room.
    Moved(RoomEntry),
    /// No exit leads that way.
    NoExit,
    /// The exit exists but a pending interaction or action still bars it.
    Blocked {
        /// The barring entity's failure message, or a generic one.
        message: String,
    },
}

impl<S: SaveStore> StateEngine<'_, S> {
    /// Move the player one room in a direction.
    pub fn move_player(&mut self, save: SaveId, direction: Direction) -> EngineResult<MoveOutcome> {
        let record = self.record(save)?;
        let here = self.require_room(record.current_room)?;
        let Some(target) = here.neighbor(direction) else {
            return Ok(MoveOutcome::NoExit);
        };

        if let Some(message) = self.exit_barrier(save, record.current_room, target)? {
            return Ok(MoveOutcome::Blocked { message });
        }

        let entry = self.enter_room(save, target)?;
        Ok(MoveOutcome::Moved(entry))
    }

    /// Return to the previously remembered room, while the memory lasts.
    pub fn go_back(&mut self, save: SaveId) -> EngineResult<Option<RoomEntry>> {
        self.record(save)?;
        let now = self.now();
        let Some(previous) = context::recall_room(self.store(), save, self.config(), now) else {
            return Ok(None);
        };
        Ok(Some(self.enter_room(save, previous)?))
    }

    /// Whether any exit from `from` to `to` is still barred by an
    /// uncompleted unlocking interaction or room action.
    fn exit_barrier(
        &self,
        save: SaveId,
        from: RoomId,
        to: RoomId,
    ) -> EngineResult<Option<String>> {
        for &id in self.world().examinables_in_room(from) {
            let obj = self.require_examinable(id)?;
            if obj.unlocks_room == Some(to) && !self.store().is_interaction_completed(save, id) {
                return Ok(Some(obj.failure_message.clone().unwrap_or_else(|| {
                    "Something still blocks the way.".to_string()
                })));
            }
        }
        for &id in self.world().actions_in_room(from) {
            let action = self.require_action(id)?;
            if action.unlocks_room == Some(to) && !self.store().is_action_completed(save, id) {
                return Ok(Some(action.failure_message.clone().unwrap_or_else(|| {
                    "Something still blocks the way.".to_string()
                })));
            }
        }
        Ok(None)
    }

    /// Put the player in a room and settle everything entry implies:
    /// context, visit count, deadly-room damage, darkness, and the win
    /// condition.
    pub fn enter_room(&mut self, save: SaveId, target: RoomId) -> EngineResult<RoomEntry> {
        let mut record = self.record(save)?;
        let room = self.require_room(target)?;
        let now = self.now();

        context::remember_room(self.store_mut(), save, record.current_room, now);
        record.current_room = target;
        self.store_mut().record_visit(save, target, now);

        let mut damage_taken = 0;
        let mut died = false;
        let mut won = false;
        let mut ending_message = None;

        if room.is_deadly && !self.can_survive_deadly_room(save, target)? {
            damage_taken = room.damage;
            record.health = record.health.saturating_sub(room.damage);
            if record.health == 0 {
                died = true;
                record.dead = true;
                record.completed = true;
                ending_message = room.death_message.clone();
            }
        }

        if !died && room.is_winning {
            won = true;
            record.completed = true;
            record.score += self.config().win_score;
            ending_message = room.win_message.clone();
        }

        self.store_mut().set_save(save, record);
        tracing::debug!(%save, room = %target, damage_taken, died, won, "room entered");

        let dark = !self.is_room_lit(save, target)?;
        let description = if dark {
            "It is pitch dark here. You cannot see a thing.".to_string()
        } else {
            self.room_description(save, target)?
        };

        Ok(RoomEntry {
            room: target,
            description,
            damage_taken,
            died,
            won,
            dark,
            ending_message,
        })
    }

    /// Whether the player would enter a deadly room unharmed: the room
    /// must name a protection item, the player must carry it, and any
    /// required state must match.
    pub fn can_survive_deadly_room(&self, save: SaveId, room: RoomId) -> EngineResult<bool> {
        let definition = self.require_room(room)?;
        if !definition.is_deadly {
            return Ok(true);
        }
        let Some(protection) = definition.protection_item else {
            return Ok(false);
        };
        if !self.store().holds(save, protection) {
            return Ok(false);
        }
        match &definition.required_protection_state {
            Some(state) => self.is_item_in_state(save, protection, state),
            None => Ok(true),
        }
    }

    /// Whether the player can see in a room. Dark rooms need the room's
    /// designated light source carried and lit.
    pub fn is_room_lit(&self, save: SaveId, room: RoomId) -> EngineResult<bool> {
        let definition = self.require_room(room)?;
        if !definition.is_dark {
            return Ok(true);
        }
        let Some(source) = definition.light_source_item else {
            return Ok(false);
        };
        if !self.store().holds(save, source) {
            return Ok(false);
        }
        self.is_item_in_state(save, source, LIT_STATE)
    }

    /// The description for a room right now: the highest-priority
    /// conditional description whose condition holds, else the room's
    /// static text.
    pub fn room_description(&self, save: SaveId, room: RoomId) -> EngineResult<String> {
        let definition = self.require_room(room)?;
        for candidate in self.world().descriptions_for_room(room) {
            if self.condition_holds(save, &candidate.condition)? {
                return Ok(candidate.text.clone());
            }
        }
        Ok(definition.description.clone())
    }

    fn condition_holds(
        &self,
        save: SaveId,
        condition: &DescriptionCondition,
    ) -> EngineResult<bool> {
        Ok(match condition {
            DescriptionCondition::Default | DescriptionCondition::Always => true,
            DescriptionCondition::HasItem { item, owned } => {
                self.store().holds(save, *item) == *owned
            }
            DescriptionCondition::ItemInState { item, state } => {
                self.store().holds(save, *item) && self.is_item_in_state(save, *item, state)?
            }
            DescriptionCondition::ActionCompleted { action, completed } => {
                self.store().is_action_completed(save, *action) == *completed
            }
        })
    }

    /// Whether the player has ever entered a room in this save.
    pub fn has_visited(&self, save: SaveId, room: RoomId) -> EngineResult<bool> {
        self.require_room(room)?;
        self.record(save)?;
        Ok(self.store().visit(save, room).is_some())
    }
}
