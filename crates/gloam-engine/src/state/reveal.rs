//! The reveal trigger graph.
//!
//! Hidden examinables and containers each declare at most one trigger.
//! Every trigger event scans the whole world, not just the current room;
//! entity counts are small enough that a full scan is the honest
//! implementation. Reveals are recorded once per (save, entity) and
//! re-checks are no-ops.

use gloam_world::{ContainerId, ExaminableId, RevealTrigger, RoomId};

use crate::error::EngineResult;
use crate::store::{SaveId, SaveStore};

use super::StateEngine;

/// An entity exposed by a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealedEntity {
    /// A hidden examinable became visible.
    Examinable(ExaminableId),
    /// A hidden container became visible.
    Container(ContainerId),
}

/// Everything one trigger event revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealOutcome {
    /// Entities newly revealed by this event, anywhere in the world.
    pub revealed: Vec<RevealedEntity>,
    /// Messages to surface: only reveals in the player's current room
    /// whose entity wants its message shown.
    pub messages: Vec<String>,
}

impl<S: SaveStore> StateEngine<'_, S> {
    /// Process a trigger event: reveal every hidden, not-yet-revealed
    /// entity whose trigger matches, across the whole world.
    pub fn check_and_reveal(
        &mut self,
        save: SaveId,
        event: RevealTrigger,
    ) -> EngineResult<RevealOutcome> {
        let record = self.record(save)?;
        let here = record.current_room;
        let now = self.now();
        let mut outcome = RevealOutcome::default();

        let pending: Vec<(ExaminableId, RoomId, Option<String>, bool)> = self
            .world()
            .all_examinables()
            .filter(|(id, obj)| {
                obj.hidden
                    && obj.revealed_by == Some(event)
                    && !self.store().is_examinable_revealed(save, *id)
            })
            .map(|(id, obj)| {
                (
                    id,
                    obj.room,
                    obj.reveal_message.clone(),
                    obj.show_reveal_message,
                )
            })
            .collect();
        for (id, room, message, show) in pending {
            self.store_mut().mark_examinable_revealed(save, id, now);
            tracing::debug!(%save, examinable = %id, ?event, "examinable revealed");
            outcome.revealed.push(RevealedEntity::Examinable(id));
            if room == here && show {
                if let Some(message) = message {
                    outcome.messages.push(message);
                }
            }
        }

        // Containers are revealed by examination only.
        if let RevealTrigger::Examined(examined) = event {
            let pending: Vec<(ContainerId, Option<RoomId>, Option<String>)> = self
                .world()
                .all_containers()
                .filter(|(id, container)| {
                    container.hidden
                        && container.revealed_by == Some(examined)
                        && !self.store().is_container_revealed(save, *id)
                })
                .map(|(id, container)| (id, container.room, container.reveal_message.clone()))
                .collect();
            for (id, room, message) in pending {
                self.store_mut().mark_container_revealed(save, id, now);
                tracing::debug!(%save, container = %id, "container revealed");
                outcome.revealed.push(RevealedEntity::Container(id));
                if room == Some(here) {
                    if let Some(message) = message {
                        outcome.messages.push(message);
                    }
                }
            }
        }

        Ok(outcome)
    }

    /// Reveal a single designated entity, the one-hop edge cascaded from
    /// an activation. Same recording and message rules as a scan reveal.
    pub(crate) fn reveal_one(
        &mut self,
        save: SaveId,
        target: ExaminableId,
    ) -> EngineResult<RevealOutcome> {
        let record = self.record(save)?;
        let obj = self.require_examinable(target)?;
        let mut outcome = RevealOutcome::default();
        if !obj.hidden || self.store().is_examinable_revealed(save, target) {
            return Ok(outcome);
        }
        let now = self.now();
        let message = obj.reveal_message.clone();
        let surface = obj.room == record.current_room && obj.show_reveal_message;
        self.store_mut().mark_examinable_revealed(save, target, now);
        tracing::debug!(%save, examinable = %target, "examinable revealed by activation");
        outcome.revealed.push(RevealedEntity::Examinable(target));
        if surface {
            if let Some(message) = message {
                outcome.messages.push(message);
            }
        }
        Ok(outcome)
    }
}
