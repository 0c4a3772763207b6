//! The world state engine: per-save mutable state layered over static
//! definitions.
//!
//! One [`StateEngine`] serves any number of saves against one world. All
//! mutation goes through the [`SaveStore`]; static definitions are never
//! touched. Operations return typed outcomes or [`EngineError`] values;
//! only `Unknown*` errors abort a turn.

/// Activation, examination, interactions, and room actions.
pub mod activate;
/// Container lid and lock state.
pub mod containers;
/// Item state, inventory, and item use.
pub mod items;
/// The reveal trigger graph.
pub mod reveal;
/// Movement, descriptions, deadly rooms, and darkness.
pub mod rooms;

use chrono::{DateTime, Utc};

use gloam_world::{
    ActionId, Container, ContainerId, Examinable, ExaminableId, Item, ItemId, Room, RoomAction,
    RoomId, World,
};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::store::{SaveId, SaveRecord, SaveStore};

pub use activate::{Activation, ActionOutcome, Examination, Interaction};
pub use containers::ContainerView;
pub use items::ItemUse;
pub use reveal::{RevealOutcome, RevealedEntity};
pub use rooms::{MoveOutcome, RoomEntry};

/// The state every item is in until something sets it otherwise.
pub const DEFAULT_ITEM_STATE: &str = "default";

/// The item state that counts as a burning light source.
pub const LIT_STATE: &str = "lit";

/// Per-save game state layered over an immutable [`World`].
pub struct StateEngine<'w, S: SaveStore> {
    world: &'w World,
    store: S,
    config: EngineConfig,
}

impl<'w, S: SaveStore> StateEngine<'w, S> {
    /// Create an engine over a world and a store.
    pub fn new(world: &'w World, store: S, config: EngineConfig) -> Self {
        Self {
            world,
            store,
            config,
        }
    }

    /// The static world this engine plays in.
    pub fn world(&self) -> &'w World {
        self.world
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Begin a new playthrough in the world's starting room.
    pub fn start_save(&mut self) -> SaveId {
        let save = SaveId::new();
        let room = self.world.starting_room();
        let record = SaveRecord::new(room, self.config.starting_health);
        let now = self.now();
        self.store.create_save(save, record);
        self.store.record_visit(save, room, now);
        tracing::info!(%save, %room, "save started");
        save
    }

    /// The top-level record for a save.
    pub fn record(&self, save: SaveId) -> EngineResult<SaveRecord> {
        self.store.save(save).ok_or(EngineError::UnknownSave(save))
    }

    /// Delete a save and everything recorded under it.
    pub fn delete_save(&mut self, save: SaveId) {
        tracing::info!(%save, "save deleted");
        self.store.delete_save(save);
    }

    /// Count one completed command against a save, returning the new
    /// turn number.
    pub fn advance_turn(&mut self, save: SaveId) -> EngineResult<u32> {
        let mut record = self.record(save)?;
        record.turn_count += 1;
        self.store.set_save(save, record);
        Ok(record.turn_count)
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    pub(crate) fn require_room(&self, id: RoomId) -> EngineResult<&'w Room> {
        self.world.room(id).ok_or(EngineError::UnknownRoom(id))
    }

    pub(crate) fn require_item(&self, id: ItemId) -> EngineResult<&'w Item> {
        self.world.item(id).ok_or(EngineError::UnknownItem(id))
    }

    pub(crate) fn require_examinable(&self, id: ExaminableId) -> EngineResult<&'w Examinable> {
        self.world
            .examinable(id)
            .ok_or(EngineError::UnknownExaminable(id))
    }

    pub(crate) fn require_container(&self, id: ContainerId) -> EngineResult<&'w Container> {
        self.world
            .container(id)
            .ok_or(EngineError::UnknownContainer(id))
    }

    pub(crate) fn require_action(&self, id: ActionId) -> EngineResult<&'w RoomAction> {
        self.world.action(id).ok_or(EngineError::UnknownAction(id))
    }

    pub(crate) fn award_score(&mut self, save: SaveId, points: u32) -> EngineResult<()> {
        let mut record = self.record(save)?;
        record.score += points;
        self.store.set_save(save, record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use gloam_world::{Room, WorldBuilder};

    fn tiny_world() -> World {
        let mut builder = WorldBuilder::new();
        let mut room = Room::new("Origin", "The beginning.");
        room.is_starting = true;
        builder.room(RoomId(1), room).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn new_save_starts_in_the_starting_room() {
        let world = tiny_world();
        let mut engine = StateEngine::new(&world, MemoryStore::new(), EngineConfig::default());
        let save = engine.start_save();

        let record = engine.record(save).unwrap();
        assert_eq!(record.current_room, RoomId(1));
        assert_eq!(record.health, 100);
        assert_eq!(record.turn_count, 0);
        assert!(!record.completed);
        // Starting room counts as visited.
        assert_eq!(engine.store().visit(save, RoomId(1)).unwrap().count, 1);
    }

    #[test]
    fn turns_count_up() {
        let world = tiny_world();
        let mut engine = StateEngine::new(&world, MemoryStore::new(), EngineConfig::default());
        let save = engine.start_save();
        assert_eq!(engine.advance_turn(save).unwrap(), 1);
        assert_eq!(engine.advance_turn(save).unwrap(), 2);
    }

    #[test]
    fn deleted_save_is_unknown() {
        let world = tiny_world();
        let mut engine = StateEngine::new(&world, MemoryStore::new(), EngineConfig::default());
        let save = engine.start_save();
        engine.delete_save(save);
        assert!(matches!(
            engine.record(save),
            Err(EngineError::UnknownSave(_))
        ));
    }
}
