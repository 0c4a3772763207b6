//! Item state, inventory management, and item use.

use gloam_world::{ItemId, RevealTrigger};

use crate::context;
use crate::error::{EngineError, EngineResult};
use crate::store::{SaveId, SaveStore};

use super::{StateEngine, DEFAULT_ITEM_STATE};

/// What happened when an item was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUse {
    /// The item's use message, when authored.
    pub message: Option<String>,
    /// Health restored by this use.
    pub healed: u32,
    /// Uses remaining, for limited-use items.
    pub remaining: Option<u32>,
    /// The item was spent and removed from play.
    pub consumed: bool,
}

impl<S: SaveStore> StateEngine<'_, S> {
    /// The current state of an item, `"default"` until set.
    pub fn item_state(&self, save: SaveId, item: ItemId) -> EngineResult<String> {
        self.require_item(item)?;
        Ok(self
            .store()
            .item_state(save, item)
            .unwrap_or_else(|| DEFAULT_ITEM_STATE.to_string()))
    }

    /// Set the state of an item. Transitions are always explicit.
    pub fn set_item_state(&mut self, save: SaveId, item: ItemId, state: &str) -> EngineResult<()> {
        self.require_item(item)?;
        self.record(save)?;
        tracing::debug!(%save, %item, state, "item state set");
        self.store_mut().set_item_state(save, item, state);
        Ok(())
    }

    /// Whether an item is currently in a given state.
    pub fn is_item_in_state(&self, save: SaveId, item: ItemId, state: &str) -> EngineResult<bool> {
        Ok(self.item_state(save, item)? == state)
    }

    /// The items a save is carrying, in pickup order.
    pub fn inventory(&self, save: SaveId) -> EngineResult<Vec<ItemId>> {
        self.record(save)?;
        Ok(self.store().inventory(save))
    }

    /// Pick an item up from the current room.
    ///
    /// Returns any reveal messages the pickup triggered. The first pickup
    /// of an item is recorded permanently, so the room's static copy never
    /// reappears even after the item is dropped elsewhere.
    pub fn take_item(&mut self, save: SaveId, item: ItemId) -> EngineResult<Vec<String>> {
        let definition = self.require_item(item)?;
        let record = self.record(save)?;
        if !definition.collectable {
            return Err(EngineError::NotCollectable(definition.name.clone()));
        }
        if self.store().holds(save, item) {
            return Err(EngineError::AlreadyHeld(definition.name.clone()));
        }

        let now = self.now();
        let room = record.current_room;
        self.store_mut().unplace_item(save, item, room);
        self.store_mut().mark_picked_up(save, item, now);
        self.store_mut().add_to_inventory(save, item, now);
        context::remember_item(self.store_mut(), save, item, now);
        tracing::debug!(%save, %item, "item taken");

        let outcome = self.check_and_reveal(save, RevealTrigger::ItemPickedUp(item))?;
        Ok(outcome.messages)
    }

    /// Drop a carried item into the current room.
    pub fn drop_item(&mut self, save: SaveId, item: ItemId) -> EngineResult<()> {
        let definition = self.require_item(item)?;
        let record = self.record(save)?;
        if !self.store_mut().remove_from_inventory(save, item) {
            return Err(EngineError::NotHeld(definition.name.clone()));
        }
        let now = self.now();
        self.store_mut()
            .place_item(save, item, record.current_room, now);
        context::remember_item(self.store_mut(), save, item, now);
        tracing::debug!(%save, %item, room = %record.current_room, "item dropped");
        Ok(())
    }

    /// Use a carried item: bump its counter, apply healing, and consume
    /// it when its last use is spent.
    pub fn use_item(&mut self, save: SaveId, item: ItemId) -> EngineResult<ItemUse> {
        let definition = self.require_item(item)?;
        let mut record = self.record(save)?;
        if !self.store().holds(save, item) {
            return Err(EngineError::NotHeld(definition.name.clone()));
        }

        if definition.is_limited_use() && self.store().item_uses(save, item) >= definition.max_uses
        {
            return Err(EngineError::Exhausted {
                name: definition.name.clone(),
                message: definition
                    .empty_description
                    .clone()
                    .unwrap_or_else(|| format!("The {} is spent.", definition.name)),
            });
        }

        let uses = self.store_mut().increment_item_uses(save, item);
        if definition.healing > 0 {
            record.health += definition.healing;
            self.store_mut().set_save(save, record);
        }

        let mut consumed = false;
        let remaining = if definition.is_limited_use() {
            let left = definition.max_uses.saturating_sub(uses);
            if left == 0 && definition.disappears_when_empty {
                let now = self.now();
                self.store_mut().remove_from_inventory(save, item);
                self.store_mut().mark_removed(save, item, now);
                consumed = true;
            }
            Some(left)
        } else {
            None
        };

        let now = self.now();
        context::remember_item(self.store_mut(), save, item, now);
        tracing::debug!(%save, %item, uses, consumed, "item used");

        Ok(ItemUse {
            message: definition.use_message.clone(),
            healed: definition.healing,
            remaining,
            consumed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::store::MemoryStore;
    use gloam_world::{Item, Room, RoomId, World, WorldBuilder};

    fn world() -> World {
        let mut builder = WorldBuilder::new();
        let mut room = Room::new("Shed", "A toolshed.");
        room.is_starting = true;
        builder.room(RoomId(1), room).unwrap();

        let mut lantern = Item::new("lantern", "A brass lantern.");
        lantern.home_room = Some(RoomId(1));
        builder.item(ItemId(1), lantern).unwrap();

        let mut statue = Item::new("statue", "Far too heavy.");
        statue.collectable = false;
        statue.home_room = Some(RoomId(1));
        builder.item(ItemId(2), statue).unwrap();

        let mut potion = Item::new("potion", "A healing draught.");
        potion.healing = 25;
        potion.max_uses = 2;
        potion.empty_description = Some("The bottle is empty.".to_string());
        potion.disappears_when_empty = true;
        potion.home_room = Some(RoomId(1));
        builder.item(ItemId(3), potion).unwrap();

        builder.build().unwrap()
    }

    fn engine(world: &World) -> StateEngine<'_, MemoryStore> {
        StateEngine::new(world, MemoryStore::new(), EngineConfig::default())
    }

    #[test]
    fn item_state_round_trip_with_default() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();

        assert_eq!(engine.item_state(save, ItemId(1)).unwrap(), "default");
        engine.set_item_state(save, ItemId(1), "lit").unwrap();
        assert_eq!(engine.item_state(save, ItemId(1)).unwrap(), "lit");
        assert!(engine.is_item_in_state(save, ItemId(1), "lit").unwrap());
    }

    #[test]
    fn take_and_drop_move_the_item_between_pools() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();

        engine.take_item(save, ItemId(1)).unwrap();
        assert_eq!(engine.inventory(save).unwrap(), vec![ItemId(1)]);
        assert!(engine.store().was_picked_up(save, ItemId(1)));

        engine.drop_item(save, ItemId(1)).unwrap();
        assert!(engine.inventory(save).unwrap().is_empty());
        assert_eq!(
            engine.store().placed_in_room(save, RoomId(1)),
            vec![ItemId(1)]
        );
    }

    #[test]
    fn fixed_items_cannot_be_taken() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();
        assert!(matches!(
            engine.take_item(save, ItemId(2)),
            Err(EngineError::NotCollectable(_))
        ));
    }

    #[test]
    fn taking_twice_is_rejected() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();
        engine.take_item(save, ItemId(1)).unwrap();
        assert!(matches!(
            engine.take_item(save, ItemId(1)),
            Err(EngineError::AlreadyHeld(_))
        ));
    }

    #[test]
    fn dropping_an_uncarried_item_is_rejected() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();
        assert!(matches!(
            engine.drop_item(save, ItemId(1)),
            Err(EngineError::NotHeld(_))
        ));
    }

    #[test]
    fn limited_item_heals_then_runs_out() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();
        engine.take_item(save, ItemId(3)).unwrap();

        let first = engine.use_item(save, ItemId(3)).unwrap();
        assert_eq!(first.healed, 25);
        assert_eq!(first.remaining, Some(1));
        assert!(!first.consumed);
        assert_eq!(engine.record(save).unwrap().health, 125);

        let second = engine.use_item(save, ItemId(3)).unwrap();
        assert_eq!(second.remaining, Some(0));
        assert!(second.consumed);
        assert!(engine.inventory(save).unwrap().is_empty());
        assert!(engine.store().is_removed(save, ItemId(3)));

        // The removed item is gone, not just empty.
        assert!(matches!(
            engine.use_item(save, ItemId(3)),
            Err(EngineError::NotHeld(_))
        ));
    }

    #[test]
    fn exhausted_item_reports_its_empty_description() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();

        // A potion that lingers when empty.
        engine.take_item(save, ItemId(3)).unwrap();
        engine.store_mut().increment_item_uses(save, ItemId(3));
        engine.store_mut().increment_item_uses(save, ItemId(3));
        let err = engine.use_item(save, ItemId(3)).unwrap_err();
        let EngineError::Exhausted { message, .. } = err else {
            panic!("expected exhaustion");
        };
        assert_eq!(message, "The bottle is empty.");
    }
}
