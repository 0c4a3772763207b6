//! Per-save container lid and lock state.
//!
//! Open/closed and locked/unlocked are independent booleans. A container
//! with no shadow record yet is in its authored starting state; the first
//! mutation writes the record.

use gloam_world::{ContainerId, ItemId};

use crate::error::{EngineError, EngineResult};
use crate::store::{ContainerShadow, SaveId, SaveStore};

use super::StateEngine;

/// A container's current state for one save, with its visible contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerView {
    /// Whether the lid is open.
    pub open: bool,
    /// Whether the lock is engaged.
    pub locked: bool,
    /// The items inside, meaningful while open.
    pub contents: Vec<ItemId>,
}

/// The message produced by a successful open or unlock.
fn generic_unlock(name: &str) -> String {
    format!("The {name} unlocks.")
}

impl<S: SaveStore> StateEngine<'_, S> {
    /// The current lid and lock state of a container.
    pub fn container_view(&self, save: SaveId, container: ContainerId) -> EngineResult<ContainerView> {
        let definition = self.require_container(container)?;
        self.record(save)?;
        let shadow = self
            .store()
            .container_shadow(save, container)
            .unwrap_or(ContainerShadow {
                open: definition.starts_open,
                locked: definition.starts_locked,
            });
        Ok(ContainerView {
            open: shadow.open,
            locked: shadow.locked,
            contents: definition.contents.clone(),
        })
    }

    /// Open a container. Fails while locked, and on a lid already open.
    pub fn open_container(&mut self, save: SaveId, container: ContainerId) -> EngineResult<ContainerView> {
        let definition = self.require_container(container)?;
        let view = self.container_view(save, container)?;
        if view.open {
            return Err(EngineError::AlreadyOpen(definition.display_name().to_string()));
        }
        if view.locked {
            return Err(EngineError::Locked {
                name: definition.display_name().to_string(),
                message: definition.locked_message.clone().unwrap_or_else(|| {
                    format!("The {} is locked.", definition.display_name())
                }),
            });
        }
        self.store_mut().set_container_shadow(
            save,
            container,
            ContainerShadow {
                open: true,
                locked: false,
            },
        );
        tracing::debug!(%save, %container, "container opened");
        self.container_view(save, container)
    }

    /// Close a container's lid.
    pub fn close_container(&mut self, save: SaveId, container: ContainerId) -> EngineResult<()> {
        let definition = self.require_container(container)?;
        let view = self.container_view(save, container)?;
        if !view.open {
            return Err(EngineError::AlreadyClosed(definition.display_name().to_string()));
        }
        self.store_mut().set_container_shadow(
            save,
            container,
            ContainerShadow {
                open: false,
                locked: view.locked,
            },
        );
        tracing::debug!(%save, %container, "container closed");
        Ok(())
    }

    /// Lock a container. The lid must already be closed, and the key, if
    /// one is configured, must be in hand.
    pub fn lock_container(&mut self, save: SaveId, container: ContainerId) -> EngineResult<()> {
        let definition = self.require_container(container)?;
        let view = self.container_view(save, container)?;
        if !definition.lockable {
            return Err(EngineError::NotLockable(definition.display_name().to_string()));
        }
        if view.locked {
            return Err(EngineError::AlreadyLocked(definition.display_name().to_string()));
        }
        if view.open {
            return Err(EngineError::NotClosed(definition.display_name().to_string()));
        }
        if let Some(key) = definition.key_item {
            if !self.store().holds(save, key) {
                return Err(EngineError::MissingKey(definition.display_name().to_string()));
            }
        }
        self.store_mut().set_container_shadow(
            save,
            container,
            ContainerShadow {
                open: false,
                locked: true,
            },
        );
        tracing::debug!(%save, %container, "container locked");
        Ok(())
    }

    /// Unlock a container with its key, returning the unlock message.
    pub fn unlock_container(&mut self, save: SaveId, container: ContainerId) -> EngineResult<String> {
        let definition = self.require_container(container)?;
        let view = self.container_view(save, container)?;
        if !definition.lockable {
            return Err(EngineError::NotLockable(definition.display_name().to_string()));
        }
        if !view.locked {
            return Err(EngineError::AlreadyUnlocked(definition.display_name().to_string()));
        }
        if let Some(key) = definition.key_item {
            if !self.store().holds(save, key) {
                return Err(EngineError::MissingKey(definition.display_name().to_string()));
            }
        }
        self.store_mut().set_container_shadow(
            save,
            container,
            ContainerShadow {
                open: view.open,
                locked: false,
            },
        );
        tracing::debug!(%save, %container, "container unlocked");
        Ok(definition
            .unlock_message
            .clone()
            .unwrap_or_else(|| generic_unlock(definition.display_name())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::store::MemoryStore;
    use gloam_world::{Container, Item, Room, RoomId, World, WorldBuilder};

    fn world() -> World {
        let mut builder = WorldBuilder::new();
        let mut room = Room::new("Cellar", "A cellar.");
        room.is_starting = true;
        builder.room(RoomId(1), room).unwrap();

        let mut key = Item::new("key", "A small iron key.");
        key.home_room = Some(RoomId(1));
        builder.item(ItemId(1), key).unwrap();

        let mut coin = Item::new("coin", "A tarnished coin.");
        coin.home_room = None;
        builder.item(ItemId(2), coin).unwrap();

        let mut chest = Container::new(RoomId(1), "chest", "An iron-banded chest.");
        chest.lockable = true;
        chest.starts_locked = true;
        chest.key_item = Some(ItemId(1));
        chest.locked_message = Some("The chest's lock won't give.".to_string());
        chest.unlock_message = Some("The key turns with a clunk.".to_string());
        chest.contents = vec![ItemId(2)];
        builder.container(ContainerId(1), chest).unwrap();

        builder.build().unwrap()
    }

    fn engine(world: &World) -> StateEngine<'_, MemoryStore> {
        StateEngine::new(world, MemoryStore::new(), EngineConfig::default())
    }

    #[test]
    fn untouched_container_reports_authored_defaults() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();
        let view = engine.container_view(save, ContainerId(1)).unwrap();
        assert!(!view.open);
        assert!(view.locked);
        assert_eq!(view.contents, vec![ItemId(2)]);
    }

    #[test]
    fn opening_a_locked_chest_reports_the_authored_message() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();
        let err = engine.open_container(save, ContainerId(1)).unwrap_err();
        let EngineError::Locked { message, .. } = err else {
            panic!("expected locked");
        };
        assert_eq!(message, "The chest's lock won't give.");
    }

    #[test]
    fn unlock_requires_the_key_in_hand() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();

        assert!(matches!(
            engine.unlock_container(save, ContainerId(1)),
            Err(EngineError::MissingKey(_))
        ));

        engine.take_item(save, ItemId(1)).unwrap();
        let message = engine.unlock_container(save, ContainerId(1)).unwrap();
        assert_eq!(message, "The key turns with a clunk.");

        let view = engine.open_container(save, ContainerId(1)).unwrap();
        assert!(view.open);
    }

    #[test]
    fn locking_requires_a_closed_lid() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();
        engine.take_item(save, ItemId(1)).unwrap();
        engine.unlock_container(save, ContainerId(1)).unwrap();
        engine.open_container(save, ContainerId(1)).unwrap();

        assert!(matches!(
            engine.lock_container(save, ContainerId(1)),
            Err(EngineError::NotClosed(_))
        ));

        engine.close_container(save, ContainerId(1)).unwrap();
        engine.lock_container(save, ContainerId(1)).unwrap();
        assert!(engine.container_view(save, ContainerId(1)).unwrap().locked);
    }

    #[test]
    fn double_open_and_double_close_are_rejected() {
        let world = world();
        let mut engine = engine(&world);
        let save = engine.start_save();
        engine.take_item(save, ItemId(1)).unwrap();
        engine.unlock_container(save, ContainerId(1)).unwrap();
        engine.open_container(save, ContainerId(1)).unwrap();
        assert!(matches!(
            engine.open_container(save, ContainerId(1)),
            Err(EngineError::AlreadyOpen(_))
        ));
        engine.close_container(save, ContainerId(1)).unwrap();
        assert!(matches!(
            engine.close_container(save, ContainerId(1)),
            Err(EngineError::AlreadyClosed(_))
        ));
    }
}
