//! The immutable world: flat arenas of definitions plus lookup indexes.

use std::collections::HashMap;

use crate::action::RoomAction;
use crate::container::Container;
use crate::description::{DescriptionCondition, RoomDescription};
use crate::error::{WorldError, WorldResult};
use crate::examinable::{Examinable, RevealTrigger};
use crate::ids::{ActionId, ContainerId, DescriptionId, ExaminableId, ItemId, RoomId};
use crate::item::Item;
use crate::room::Room;
use crate::vocabulary::Lexicon;

/// All static content for one game, immutable once built.
///
/// Definitions live in arenas keyed by id; every cross reference has been
/// validated by [`WorldBuilder::build`], so id lookups that originate from
/// the world itself cannot dangle.
#[derive(Debug, Clone)]
pub struct World {
    rooms: HashMap<RoomId, Room>,
    items: HashMap<ItemId, Item>,
    examinables: HashMap<ExaminableId, Examinable>,
    containers: HashMap<ContainerId, Container>,
    actions: HashMap<ActionId, RoomAction>,
    descriptions: HashMap<DescriptionId, RoomDescription>,
    adjectives: HashMap<ItemId, Vec<String>>,
    lexicon: Lexicon,
    starting_room: RoomId,

    items_by_room: HashMap<RoomId, Vec<ItemId>>,
    examinables_by_room: HashMap<RoomId, Vec<ExaminableId>>,
    containers_by_room: HashMap<RoomId, Vec<ContainerId>>,
    actions_by_room: HashMap<RoomId, Vec<ActionId>>,
    descriptions_by_room: HashMap<RoomId, Vec<DescriptionId>>,
}

impl World {
    /// The room the player starts in.
    pub fn starting_room(&self) -> RoomId {
        self.starting_room
    }

    /// The vocabulary table.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Look up a room by id.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Look up an item by id.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Look up an examinable by id.
    pub fn examinable(&self, id: ExaminableId) -> Option<&Examinable> {
        self.examinables.get(&id)
    }

    /// Look up a container by id.
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(&id)
    }

    /// Look up a room action by id.
    pub fn action(&self, id: ActionId) -> Option<&RoomAction> {
        self.actions.get(&id)
    }

    /// Look up a room description by id.
    pub fn description(&self, id: DescriptionId) -> Option<&RoomDescription> {
        self.descriptions.get(&id)
    }

    /// Adjective tags for an item, highest priority first, lower-cased.
    pub fn adjectives_of(&self, id: ItemId) -> &[String] {
        self.adjectives.get(&id).map_or(&[], |v| v.as_slice())
    }

    /// Items that originate in a room.
    pub fn items_in_room(&self, room: RoomId) -> &[ItemId] {
        self.items_by_room.get(&room).map_or(&[], |v| v.as_slice())
    }

    /// Examinables fixed in a room.
    pub fn examinables_in_room(&self, room: RoomId) -> &[ExaminableId] {
        self.examinables_by_room
            .get(&room)
            .map_or(&[], |v| v.as_slice())
    }

    /// Containers placed in a room.
    pub fn containers_in_room(&self, room: RoomId) -> &[ContainerId] {
        self.containers_by_room
            .get(&room)
            .map_or(&[], |v| v.as_slice())
    }

    /// Actions available in a room.
    pub fn actions_in_room(&self, room: RoomId) -> &[ActionId] {
        self.actions_by_room
            .get(&room)
            .map_or(&[], |v| v.as_slice())
    }

    /// Conditional descriptions for a room, highest priority first.
    pub fn descriptions_for_room(&self, room: RoomId) -> impl Iterator<Item = &RoomDescription> {
        self.descriptions_by_room
            .get(&room)
            .into_iter()
            .flatten()
            .filter_map(|id| self.descriptions.get(id))
    }

    /// Iterate over every examinable with its id.
    pub fn all_examinables(&self) -> impl Iterator<Item = (ExaminableId, &Examinable)> {
        self.examinables.iter().map(|(id, e)| (*id, e))
    }

    /// Iterate over every container with its id.
    pub fn all_containers(&self) -> impl Iterator<Item = (ContainerId, &Container)> {
        self.containers.iter().map(|(id, c)| (*id, c))
    }

    /// Iterate over every room with its id.
    pub fn all_rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().map(|(id, r)| (*id, r))
    }
}

/// Builder that assembles and validates a [`World`].
#[derive(Debug, Default)]
pub struct WorldBuilder {
    rooms: HashMap<RoomId, Room>,
    items: HashMap<ItemId, Item>,
    examinables: HashMap<ExaminableId, Examinable>,
    containers: HashMap<ContainerId, Container>,
    actions: HashMap<ActionId, RoomAction>,
    descriptions: Vec<RoomDescription>,
    adjectives: HashMap<ItemId, Vec<(String, i32)>>,
    lexicon: Lexicon,
}

impl WorldBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room under an id.
    pub fn room(&mut self, id: RoomId, room: Room) -> WorldResult<&mut Self> {
        if self.rooms.insert(id, room).is_some() {
            return Err(WorldError::DuplicateRoom(id));
        }
        Ok(self)
    }

    /// Register an item under an id.
    pub fn item(&mut self, id: ItemId, item: Item) -> WorldResult<&mut Self> {
        if self.items.insert(id, item).is_some() {
            return Err(WorldError::DuplicateItem(id));
        }
        Ok(self)
    }

    /// Register an examinable under an id.
    pub fn examinable(&mut self, id: ExaminableId, obj: Examinable) -> WorldResult<&mut Self> {
        if self.examinables.insert(id, obj).is_some() {
            return Err(WorldError::DuplicateExaminable(id));
        }
        Ok(self)
    }

    /// Register a container under an id.
    pub fn container(&mut self, id: ContainerId, container: Container) -> WorldResult<&mut Self> {
        if self.containers.insert(id, container).is_some() {
            return Err(WorldError::DuplicateContainer(id));
        }
        Ok(self)
    }

    /// Register a room action under an id.
    pub fn action(&mut self, id: ActionId, action: RoomAction) -> WorldResult<&mut Self> {
        if self.actions.insert(id, action).is_some() {
            return Err(WorldError::DuplicateAction(id));
        }
        Ok(self)
    }

    /// Add a conditional room description.
    pub fn description(&mut self, description: RoomDescription) -> &mut Self {
        self.descriptions.push(description);
        self
    }

    /// Tag an item with an adjective at a priority.
    pub fn adjective(&mut self, item: ItemId, word: impl Into<String>, priority: i32) -> &mut Self {
        self.adjectives
            .entry(item)
            .or_default()
            .push((word.into().to_lowercase(), priority));
        self
    }

    /// Replace the vocabulary table.
    pub fn lexicon(&mut self, lexicon: Lexicon) -> &mut Self {
        self.lexicon = lexicon;
        self
    }

    /// Validate every cross reference and produce the immutable world.
    pub fn build(self) -> WorldResult<World> {
        self.validate()?;

        let starting_room = self
            .rooms
            .iter()
            .find(|(_, r)| r.is_starting)
            .map(|(id, _)| *id)
            .ok_or(WorldError::NoStartingRoom)?;

        let mut items_by_room: HashMap<RoomId, Vec<ItemId>> = HashMap::new();
        for (id, item) in &self.items {
            if let Some(room) = item.home_room {
                items_by_room.entry(room).or_default().push(*id);
            }
        }
        let mut examinables_by_room: HashMap<RoomId, Vec<ExaminableId>> = HashMap::new();
        for (id, obj) in &self.examinables {
            examinables_by_room.entry(obj.room).or_default().push(*id);
        }
        let mut containers_by_room: HashMap<RoomId, Vec<ContainerId>> = HashMap::new();
        for (id, container) in &self.containers {
            if let Some(room) = container.room {
                containers_by_room.entry(room).or_default().push(*id);
            }
        }
        let mut actions_by_room: HashMap<RoomId, Vec<ActionId>> = HashMap::new();
        for (id, action) in &self.actions {
            actions_by_room.entry(action.room).or_default().push(*id);
        }

        // Stable listing order for rooms' contents.
        for list in items_by_room.values_mut() {
            list.sort();
        }
        for list in examinables_by_room.values_mut() {
            list.sort();
        }
        for list in containers_by_room.values_mut() {
            list.sort();
        }
        for list in actions_by_room.values_mut() {
            list.sort();
        }

        let mut descriptions = HashMap::new();
        let mut descriptions_by_room: HashMap<RoomId, Vec<(DescriptionId, i32)>> = HashMap::new();
        for (i, desc) in self.descriptions.into_iter().enumerate() {
            let id = DescriptionId(i as u32);
            descriptions_by_room
                .entry(desc.room)
                .or_default()
                .push((id, desc.priority));
            descriptions.insert(id, desc);
        }
        let descriptions_by_room = descriptions_by_room
            .into_iter()
            .map(|(room, mut entries)| {
                entries.sort_by_key(|(_, priority)| std::cmp::Reverse(*priority));
                (room, entries.into_iter().map(|(id, _)| id).collect())
            })
            .collect();

        let adjectives = self
            .adjectives
            .into_iter()
            .map(|(item, mut tags)| {
                tags.sort_by_key(|(_, priority)| std::cmp::Reverse(*priority));
                (item, tags.into_iter().map(|(word, _)| word).collect())
            })
            .collect();

        Ok(World {
            rooms: self.rooms,
            items: self.items,
            examinables: self.examinables,
            containers: self.containers,
            actions: self.actions,
            descriptions,
            adjectives,
            lexicon: self.lexicon,
            starting_room,
            items_by_room,
            examinables_by_room,
            containers_by_room,
            actions_by_room,
            descriptions_by_room,
        })
    }

    fn check_room(&self, id: RoomId) -> WorldResult<()> {
        if self.rooms.contains_key(&id) {
            Ok(())
        } else {
            Err(WorldError::UnknownRoom(id))
        }
    }

    fn check_item(&self, id: ItemId) -> WorldResult<()> {
        if self.items.contains_key(&id) {
            Ok(())
        } else {
            Err(WorldError::UnknownItem(id))
        }
    }

    fn check_examinable(&self, id: ExaminableId) -> WorldResult<()> {
        if self.examinables.contains_key(&id) {
            Ok(())
        } else {
            Err(WorldError::UnknownExaminable(id))
        }
    }

    fn validate(&self) -> WorldResult<()> {
        for room in self.rooms.values() {
            for (_, neighbor) in room.exits() {
                self.check_room(neighbor)?;
            }
            if let Some(item) = room.protection_item {
                self.check_item(item)?;
            }
            if let Some(item) = room.light_source_item {
                self.check_item(item)?;
            }
        }
        for item in self.items.values() {
            if let Some(room) = item.home_room {
                self.check_room(room)?;
            }
        }
        for obj in self.examinables.values() {
            self.check_room(obj.room)?;
            if let Some(item) = obj.required_item {
                self.check_item(item)?;
            }
            if let Some(room) = obj.unlocks_room {
                self.check_room(room)?;
            }
            if let Some(target) = obj.reveals {
                self.check_examinable(target)?;
            }
            match obj.revealed_by {
                Some(RevealTrigger::ActionCompleted(action)) => {
                    if !self.actions.contains_key(&action) {
                        return Err(WorldError::UnknownAction(action));
                    }
                }
                Some(RevealTrigger::Examined(source)) => self.check_examinable(source)?,
                Some(RevealTrigger::ItemPickedUp(item)) => self.check_item(item)?,
                None => {}
            }
        }
        for container in self.containers.values() {
            if let Some(room) = container.room {
                self.check_room(room)?;
            }
            if let Some(key) = container.key_item {
                self.check_item(key)?;
            }
            if let Some(source) = container.revealed_by {
                self.check_examinable(source)?;
            }
            for item in &container.contents {
                self.check_item(*item)?;
            }
        }
        for action in self.actions.values() {
            self.check_room(action.room)?;
            if let Some(item) = action.required_item {
                self.check_item(item)?;
            }
            if let Some(room) = action.unlocks_room {
                self.check_room(room)?;
            }
        }
        for desc in &self.descriptions {
            self.check_room(desc.room)?;
            match &desc.condition {
                DescriptionCondition::HasItem { item, .. } => self.check_item(*item)?,
                DescriptionCondition::ItemInState { item, .. } => self.check_item(*item)?,
                DescriptionCondition::ActionCompleted { action, .. } => {
                    if !self.actions.contains_key(action) {
                        return Err(WorldError::UnknownAction(*action));
                    }
                }
                DescriptionCondition::Default | DescriptionCondition::Always => {}
            }
        }
        Ok(())
    }
}
