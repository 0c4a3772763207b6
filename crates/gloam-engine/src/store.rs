//! Per-save shadow state and the store that persists it.
//!
//! Static definitions are never mutated during play. Everything a
//! playthrough changes is a shadow record keyed by (save, entity), layered
//! over the immutable world; each record family is unique per pair. The
//! [`SaveStore`] trait is the synchronous persistence boundary: the engine
//! treats it as plain get/set calls, and one save is only ever mutated by
//! one turn at a time.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gloam_world::{ActionId, ContainerId, ExaminableId, ItemId, RoomId};

/// Identifier for one playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaveId(pub Uuid);

impl SaveId {
    /// Generate a fresh save id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SaveId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SaveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The top-level record for one save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// The room the player is currently in.
    pub current_room: RoomId,
    /// Commands processed so far.
    pub turn_count: u32,
    /// Accumulated score.
    pub score: u32,
    /// Current health.
    pub health: u32,
    /// The game has ended.
    pub completed: bool,
    /// The player died.
    pub dead: bool,
}

impl SaveRecord {
    /// A fresh save starting in a room with the given health.
    pub fn new(current_room: RoomId, health: u32) -> Self {
        Self {
            current_room,
            turn_count: 0,
            score: 0,
            health,
            completed: false,
            dead: false,
        }
    }
}

/// Per-save open/locked state of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerShadow {
    /// Whether the lid is open.
    pub open: bool,
    /// Whether the lock is engaged.
    pub locked: bool,
}

/// Short-lived references for pronouns and "go back".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerContext {
    /// The last item the player referred to.
    pub last_item: Option<ItemId>,
    /// The last examinable the player examined.
    pub last_examined: Option<ExaminableId>,
    /// The room the player was in before the current one.
    pub last_room: Option<RoomId>,
    /// When any of the above last changed.
    pub updated_at: DateTime<Utc>,
}

impl PlayerContext {
    /// An empty context stamped with the given time.
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            last_item: None,
            last_examined: None,
            last_room: None,
            updated_at: now,
        }
    }
}

/// Visit bookkeeping for one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    /// How many times the room has been entered.
    pub count: u32,
    /// When the room was last entered.
    pub last_visited_at: DateTime<Utc>,
}

/// The synchronous persistence boundary for shadow state.
///
/// Every query and mutation is scoped by save; implementations must keep
/// each record family unique per (save, entity) pair. Deleting a save
/// removes all of its records.
pub trait SaveStore {
    /// Create a save record.
    fn create_save(&mut self, save: SaveId, record: SaveRecord);
    /// Fetch a save record.
    fn save(&self, save: SaveId) -> Option<SaveRecord>;
    /// Replace a save record.
    fn set_save(&mut self, save: SaveId, record: SaveRecord);
    /// Delete a save and cascade all of its shadow records.
    fn delete_save(&mut self, save: SaveId);

    /// Items currently carried, in pickup order.
    fn inventory(&self, save: SaveId) -> Vec<ItemId>;
    /// Whether an item is currently carried.
    fn holds(&self, save: SaveId, item: ItemId) -> bool;
    /// Add an item to the inventory. No-op when already held.
    fn add_to_inventory(&mut self, save: SaveId, item: ItemId, at: DateTime<Utc>);
    /// Remove an item from the inventory. Returns whether it was held.
    fn remove_from_inventory(&mut self, save: SaveId, item: ItemId) -> bool;

    /// Items this save placed in a room.
    fn placed_in_room(&self, save: SaveId, room: RoomId) -> Vec<ItemId>;
    /// Record an item placed in a room.
    fn place_item(&mut self, save: SaveId, item: ItemId, room: RoomId, at: DateTime<Utc>);
    /// Remove a placement record. Returns whether one existed.
    fn unplace_item(&mut self, save: SaveId, item: ItemId, room: RoomId) -> bool;

    /// Whether an item has ever been picked up in this save.
    fn was_picked_up(&self, save: SaveId, item: ItemId) -> bool;
    /// Record the first pickup of an item. Idempotent.
    fn mark_picked_up(&mut self, save: SaveId, item: ItemId, at: DateTime<Utc>);

    /// Whether an item has been removed from play in this save.
    fn is_removed(&self, save: SaveId, item: ItemId) -> bool;
    /// Remove an item from play.
    fn mark_removed(&mut self, save: SaveId, item: ItemId, at: DateTime<Utc>);

    /// The free-form state of an item, if one was ever set.
    fn item_state(&self, save: SaveId, item: ItemId) -> Option<String>;
    /// Set the free-form state of an item.
    fn set_item_state(&mut self, save: SaveId, item: ItemId, state: &str);

    /// How many times an item has been used.
    fn item_uses(&self, save: SaveId, item: ItemId) -> u32;
    /// Bump an item's use counter, returning the new count.
    fn increment_item_uses(&mut self, save: SaveId, item: ItemId) -> u32;

    /// How many times an examinable has been used/activated.
    fn examinable_uses(&self, save: SaveId, object: ExaminableId) -> u32;
    /// Bump an examinable's use counter, returning the new count.
    fn increment_examinable_uses(&mut self, save: SaveId, object: ExaminableId) -> u32;

    /// Whether a hidden examinable has been revealed.
    fn is_examinable_revealed(&self, save: SaveId, object: ExaminableId) -> bool;
    /// Record an examinable reveal. Idempotent.
    fn mark_examinable_revealed(&mut self, save: SaveId, object: ExaminableId, at: DateTime<Utc>);

    /// Whether a hidden container has been revealed.
    fn is_container_revealed(&self, save: SaveId, container: ContainerId) -> bool;
    /// Record a container reveal. Idempotent.
    fn mark_container_revealed(&mut self, save: SaveId, container: ContainerId, at: DateTime<Utc>);

    /// Whether an examinable has ever been activated.
    fn is_activated(&self, save: SaveId, object: ExaminableId) -> bool;
    /// Record an activation.
    fn mark_activated(&mut self, save: SaveId, object: ExaminableId, at: DateTime<Utc>);

    /// Whether a room action has been completed.
    fn is_action_completed(&self, save: SaveId, action: ActionId) -> bool;
    /// Record a completed room action.
    fn mark_action_completed(&mut self, save: SaveId, action: ActionId, at: DateTime<Utc>);

    /// Whether an examinable interaction has been completed.
    fn is_interaction_completed(&self, save: SaveId, object: ExaminableId) -> bool;
    /// Record a completed examinable interaction.
    fn mark_interaction_completed(&mut self, save: SaveId, object: ExaminableId, at: DateTime<Utc>);

    /// Per-save container lid/lock state, if ever touched.
    fn container_shadow(&self, save: SaveId, container: ContainerId) -> Option<ContainerShadow>;
    /// Set per-save container lid/lock state.
    fn set_container_shadow(&mut self, save: SaveId, container: ContainerId, shadow: ContainerShadow);

    /// Visit bookkeeping for a room, if ever entered.
    fn visit(&self, save: SaveId, room: RoomId) -> Option<VisitRecord>;
    /// Record a room entry: first visit starts at one, later visits bump
    /// the count and timestamp.
    fn record_visit(&mut self, save: SaveId, room: RoomId, at: DateTime<Utc>);

    /// The player context, if one was ever written.
    fn player_context(&self, save: SaveId) -> Option<PlayerContext>;
    /// Replace the player context.
    fn set_player_context(&mut self, save: SaveId, context: PlayerContext);
}

/// An in-memory [`SaveStore`] backed by hash maps.
///
/// The reference implementation for tests and for hosts that bring their
/// own durability.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    saves: HashMap<SaveId, SaveRecord>,
    inventories: HashMap<SaveId, Vec<(ItemId, DateTime<Utc>)>>,
    placed: HashMap<SaveId, Vec<(ItemId, RoomId, DateTime<Utc>)>>,
    picked_up: HashMap<SaveId, HashMap<ItemId, DateTime<Utc>>>,
    removed: HashMap<SaveId, HashMap<ItemId, DateTime<Utc>>>,
    item_states: HashMap<(SaveId, ItemId), String>,
    item_uses: HashMap<(SaveId, ItemId), u32>,
    examinable_uses: HashMap<(SaveId, ExaminableId), u32>,
    revealed_examinables: HashMap<(SaveId, ExaminableId), DateTime<Utc>>,
    revealed_containers: HashMap<(SaveId, ContainerId), DateTime<Utc>>,
    activated: HashMap<(SaveId, ExaminableId), DateTime<Utc>>,
    completed_actions: HashMap<(SaveId, ActionId), DateTime<Utc>>,
    completed_interactions: HashMap<(SaveId, ExaminableId), DateTime<Utc>>,
    container_shadows: HashMap<(SaveId, ContainerId), ContainerShadow>,
    visits: HashMap<(SaveId, RoomId), VisitRecord>,
    contexts: HashMap<SaveId, PlayerContext>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of all saves in the store.
    pub fn save_ids(&self) -> Vec<SaveId> {
        self.saves.keys().copied().collect()
    }
}

impl SaveStore for MemoryStore {
    fn create_save(&mut self, save: SaveId, record: SaveRecord) {
        self.saves.insert(save, record);
    }

    fn save(&self, save: SaveId) -> Option<SaveRecord> {
        self.saves.get(&save).copied()
    }

    fn set_save(&mut self, save: SaveId, record: SaveRecord) {
        self.saves.insert(save, record);
    }

    fn delete_save(&mut self, save: SaveId) {
        self.saves.remove(&save);
        self.inventories.remove(&save);
        self.placed.remove(&save);
        self.picked_up.remove(&save);
        self.removed.remove(&save);
        self.contexts.remove(&save);
        self.item_states.retain(|(s, _), _| *s != save);
        self.item_uses.retain(|(s, _), _| *s != save);
        self.examinable_uses.retain(|(s, _), _| *s != save);
        self.revealed_examinables.retain(|(s, _), _| *s != save);
        self.revealed_containers.retain(|(s, _), _| *s != save);
        self.activated.retain(|(s, _), _| *s != save);
        self.completed_actions.retain(|(s, _), _| *s != save);
        self.completed_interactions.retain(|(s, _), _| *s != save);
        self.container_shadows.retain(|(s, _), _| *s != save);
        self.visits.retain(|(s, _), _| *s != save);
    }

    fn inventory(&self, save: SaveId) -> Vec<ItemId> {
        self.inventories
            .get(&save)
            .map(|v| v.iter().map(|(item, _)| *item).collect())
            .unwrap_or_default()
    }

    fn holds(&self, save: SaveId, item: ItemId) -> bool {
        self.inventories
            .get(&save)
            .is_some_and(|v| v.iter().any(|(i, _)| *i == item))
    }

    fn add_to_inventory(&mut self, save: SaveId, item: ItemId, at: DateTime<Utc>) {
        let entries = self.inventories.entry(save).or_default();
        if !entries.iter().any(|(i, _)| *i == item) {
            entries.push((item, at));
        }
    }

    fn remove_from_inventory(&mut self, save: SaveId, item: ItemId) -> bool {
        let Some(entries) = self.inventories.get_mut(&save) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|(i, _)| *i != item);
        entries.len() != before
    }

    fn placed_in_room(&self, save: SaveId, room: RoomId) -> Vec<ItemId> {
        self.placed
            .get(&save)
            .map(|v| {
                v.iter()
                    .filter(|(_, r, _)| *r == room)
                    .map(|(item, _, _)| *item)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn place_item(&mut self, save: SaveId, item: ItemId, room: RoomId, at: DateTime<Utc>) {
        let entries = self.placed.entry(save).or_default();
        if !entries.iter().any(|(i, r, _)| *i == item && *r == room) {
            entries.push((item, room, at));
        }
    }

    fn unplace_item(&mut self, save: SaveId, item: ItemId, room: RoomId) -> bool {
        let Some(entries) = self.placed.get_mut(&save) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|(i, r, _)| !(*i == item && *r == room));
        entries.len() != before
    }

    fn was_picked_up(&self, save: SaveId, item: ItemId) -> bool {
        self.picked_up
            .get(&save)
            .is_some_and(|m| m.contains_key(&item))
    }

    fn mark_picked_up(&mut self, save: SaveId, item: ItemId, at: DateTime<Utc>) {
        self.picked_up
            .entry(save)
            .or_default()
            .entry(item)
            .or_insert(at);
    }

    fn is_removed(&self, save: SaveId, item: ItemId) -> bool {
        self.removed
            .get(&save)
            .is_some_and(|m| m.contains_key(&item))
    }

    fn mark_removed(&mut self, save: SaveId, item: ItemId, at: DateTime<Utc>) {
        self.removed
            .entry(save)
            .or_default()
            .entry(item)
            .or_insert(at);
    }

    fn item_state(&self, save: SaveId, item: ItemId) -> Option<String> {
        self.item_states.get(&(save, item)).cloned()
    }

    fn set_item_state(&mut self, save: SaveId, item: ItemId, state: &str) {
        self.item_states.insert((save, item), state.to_string());
    }

    fn item_uses(&self, save: SaveId, item: ItemId) -> u32 {
        self.item_uses.get(&(save, item)).copied().unwrap_or(0)
    }

    fn increment_item_uses(&mut self, save: SaveId, item: ItemId) -> u32 {
        let count = self.item_uses.entry((save, item)).or_insert(0);
        *count += 1;
        *count
    }

    fn examinable_uses(&self, save: SaveId, object: ExaminableId) -> u32 {
        self.examinable_uses
            .get(&(save, object))
            .copied()
            .unwrap_or(0)
    }

    fn increment_examinable_uses(&mut self, save: SaveId, object: ExaminableId) -> u32 {
        let count = self.examinable_uses.entry((save, object)).or_insert(0);
        *count += 1;
        *count
    }

    fn is_examinable_revealed(&self, save: SaveId, object: ExaminableId) -> bool {
        self.revealed_examinables.contains_key(&(save, object))
    }

    fn mark_examinable_revealed(&mut self, save: SaveId, object: ExaminableId, at: DateTime<Utc>) {
        self.revealed_examinables.entry((save, object)).or_insert(at);
    }

    fn is_container_revealed(&self, save: SaveId, container: ContainerId) -> bool {
        self.revealed_containers.contains_key(&(save, container))
    }

    fn mark_container_revealed(&mut self, save: SaveId, container: ContainerId, at: DateTime<Utc>) {
        self.revealed_containers
            .entry((save, container))
            .or_insert(at);
    }

    fn is_activated(&self, save: SaveId, object: ExaminableId) -> bool {
        self.activated.contains_key(&(save, object))
    }

    fn mark_activated(&mut self, save: SaveId, object: ExaminableId, at: DateTime<Utc>) {
        self.activated.entry((save, object)).or_insert(at);
    }

    fn is_action_completed(&self, save: SaveId, action: ActionId) -> bool {
        self.completed_actions.contains_key(&(save, action))
    }

    fn mark_action_completed(&mut self, save: SaveId, action: ActionId, at: DateTime<Utc>) {
        self.completed_actions.entry((save, action)).or_insert(at);
    }

    fn is_interaction_completed(&self, save: SaveId, object: ExaminableId) -> bool {
        self.completed_interactions.contains_key(&(save, object))
    }

    fn mark_interaction_completed(&mut self, save: SaveId, object: ExaminableId, at: DateTime<Utc>) {
        self.completed_interactions
            .entry((save, object))
            .or_insert(at);
    }

    fn container_shadow(&self, save: SaveId, container: ContainerId) -> Option<ContainerShadow> {
        self.container_shadows.get(&(save, container)).copied()
    }

    fn set_container_shadow(
        &mut self,
        save: SaveId,
        container: ContainerId,
        shadow: ContainerShadow,
    ) {
        self.container_shadows.insert((save, container), shadow);
    }

    fn visit(&self, save: SaveId, room: RoomId) -> Option<VisitRecord> {
        self.visits.get(&(save, room)).copied()
    }

    fn record_visit(&mut self, save: SaveId, room: RoomId, at: DateTime<Utc>) {
        self.visits
            .entry((save, room))
            .and_modify(|v| {
                v.count += 1;
                v.last_visited_at = at;
            })
            .or_insert(VisitRecord {
                count: 1,
                last_visited_at: at,
            });
    }

    fn player_context(&self, save: SaveId) -> Option<PlayerContext> {
        self.contexts.get(&save).copied()
    }

    fn set_player_context(&mut self, save: SaveId, context: PlayerContext) {
        self.contexts.insert(save, context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (SaveId, ItemId, RoomId) {
        (SaveId::new(), ItemId(1), RoomId(1))
    }

    #[test]
    fn inventory_round_trip_preserves_order() {
        let (save, _, _) = ids();
        let mut store = MemoryStore::new();
        let now = Utc::now();
        store.add_to_inventory(save, ItemId(2), now);
        store.add_to_inventory(save, ItemId(1), now);
        store.add_to_inventory(save, ItemId(2), now); // duplicate ignored
        assert_eq!(store.inventory(save), vec![ItemId(2), ItemId(1)]);
        assert!(store.holds(save, ItemId(1)));
        assert!(store.remove_from_inventory(save, ItemId(2)));
        assert!(!store.remove_from_inventory(save, ItemId(2)));
        assert_eq!(store.inventory(save), vec![ItemId(1)]);
    }

    #[test]
    fn item_state_defaults_to_unset() {
        let (save, item, _) = ids();
        let mut store = MemoryStore::new();
        assert_eq!(store.item_state(save, item), None);
        store.set_item_state(save, item, "lit");
        assert_eq!(store.item_state(save, item).as_deref(), Some("lit"));
    }

    #[test]
    fn reveal_marks_are_idempotent() {
        let save = SaveId::new();
        let mut store = MemoryStore::new();
        let first = Utc::now();
        store.mark_examinable_revealed(save, ExaminableId(1), first);
        let later = first + chrono::Duration::minutes(5);
        store.mark_examinable_revealed(save, ExaminableId(1), later);
        assert!(store.is_examinable_revealed(save, ExaminableId(1)));
        // First timestamp wins.
        assert_eq!(
            store.revealed_examinables.get(&(save, ExaminableId(1))),
            Some(&first)
        );
    }

    #[test]
    fn visits_count_up() {
        let (save, _, room) = ids();
        let mut store = MemoryStore::new();
        assert_eq!(store.visit(save, room), None);
        let now = Utc::now();
        store.record_visit(save, room, now);
        assert_eq!(store.visit(save, room).unwrap().count, 1);
        store.record_visit(save, room, now + chrono::Duration::minutes(1));
        let visit = store.visit(save, room).unwrap();
        assert_eq!(visit.count, 2);
        assert!(visit.last_visited_at > now);
    }

    #[test]
    fn placements_are_per_room() {
        let (save, item, room) = ids();
        let mut store = MemoryStore::new();
        let now = Utc::now();
        store.place_item(save, item, room, now);
        assert_eq!(store.placed_in_room(save, room), vec![item]);
        assert!(store.placed_in_room(save, RoomId(2)).is_empty());
        assert!(store.unplace_item(save, item, room));
        assert!(store.placed_in_room(save, room).is_empty());
    }

    #[test]
    fn delete_save_cascades() {
        let (save, item, room) = ids();
        let mut store = MemoryStore::new();
        let now = Utc::now();
        store.create_save(save, SaveRecord::new(room, 100));
        store.add_to_inventory(save, item, now);
        store.set_item_state(save, item, "lit");
        store.mark_action_completed(save, ActionId(1), now);
        store.record_visit(save, room, now);
        store.set_player_context(save, PlayerContext::empty(now));

        store.delete_save(save);

        assert_eq!(store.save(save), None);
        assert!(store.inventory(save).is_empty());
        assert_eq!(store.item_state(save, item), None);
        assert!(!store.is_action_completed(save, ActionId(1)));
        assert_eq!(store.visit(save, room), None);
        assert_eq!(store.player_context(save), None);
    }

    #[test]
    fn save_record_survives_serialization() {
        let record = SaveRecord::new(RoomId(3), 100);
        let json = serde_json::to_string(&record).unwrap();
        let back: SaveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn save_id_serializes_as_a_bare_uuid() {
        let save = SaveId::new();
        let json = serde_json::to_string(&save).unwrap();
        assert_eq!(json, format!("\"{}\"", save.0));
    }

    #[test]
    fn saves_are_isolated() {
        let save_a = SaveId::new();
        let save_b = SaveId::new();
        let mut store = MemoryStore::new();
        store.set_item_state(save_a, ItemId(1), "lit");
        assert_eq!(store.item_state(save_b, ItemId(1)), None);
    }
}
