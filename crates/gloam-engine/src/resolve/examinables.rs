//! Resolution of scenery phrases to examinables and containers.
//!
//! Only visible entities are searched: anything hidden stays unmatchable
//! until its reveal has been recorded for this save. Substring matches win
//! over fuzzy ones, and there is no adjective tier.

use gloam_world::{ContainerId, ExaminableId, RoomId, World};

use crate::fuzzy::is_similar;
use crate::store::{SaveId, SaveStore};

/// Find the examinable in a room that a phrase refers to.
///
/// Name-or-keyword substring first, then a per-keyword fuzzy pass. Returns
/// the first visible match in room order.
pub fn resolve_examinable<S: SaveStore>(
    world: &World,
    store: &S,
    save: SaveId,
    room: RoomId,
    phrase: &str,
    max_distance: usize,
) -> Option<ExaminableId> {
    let phrase = phrase.trim().to_lowercase();
    if phrase.is_empty() {
        return None;
    }

    let visible: Vec<ExaminableId> = world
        .examinables_in_room(room)
        .iter()
        .copied()
        .filter(|&id| {
            world.examinable(id).is_some_and(|obj| {
                !obj.hidden || store.is_examinable_revealed(save, id)
            })
        })
        .collect();

    for &id in &visible {
        if world.examinable(id).is_some_and(|obj| obj.matches_phrase(&phrase)) {
            return Some(id);
        }
    }

    for &id in &visible {
        let Some(obj) = world.examinable(id) else {
            continue;
        };
        if is_similar(&obj.name, &phrase, max_distance)
            || obj
                .keywords
                .iter()
                .any(|keyword| is_similar(keyword, &phrase, max_distance))
        {
            return Some(id);
        }
    }

    None
}

/// Find the container in a room that a phrase refers to.
///
/// Containers match by exact name or keyword only; a phrase that merely
/// contains the name does not count.
pub fn resolve_container<S: SaveStore>(
    world: &World,
    store: &S,
    save: SaveId,
    room: RoomId,
    phrase: &str,
) -> Option<ContainerId> {
    let phrase = phrase.trim().to_lowercase();
    if phrase.is_empty() {
        return None;
    }

    world
        .containers_in_room(room)
        .iter()
        .copied()
        .find(|&id| {
            world.container(id).is_some_and(|container| {
                (!container.hidden || store.is_container_revealed(save, id))
                    && container.matches_phrase(&phrase)
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::Utc;
    use gloam_world::{Container, Examinable, Room, WorldBuilder};

    fn cellar_world() -> World {
        let mut builder = WorldBuilder::new();
        let mut room = Room::new("Cellar", "A damp cellar.");
        room.is_starting = true;
        builder.room(RoomId(1), room).unwrap();

        let mut shelf = Examinable::new(RoomId(1), "bookshelf", "Sagging shelves.");
        shelf.keywords = vec!["shelves".to_string()];
        builder.examinable(ExaminableId(1), shelf).unwrap();

        let mut alcove = Examinable::new(RoomId(1), "alcove", "A shadowed recess.");
        alcove.hidden = true;
        builder.examinable(ExaminableId(2), alcove).unwrap();

        let mut chest = Container::new(RoomId(1), "chest", "An iron-banded chest.");
        chest.keywords = vec!["trunk".to_string()];
        builder.container(ContainerId(1), chest).unwrap();

        builder.build().unwrap()
    }

    #[test]
    fn substring_match_beats_fuzzy() {
        let world = cellar_world();
        let store = MemoryStore::new();
        let save = SaveId::new();
        assert_eq!(
            resolve_examinable(&world, &store, save, RoomId(1), "shelf", 2),
            Some(ExaminableId(1))
        );
    }

    #[test]
    fn typo_matches_via_fuzzy_pass() {
        let world = cellar_world();
        let store = MemoryStore::new();
        let save = SaveId::new();
        assert_eq!(
            resolve_examinable(&world, &store, save, RoomId(1), "bookshelv", 2),
            Some(ExaminableId(1))
        );
    }

    #[test]
    fn hidden_objects_are_invisible_until_revealed() {
        let world = cellar_world();
        let mut store = MemoryStore::new();
        let save = SaveId::new();

        assert_eq!(
            resolve_examinable(&world, &store, save, RoomId(1), "alcove", 2),
            None
        );
        store.mark_examinable_revealed(save, ExaminableId(2), Utc::now());
        assert_eq!(
            resolve_examinable(&world, &store, save, RoomId(1), "alcove", 2),
            Some(ExaminableId(2))
        );
    }

    #[test]
    fn container_matches_by_exact_name_or_keyword() {
        let world = cellar_world();
        let store = MemoryStore::new();
        let save = SaveId::new();
        assert_eq!(
            resolve_container(&world, &store, save, RoomId(1), "chest"),
            Some(ContainerId(1))
        );
        assert_eq!(
            resolve_container(&world, &store, save, RoomId(1), "trunk"),
            Some(ContainerId(1))
        );
        assert_eq!(
            resolve_container(&world, &store, save, RoomId(1), "che"),
            None
        );
    }
}
