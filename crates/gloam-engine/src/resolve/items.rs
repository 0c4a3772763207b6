//! Item phrase resolution: "brass lantern" to candidate [`ItemId`]s.
//!
//! A phrase is split into a trailing noun and leading adjectives, both
//! normalized through the world's lexicon, then matched against the
//! in-scope items through a tiered cascade. The first tier with any hits
//! wins outright; later tiers are never merged in.

use gloam_world::{ItemId, RoomId, WordType, World};

use crate::fuzzy::is_similar;
use crate::store::{SaveId, SaveStore};

/// Which item pools a phrase may resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemScope {
    /// Items the player is carrying.
    pub inventory: bool,
    /// Items lying in the current room.
    pub room: bool,
}

impl ItemScope {
    /// Inventory and room together.
    pub fn everything() -> Self {
        Self {
            inventory: true,
            room: true,
        }
    }

    /// Only carried items.
    pub fn inventory_only() -> Self {
        Self {
            inventory: true,
            room: false,
        }
    }

    /// Only items in the current room.
    pub fn room_only() -> Self {
        Self {
            inventory: false,
            room: true,
        }
    }
}

/// The items a phrase may refer to right now: carried items and/or the
/// room's remaining static items plus anything this save placed there.
/// Items removed from play never appear.
pub fn item_universe<S: SaveStore>(
    world: &World,
    store: &S,
    save: SaveId,
    room: RoomId,
    scope: ItemScope,
) -> Vec<ItemId> {
    let mut universe = Vec::new();
    if scope.inventory {
        for item in store.inventory(save) {
            if !store.is_removed(save, item) && !universe.contains(&item) {
                universe.push(item);
            }
        }
    }
    if scope.room {
        for &item in world.items_in_room(room) {
            if !store.was_picked_up(save, item)
                && !store.is_removed(save, item)
                && !universe.contains(&item)
            {
                universe.push(item);
            }
        }
        for item in store.placed_in_room(save, room) {
            if !store.is_removed(save, item) && !universe.contains(&item) {
                universe.push(item);
            }
        }
    }
    universe
}

/// Resolve an object phrase against a candidate universe.
///
/// Tiers, in order, first non-empty wins:
/// 1. adjective filter (only when the phrase carries adjectives): name
///    contains the noun and the item's adjective tags cover every
///    requested adjective;
/// 2. substring of the normalized or raw noun against the name;
/// 3. reverse synonym: the item's own name is a vocabulary noun whose
///    canonical form equals the normalized noun;
/// 4. fuzzy: name within `max_distance` edits of the normalized noun or
///    the raw noun, or the name's canonical form within range of the noun.
pub fn resolve_items(
    world: &World,
    universe: &[ItemId],
    phrase: &str,
    max_distance: usize,
) -> Vec<ItemId> {
    let phrase = phrase.trim().to_lowercase();
    let tokens: Vec<&str> = phrase.split_whitespace().collect();
    let Some((&raw_noun, adjective_tokens)) = tokens.split_last() else {
        return Vec::new();
    };

    let lexicon = world.lexicon();
    let noun = lexicon.normalize(raw_noun, WordType::Noun);
    let adjectives: Vec<String> = adjective_tokens
        .iter()
        .map(|word| lexicon.normalize(word, WordType::Adjective))
        .collect();

    let named: Vec<(ItemId, String)> = universe
        .iter()
        .filter_map(|&id| world.item(id).map(|item| (id, item.name.to_lowercase())))
        .collect();

    if !adjectives.is_empty() {
        let tier: Vec<ItemId> = named
            .iter()
            .filter(|(id, name)| {
                name.contains(&noun)
                    && adjectives.iter().all(|adj| {
                        world
                            .adjectives_of(*id)
                            .iter()
                            .any(|tag| tag.eq_ignore_ascii_case(adj))
                    })
            })
            .map(|(id, _)| *id)
            .collect();
        if !tier.is_empty() {
            return dedupe(tier);
        }
    }

    let tier: Vec<ItemId> = named
        .iter()
        .filter(|(_, name)| name.contains(&noun) || name.contains(raw_noun))
        .map(|(id, _)| *id)
        .collect();
    if !tier.is_empty() {
        return dedupe(tier);
    }

    let tier: Vec<ItemId> = named
        .iter()
        .filter(|(_, name)| lexicon.canonical_of(name, WordType::Noun) == Some(noun.as_str()))
        .map(|(id, _)| *id)
        .collect();
    if !tier.is_empty() {
        return dedupe(tier);
    }

    let tier: Vec<ItemId> = named
        .iter()
        .filter(|(_, name)| {
            is_similar(name, &noun, max_distance)
                || is_similar(name, raw_noun, max_distance)
                || lexicon
                    .canonical_of(name, WordType::Noun)
                    .is_some_and(|canonical| is_similar(canonical, &noun, max_distance))
        })
        .map(|(id, _)| *id)
        .collect();
    dedupe(tier)
}

fn dedupe(ids: Vec<ItemId>) -> Vec<ItemId> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}
