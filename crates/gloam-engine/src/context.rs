//! Short-lived player context: what "it" and "back" refer to.
//!
//! Context is written eagerly and expired lazily: setters stamp the
//! record, and reads return nothing once the stamp is older than the
//! configured window. Item references share one window, the previous
//! room keeps a longer one.

use chrono::{DateTime, Utc};

use gloam_world::{ExaminableId, ItemId, RoomId};

use crate::config::EngineConfig;
use crate::store::{PlayerContext, SaveId, SaveStore};

fn load_or_empty<S: SaveStore>(store: &S, save: SaveId, now: DateTime<Utc>) -> PlayerContext {
    store
        .player_context(save)
        .unwrap_or_else(|| PlayerContext::empty(now))
}

/// Record the item the player just referred to.
pub fn remember_item<S: SaveStore>(store: &mut S, save: SaveId, item: ItemId, now: DateTime<Utc>) {
    let mut context = load_or_empty(store, save, now);
    context.last_item = Some(item);
    context.updated_at = now;
    store.set_player_context(save, context);
}

/// Record the examinable the player just examined.
pub fn remember_examined<S: SaveStore>(
    store: &mut S,
    save: SaveId,
    object: ExaminableId,
    now: DateTime<Utc>,
) {
    let mut context = load_or_empty(store, save, now);
    context.last_examined = Some(object);
    context.updated_at = now;
    store.set_player_context(save, context);
}

/// Record the room the player just left.
pub fn remember_room<S: SaveStore>(store: &mut S, save: SaveId, room: RoomId, now: DateTime<Utc>) {
    let mut context = load_or_empty(store, save, now);
    context.last_room = Some(room);
    context.updated_at = now;
    store.set_player_context(save, context);
}

/// The item "it" refers to, unless the reference has gone stale.
pub fn recall_item<S: SaveStore>(
    store: &S,
    save: SaveId,
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> Option<ItemId> {
    let context = store.player_context(save)?;
    if now - context.updated_at > config.item_context_ttl {
        return None;
    }
    context.last_item
}

/// The most recently examined object, unless the reference has gone stale.
pub fn recall_examined<S: SaveStore>(
    store: &S,
    save: SaveId,
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> Option<ExaminableId> {
    let context = store.player_context(save)?;
    if now - context.updated_at > config.item_context_ttl {
        return None;
    }
    context.last_examined
}

/// The room "back" leads to, unless the reference has gone stale.
pub fn recall_room<S: SaveStore>(
    store: &S,
    save: SaveId,
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> Option<RoomId> {
    let context = store.player_context(save)?;
    if now - context.updated_at > config.room_context_ttl {
        return None;
    }
    context.last_room
}

/// Drop all remembered references for a save.
pub fn clear<S: SaveStore>(store: &mut S, save: SaveId, now: DateTime<Utc>) {
    store.set_player_context(save, PlayerContext::empty(now));
}
