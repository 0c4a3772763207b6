//! Static world definitions for Gloam: rooms, items, examinable objects,
//! containers, room actions, conditional descriptions, and vocabulary.
//!
//! This crate holds only author-time content. Everything here is immutable
//! once a [`World`] is built; all per-playthrough mutation lives in the
//! engine crate as shadow state layered over these definitions.

/// Room actions and their requirements.
pub mod action;
/// Containers with open/lock behavior.
pub mod container;
/// Conditional room descriptions.
pub mod description;
/// Error types for world construction.
pub mod error;
/// Examinable objects and reveal triggers.
pub mod examinable;
/// Identifier newtypes for every definition family.
pub mod ids;
/// Items the player can carry and use.
pub mod item;
/// Rooms and the directional graph between them.
pub mod room;
/// Vocabulary normalization.
pub mod vocabulary;
/// The world arena and its validating builder.
pub mod world;

pub use action::RoomAction;
pub use container::Container;
pub use description::{DescriptionCondition, RoomDescription};
pub use error::{WorldError, WorldResult};
pub use examinable::{Examinable, RevealTrigger};
pub use ids::{ActionId, ContainerId, DescriptionId, ExaminableId, ItemId, RoomId};
pub use item::Item;
pub use room::{Direction, Room};
pub use vocabulary::{Lexicon, VocabEntry, WordType};
pub use world::{World, WorldBuilder};
