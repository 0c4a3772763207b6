//! Error types for world construction.

use crate::ids::{ActionId, ContainerId, ExaminableId, ItemId, RoomId};

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors raised while assembling or validating a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// Two definitions were registered under the same room id.
    #[error("duplicate room id: {0}")]
    DuplicateRoom(RoomId),

    /// Two definitions were registered under the same item id.
    #[error("duplicate item id: {0}")]
    DuplicateItem(ItemId),

    /// Two definitions were registered under the same examinable id.
    #[error("duplicate examinable id: {0}")]
    DuplicateExaminable(ExaminableId),

    /// Two definitions were registered under the same container id.
    #[error("duplicate container id: {0}")]
    DuplicateContainer(ContainerId),

    /// Two definitions were registered under the same action id.
    #[error("duplicate action id: {0}")]
    DuplicateAction(ActionId),

    /// A definition references a room that does not exist.
    #[error("unknown room reference: {0}")]
    UnknownRoom(RoomId),

    /// A definition references an item that does not exist.
    #[error("unknown item reference: {0}")]
    UnknownItem(ItemId),

    /// A definition references an examinable that does not exist.
    #[error("unknown examinable reference: {0}")]
    UnknownExaminable(ExaminableId),

    /// A definition references an action that does not exist.
    #[error("unknown action reference: {0}")]
    UnknownAction(ActionId),

    /// The world declares no starting room.
    #[error("no starting room declared")]
    NoStartingRoom,
}
