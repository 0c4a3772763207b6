//! Error types for the engine.
//!
//! Gameplay outcomes (wrong state, exhausted uses, repeated one-shots) are
//! ordinary recoverable variants the command layer turns into messages; the
//! `Unknown*` variants mean a shadow record or definition reference points
//! at an id the world does not contain, which is data corruption and should
//! abort the turn.

use thiserror::Error;

use gloam_world::{ActionId, ContainerId, ExaminableId, ItemId, RoomId};

use crate::store::SaveId;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while interpreting or executing a turn.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No save exists under this id.
    #[error("unknown save: {0}")]
    UnknownSave(SaveId),

    /// A reference points at a room the world does not define.
    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),

    /// A reference points at an item the world does not define.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// A reference points at an examinable the world does not define.
    #[error("unknown examinable: {0}")]
    UnknownExaminable(ExaminableId),

    /// A reference points at a container the world does not define.
    #[error("unknown container: {0}")]
    UnknownContainer(ContainerId),

    /// A reference points at an action the world does not define.
    #[error("unknown action: {0}")]
    UnknownAction(ActionId),

    /// The item cannot be picked up.
    #[error("the {0} cannot be taken")]
    NotCollectable(String),

    /// The item is already in the inventory.
    #[error("the {0} is already being carried")]
    AlreadyHeld(String),

    /// The item is not in the inventory.
    #[error("the {0} is not being carried")]
    NotHeld(String),

    /// The object is not a switch and cannot be activated.
    #[error("the {0} cannot be activated")]
    NotActivatable(String),

    /// A limited-use item or object has no uses left.
    #[error("{message}")]
    Exhausted {
        /// What ran out.
        name: String,
        /// The empty description, or a generic fallback.
        message: String,
    },

    /// A one-shot action or interaction was already completed.
    #[error("that has already been done")]
    AlreadyCompleted,

    /// The container does not support locking.
    #[error("the {0} cannot be locked or unlocked")]
    NotLockable(String),

    /// The container is already open.
    #[error("the {0} is already open")]
    AlreadyOpen(String),

    /// The container is already closed.
    #[error("the {0} is already closed")]
    AlreadyClosed(String),

    /// The container is already locked.
    #[error("the {0} is already locked")]
    AlreadyLocked(String),

    /// The container is already unlocked.
    #[error("the {0} is already unlocked")]
    AlreadyUnlocked(String),

    /// An open attempt was made on a locked container.
    #[error("{message}")]
    Locked {
        /// The container name.
        name: String,
        /// The authored locked message or a generic fallback.
        message: String,
    },

    /// A locked container must be closed before it can be locked.
    #[error("the {0} must be closed before it can be locked")]
    NotClosed(String),

    /// Locking or unlocking requires a key the player does not hold.
    #[error("the right key for the {0} is missing")]
    MissingKey(String),
}

impl EngineError {
    /// Whether this error indicates data corruption rather than a
    /// recoverable gameplay outcome.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnknownSave(_)
                | Self::UnknownRoom(_)
                | Self::UnknownItem(_)
                | Self::UnknownExaminable(_)
                | Self::UnknownContainer(_)
                | Self::UnknownAction(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_errors_are_fatal() {
        assert!(EngineError::UnknownRoom(RoomId(1)).is_fatal());
        assert!(!EngineError::AlreadyCompleted.is_fatal());
        assert!(
            !EngineError::Exhausted {
                name: "lever".to_string(),
                message: "The lever no longer moves.".to_string(),
            }
            .is_fatal()
        );
    }
}
