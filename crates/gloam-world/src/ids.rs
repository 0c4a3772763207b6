//! Identifier newtypes for static world entities.
//!
//! Static content lives in flat arenas keyed by these ids, so cross
//! references between definitions (room neighbors, reveal triggers, key
//! items) are plain indices rather than owned structures.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Identifier for a [`Room`](crate::Room).
    RoomId
);
define_id!(
    /// Identifier for an [`Item`](crate::Item).
    ItemId
);
define_id!(
    /// Identifier for an [`Examinable`](crate::Examinable).
    ExaminableId
);
define_id!(
    /// Identifier for a [`Container`](crate::Container).
    ContainerId
);
define_id!(
    /// Identifier for a [`RoomAction`](crate::RoomAction).
    ActionId
);
define_id!(
    /// Identifier for a [`RoomDescription`](crate::RoomDescription).
    DescriptionId
);
