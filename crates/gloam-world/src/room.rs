//! Rooms and the directional graph between them.

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, RoomId};

/// One of the six directions a room can connect through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// All six directions, in compass order.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Parse a direction from a word or its one-letter abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            _ => None,
        }
    }

    /// The direction leading back the way you came.
    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// A location in the game world.
///
/// Neighbor references are optional room ids rather than owned rooms, so
/// the room graph can be cyclic without ownership cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Display name of the room.
    pub name: String,
    /// Static description, used when no conditional description matches.
    pub description: String,
    /// Neighboring room per direction, indexed by [`Direction::ALL`] order.
    pub neighbors: [Option<RoomId>; 6],
    /// The player starts here.
    pub is_starting: bool,
    /// Entering this room wins the game.
    pub is_winning: bool,
    /// Entering this room damages an unprotected player.
    pub is_deadly: bool,
    /// The room cannot be seen without a lit light source.
    pub is_dark: bool,
    /// Damage applied on entering while unprotected.
    pub damage: u32,
    /// Message shown when the room damages the player.
    pub death_message: Option<String>,
    /// Message shown on entering a winning room.
    pub win_message: Option<String>,
    /// Item that protects against this room's damage.
    pub protection_item: Option<ItemId>,
    /// State the protection item must be in, if owning it is not enough.
    pub required_protection_state: Option<String>,
    /// Item that lights this room when held and lit.
    pub light_source_item: Option<ItemId>,
}

impl Room {
    /// Create a room with a name and static description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            neighbors: [None; 6],
            is_starting: false,
            is_winning: false,
            is_deadly: false,
            is_dark: false,
            damage: 0,
            death_message: None,
            win_message: None,
            protection_item: None,
            required_protection_state: None,
            light_source_item: None,
        }
    }

    /// The neighboring room in the given direction, if any.
    pub fn neighbor(&self, direction: Direction) -> Option<RoomId> {
        self.neighbors[direction as usize]
    }

    /// Set the neighboring room in the given direction.
    pub fn set_neighbor(&mut self, direction: Direction, room: RoomId) {
        self.neighbors[direction as usize] = Some(room);
    }

    /// Iterate over (direction, neighbor) pairs that are connected.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(|d| self.neighbor(*d).map(|r| (*d, r)))
    }
}
