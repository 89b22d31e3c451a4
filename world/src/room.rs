use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{Direction, RoomId};

/// Labels for the kinds of room the factory can create.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum RoomKind {
    Entrance,
    Treasure,
    Dungeon,
    Library,
    Armory,
    Garden,
    Shop,
    Bedchamber,
}

impl RoomKind {
    /// Room name as shown to the player.
    pub fn title(self) -> &'static str {
        use RoomKind::*;
        match self {
            Entrance => "Entrance",
            Treasure => "Treasure Room",
            Dungeon => "Dungeon",
            Library => "Library",
            Armory => "Armory",
            Garden => "Garden",
            Shop => "Shop",
            Bedchamber => "Bedchamber",
        }
    }
}

/// A node in the world graph with up to four directional neighbors.
///
/// Neighbor slots hold arena identifiers, never room values, so the
/// cyclic shape of the graph stays out of the ownership structure.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Room {
    kind: RoomKind,
    exits: [Option<RoomId>; 4],
}

impl Room {
    pub(crate) fn new(kind: RoomKind) -> Room {
        Room {
            kind,
            exits: [None; 4],
        }
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    /// The neighboring room in the given direction, if there is an exit.
    pub fn exit(&self, dir: Direction) -> Option<RoomId> {
        self.exits[dir as usize]
    }

    pub(crate) fn set_exit(&mut self, dir: Direction, to: RoomId) {
        self.exits[dir as usize] = Some(to);
    }
}
