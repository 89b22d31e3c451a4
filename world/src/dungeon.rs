use serde::{Deserialize, Serialize};

use crate::{Direction, Room, RoomKind};

/// Stable identifier for a room in a dungeon's arena.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
)]
pub struct RoomId(u32);

/// The room graph, stored as a flat arena addressed by `RoomId`.
///
/// Rooms are created once during world setup and never destroyed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    rooms: Vec<Room>,
}

impl Dungeon {
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0 as usize]
    }

    /// Resolve an exit. Absence of an exit is not an error, it means
    /// there is no way to go in that direction.
    pub fn exit(&self, from: RoomId, dir: Direction) -> Option<RoomId> {
        self.room(from).exit(dir)
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        self.rooms
            .iter()
            .enumerate()
            .map(|(i, room)| (RoomId(i as u32), room))
    }

    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.rooms.len()).map(|i| RoomId(i as u32))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// World construction interface, the `createRoom` factory of the game.
///
/// Links are one-directional primitives. A two-way corridor is two
/// `link` calls; nothing enforces or checks symmetry.
#[derive(Clone, Debug, Default)]
pub struct DungeonBuilder {
    rooms: Vec<Room>,
}

impl DungeonBuilder {
    pub fn new() -> DungeonBuilder {
        DungeonBuilder::default()
    }

    pub fn room(&mut self, kind: RoomKind) -> RoomId {
        let id = RoomId(self.rooms.len() as u32);
        self.rooms.push(Room::new(kind));
        id
    }

    pub fn link(&mut self, from: RoomId, dir: Direction, to: RoomId) {
        self.rooms[from.0 as usize].set_exit(dir, to);
    }

    pub fn build(self) -> Dungeon {
        log::debug!("built dungeon with {} rooms", self.rooms.len());
        Dungeon { rooms: self.rooms }
    }
}
