//! Room graph datatypes for the dungeon world.

mod direction;
pub use direction::Direction;

mod dungeon;
pub use dungeon::{Dungeon, DungeonBuilder, RoomId};

mod mapgen;
pub use mapgen::starter_dungeon;

mod room;
pub use room::{Room, RoomKind};
