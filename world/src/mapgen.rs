//! Construction of the fixed game dungeon.

use crate::{Direction::*, Dungeon, DungeonBuilder, RoomId, RoomKind};

/// Build the stock eight-room dungeon.
///
/// Returns the dungeon and the entrance room the player starts in.
/// Two-way corridors are declared as explicit paired links; the
/// builder does not mirror them.
pub fn starter_dungeon() -> (Dungeon, RoomId) {
    let mut b = DungeonBuilder::new();

    let entrance = b.room(RoomKind::Entrance);
    let treasure = b.room(RoomKind::Treasure);
    let dungeon = b.room(RoomKind::Dungeon);
    let library = b.room(RoomKind::Library);
    let armory = b.room(RoomKind::Armory);
    let garden = b.room(RoomKind::Garden);
    let shop = b.room(RoomKind::Shop);
    let bedchamber = b.room(RoomKind::Bedchamber);

    b.link(entrance, North, treasure);
    b.link(entrance, West, library);
    b.link(entrance, East, garden);

    b.link(treasure, South, entrance);
    b.link(treasure, West, dungeon);

    b.link(dungeon, East, treasure);

    b.link(library, East, entrance);
    b.link(library, South, armory);

    b.link(armory, North, library);

    b.link(garden, West, entrance);
    b.link(garden, East, shop);
    b.link(garden, South, bedchamber);

    b.link(shop, West, garden);

    b.link(bedchamber, North, garden);

    (b.build(), entrance)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Direction;

    #[test]
    fn starter_layout() {
        let (d, entrance) = starter_dungeon();
        assert_eq!(d.len(), 8);
        assert_eq!(d.room(entrance).kind(), RoomKind::Entrance);

        let library = d.exit(entrance, Direction::West).unwrap();
        assert_eq!(d.room(library).kind(), RoomKind::Library);
        assert_eq!(d.exit(library, Direction::East), Some(entrance));

        let garden = d.exit(entrance, Direction::East).unwrap();
        assert_eq!(d.room(garden).kind(), RoomKind::Garden);
        assert_eq!(d.exit(garden, Direction::West), Some(entrance));

        let treasure = d.exit(entrance, Direction::North).unwrap();
        assert_eq!(d.room(treasure).kind(), RoomKind::Treasure);
        assert_eq!(d.exit(treasure, Direction::South), Some(entrance));

        // Dead end corridor off the treasure room.
        let dungeon = d.exit(treasure, Direction::West).unwrap();
        assert_eq!(d.room(dungeon).kind(), RoomKind::Dungeon);
        assert_eq!(d.exit(dungeon, Direction::West), None);

        // Entrance has no south exit.
        assert_eq!(d.exit(entrance, Direction::South), None);
    }
}
