//! One-time monster setup at game start.

use rand::Rng;
use world::RoomId;

use crate::{ecs::*, Runtime};

/// Spawn the stock monsters and drop each into a random room.
///
/// Runs once during setup, before the turn loop. Placement is uniform
/// over the whole room list and does not avoid collisions: monsters
/// may share a room with each other or with the player. The goblin
/// gets its own draw, the kobold and drake land in a second shared
/// room.
pub fn load_monsters(r: &mut Runtime) {
    let goblin = r.spawn((
        Name("Gob".into()),
        Kind::Goblin,
        Level(1),
        Health::new(6),
    ));
    let lair = random_room(r);
    goblin.place(r, lair);

    let kobold = r.spawn((
        Name("Kobby".into()),
        Kind::Kobold,
        Level(1),
        Health::new(8),
        Loot("gold coins".into()),
    ));
    let drake = r.spawn((
        Name("Drako".into()),
        Kind::Drake,
        Level(2),
        Health::new(12),
        Flying(true),
        Loot("dragon scales".into()),
    ));
    let den = random_room(r);
    kobold.place(r, den);
    drake.place(r, den);

    for e in [goblin, kobold, drake] {
        log::info!(
            "placed {} in the {}",
            e.name(r),
            room_name(r, e.room(r).expect("monster not placed"))
        );
    }
}

fn random_room(r: &mut Runtime) -> RoomId {
    let len = r.dungeon().len();
    let n = r.rng.gen_range(0..len);
    r.dungeon().room_ids().nth(n).expect("empty dungeon")
}

fn room_name(r: &Runtime, room: RoomId) -> &'static str {
    r.dungeon().room(room).kind().title()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monsters_land_in_rooms() {
        let mut r = Runtime::new(42);
        r.spawn_player("Aria");
        load_monsters(&mut r);

        for kind in [Kind::Goblin, Kind::Kobold, Kind::Drake] {
            let found = r.characters_of_kind(kind);
            assert_eq!(found.len(), 1, "missing {kind}");
            assert!(found[0].room(&r).is_some(), "{kind} not placed");
            assert!(found[0].is_alive(&r));
        }

        // Kobold and drake share a den.
        let kobold = r.characters_of_kind(Kind::Kobold)[0];
        let drake = r.characters_of_kind(Kind::Drake)[0];
        assert_eq!(kobold.room(&r), drake.room(&r));

        // Player placement is untouched by the loader.
        let player = r.player().unwrap();
        assert_eq!(player.room(&r), Some(r.start_room()));
    }

    #[test]
    fn placement_is_seed_deterministic() {
        let rooms = |seed| {
            let mut r = Runtime::new(seed);
            load_monsters(&mut r);
            r.characters_of_kind(Kind::Goblin)[0].room(&r)
        };
        assert_eq!(rooms(123), rooms(123));
    }
}
