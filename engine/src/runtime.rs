use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use world::{starter_dungeon, Dungeon, RoomId};

use crate::{ecs::*, Entity, Placement};

/// Strategy for how much an attack hurts. Injected into the runtime so
/// variants can bring their own math; the contract is only that a hit
/// always deals positive damage.
pub trait DamagePolicy {
    fn damage(&self, attacker_level: i32, target_level: i32) -> i32;
}

/// Default damage policy, scales with attacker level only.
#[derive(Copy, Clone, Debug, Default)]
pub struct LevelScaled;

impl DamagePolicy for LevelScaled {
    fn damage(&self, attacker_level: i32, _target_level: i32) -> i32 {
        (2 * attacker_level).max(1)
    }
}

/// Main data container for one game session.
///
/// Owns the ECS, the room occupancy index, the dungeon and the RNG, so
/// independent sessions (and deterministic tests) can coexist without
/// shared state.
pub struct Runtime {
    pub(crate) player: Option<Entity>,
    pub(crate) ecs: hecs::World,
    pub(crate) placement: Placement,
    pub(crate) rng: XorShiftRng,
    dungeon: Dungeon,
    start: RoomId,
    damage: Box<dyn DamagePolicy>,
}

impl Runtime {
    pub fn new(seed: u64) -> Runtime {
        let (dungeon, start) = starter_dungeon();
        Runtime {
            player: None,
            ecs: Default::default(),
            placement: Default::default(),
            rng: XorShiftRng::seed_from_u64(seed),
            dungeon,
            start,
            damage: Box::new(LevelScaled),
        }
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    /// The room new players enter the game in.
    pub fn start_room(&self) -> RoomId {
        self.start
    }

    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    pub fn damage_policy(&self) -> &dyn DamagePolicy {
        &*self.damage
    }

    pub fn set_damage_policy(
        &mut self,
        policy: impl DamagePolicy + 'static,
    ) {
        self.damage = Box::new(policy);
    }

    pub fn spawn(&mut self, loadout: impl hecs::DynamicBundle) -> Entity {
        Entity(self.ecs.spawn(loadout))
    }

    /// Spawn the player character and put it in the starting room.
    /// Returns the existing player if there already is one.
    pub fn spawn_player(&mut self, name: &str) -> Entity {
        if let Some(player) = self.player {
            return player;
        }

        let player = self.spawn((
            Name(name.into()),
            Kind::Player,
            Level(1),
            Health::new(10),
        ));
        self.player = Some(player);
        let start = self.start;
        player.place(self, start);
        log::info!("player {name} spawned");
        player
    }

    /// Pre-registered characters of one category tag.
    pub fn characters_of_kind(&self, kind: Kind) -> Vec<Entity> {
        self.ecs
            .query::<&Kind>()
            .iter()
            .filter(|(_, &k)| k == kind)
            .map(|(e, _)| Entity(e))
            .collect()
    }

    /// Everyone in a room, dead or alive, in insertion order.
    pub fn occupants(
        &self,
        room: RoomId,
    ) -> impl Iterator<Item = Entity> + '_ {
        self.placement.entities_at(room)
    }

    /// Living characters in a room.
    pub fn live_occupants(&self, room: RoomId) -> Vec<Entity> {
        self.occupants(room).filter(|e| e.is_alive(self)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_lookup() {
        let mut r = Runtime::new(11);
        let player = r.spawn_player("Aria");
        let gob = r.spawn((
            Name("Gob".into()),
            Kind::Goblin,
            Level(1),
            Health::new(6),
        ));

        assert_eq!(r.characters_of_kind(Kind::Player), vec![player]);
        assert_eq!(r.characters_of_kind(Kind::Goblin), vec![gob]);
        assert_eq!(r.characters_of_kind(Kind::Drake), vec![]);
    }

    #[test]
    fn spawn_player_is_idempotent() {
        let mut r = Runtime::new(11);
        let a = r.spawn_player("Aria");
        let b = r.spawn_player("Borin");
        assert_eq!(a, b);
        assert_eq!(a.name(&r), "Aria");
    }
}
