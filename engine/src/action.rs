//! Characters doing things.

use world::Direction;

use crate::{ecs::Health, EngineError, Entity, Runtime, MIN_DAMAGE};

/// Result of one resolved attack, for the caller's messaging.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AttackOutcome {
    pub damage: i32,
    pub defeated: bool,
}

impl Entity {
    /// Move one step through the exit in the given direction.
    ///
    /// A missing exit is a defined no-op, not an error: the world
    /// state stays exactly as it was and the caller decides what, if
    /// anything, to tell the user. Returns whether the move happened.
    pub fn step(&self, r: &mut Runtime, dir: Direction) -> bool {
        let Some(from) = self.room(r) else {
            return false;
        };
        let Some(dest) = r.dungeon().exit(from, dir) else {
            log::debug!("{} bumps a wall going {dir}", self.name(r));
            return false;
        };

        // Placement insert removes the old room entry in the same
        // call, the character is never in two rooms.
        self.place(r, dest);
        log::debug!("{} moves {dir}", self.name(r));
        true
    }

    /// Resolve one attack against a target in the same room.
    ///
    /// Health strictly decreases on a hit and is clamped at zero; a
    /// dead target is invalid, so no amount of attacking can take
    /// health below zero or revive anyone.
    pub fn attack(
        &self,
        r: &mut Runtime,
        target: Entity,
    ) -> Result<AttackOutcome, EngineError> {
        if target == *self || !target.is_alive(r) {
            return Err(EngineError::InvalidTarget);
        }

        let damage = r
            .damage_policy()
            .damage(self.level(r), target.level(r))
            .max(MIN_DAMAGE);

        let health = target.health(r);
        let current = (health.current - damage).max(0);
        target.set(r, Health { current, ..health });

        let defeated = current == 0;
        log::info!(
            "{} hits {} for {damage}, {current} hp left",
            self.name(r),
            target.name(r)
        );
        Ok(AttackOutcome { damage, defeated })
    }
}

#[cfg(test)]
mod tests {
    use world::Direction;

    use super::*;
    use crate::{ecs::*, Runtime};

    fn monster(r: &mut Runtime, hp: i32) -> Entity {
        let e = r.spawn((
            Name("Gob".into()),
            Kind::Goblin,
            Level(1),
            Health::new(hp),
        ));
        let start = r.start_room();
        e.place(r, start);
        e
    }

    #[test]
    fn walk_west_and_back() {
        let mut r = Runtime::new(3);
        let player = r.spawn_player("Aria");
        let entrance = r.start_room();

        assert!(player.step(&mut r, Direction::West));
        let library = player.room(&r).unwrap();
        assert_ne!(library, entrance);
        assert_eq!(
            r.placement.entities_at(library).collect::<Vec<_>>(),
            vec![player]
        );
        assert_eq!(r.placement.entities_at(entrance).count(), 0);

        assert!(player.step(&mut r, Direction::East));
        assert_eq!(player.room(&r), Some(entrance));
    }

    #[test]
    fn missing_exit_is_a_no_op() {
        let mut r = Runtime::new(3);
        let player = r.spawn_player("Aria");
        let entrance = r.start_room();
        let before = r.placement.clone();

        // Entrance has no south exit.
        assert!(!player.step(&mut r, Direction::South));
        assert_eq!(player.room(&r), Some(entrance));
        assert_eq!(r.placement, before);
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut r = Runtime::new(3);
        let player = r.spawn_player("Aria");
        let gob = monster(&mut r, 10);

        let out = player.attack(&mut r, gob).unwrap();
        assert!(out.damage > 0);
        assert_eq!(gob.health(&r).current, 10 - out.damage);

        // Beat it down to zero.
        while gob.is_alive(&r) {
            let before = gob.health(&r).current;
            let out = player.attack(&mut r, gob).unwrap();
            let after = gob.health(&r).current;
            assert!(after < before);
            assert!(after >= 0);
            assert_eq!(out.defeated, after == 0);
        }

        // Dead targets are rejected, health stays at zero.
        assert_eq!(
            player.attack(&mut r, gob),
            Err(EngineError::InvalidTarget)
        );
        assert_eq!(gob.health(&r).current, 0);
    }

    #[test]
    fn no_attacking_yourself() {
        let mut r = Runtime::new(3);
        let player = r.spawn_player("Aria");
        assert_eq!(
            player.attack(&mut r, player),
            Err(EngineError::InvalidTarget)
        );
    }
}
