//! Character queries and variant capabilities.

use crate::{ecs::*, EngineError, Entity, Runtime};

impl Entity {
    pub fn is_player(&self, r: &Runtime) -> bool {
        r.player == Some(*self)
    }

    pub fn can_fly(&self, r: &Runtime) -> bool {
        self.get::<Flying>(r).0
    }

    /// Treasure description for lootable characters.
    pub fn loot(&self, r: &Runtime) -> Option<String> {
        let Loot(treasure) = self.get::<Loot>(r);
        (!treasure.is_empty()).then_some(treasure)
    }

    /// Characters this one could attack: everyone sharing its room,
    /// minus itself and the dead.
    pub fn live_targets(&self, r: &Runtime) -> Vec<Entity> {
        let Some(room) = self.room(r) else {
            return Vec::new();
        };
        r.placement
            .entities_at(room)
            .filter(|e| e != self && e.is_alive(r))
            .collect()
    }

    /// Per-variant special action hook.
    ///
    /// Extension point for monster behaviors. No variant implements
    /// one yet; the stub signals that explicitly instead of silently
    /// doing nothing.
    pub fn unique_behavior(&self, r: &mut Runtime) -> Result<(), EngineError> {
        let kind = self.kind(r);
        match kind {
            Kind::Player | Kind::Goblin | Kind::Kobold | Kind::Drake => {
                Err(EngineError::Unimplemented { kind })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Runtime;

    #[test]
    fn targets_exclude_self_and_dead() {
        let mut r = Runtime::new(7);
        let start = r.start_room();

        let player = r.spawn_player("Aria");
        let live = r.spawn((
            Name("Gob".into()),
            Kind::Goblin,
            Level(1),
            Health::new(5),
        ));
        let dead = r.spawn((
            Name("Kobby".into()),
            Kind::Kobold,
            Level(1),
            Health { current: 0, max: 8 },
        ));
        live.place(&mut r, start);
        dead.place(&mut r, start);

        assert_eq!(player.live_targets(&r), vec![live]);
        // The dead body is still in the room.
        assert_eq!(r.placement.entities_at(start).count(), 3);
    }

    #[test]
    fn capability_components() {
        let mut r = Runtime::new(7);
        let drake = r.spawn((
            Name("Drako".into()),
            Kind::Drake,
            Level(2),
            Health::new(12),
            Flying(true),
            Loot("dragon scales".into()),
        ));
        let goblin = r.spawn((
            Name("Gob".into()),
            Kind::Goblin,
            Level(1),
            Health::new(6),
        ));

        assert!(drake.can_fly(&r));
        assert_eq!(drake.loot(&r).as_deref(), Some("dragon scales"));
        assert!(!goblin.can_fly(&r));
        assert_eq!(goblin.loot(&r), None);
    }

    #[test]
    fn unique_behavior_is_stubbed() {
        let mut r = Runtime::new(7);
        let drake =
            r.spawn((Name("Drako".into()), Kind::Drake, Health::new(12)));
        assert_eq!(
            drake.unique_behavior(&mut r),
            Err(EngineError::Unimplemented { kind: Kind::Drake })
        );
    }
}
