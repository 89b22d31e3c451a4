pub use crate::{
    ecs::{Flying, Health, Kind, Level, Loot, Name},
    load_monsters, AttackOutcome, DamagePolicy, EngineError, Entity,
    LevelScaled, Placement, Runtime,
};
pub use world::{Direction, Dungeon, Room, RoomId, RoomKind};
