//! Game logic layer machinery.

/// Smallest damage a successful hit can deal.
pub const MIN_DAMAGE: i32 = 1;

mod action;
pub use action::AttackOutcome;

pub mod ecs;

mod entity;
pub use entity::Entity;

mod error;
pub use error::EngineError;

mod loader;
pub use loader::load_monsters;

mod mob;

mod placement;
pub use placement::Placement;

pub mod prelude;

mod runtime;
pub use runtime::{DamagePolicy, LevelScaled, Runtime};
