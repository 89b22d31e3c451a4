//! Generic character logic.

use derive_more::Deref;
use hecs::Component;
use world::RoomId;

use crate::{ecs::*, Runtime};

// Dummy wrapper so we can write impls for it directly instead of
// deriving a trait for hecs::Entity.
/// Game character identifier datatype. The actual contents live in the
/// runtime's ECS.
#[derive(
    Copy, Clone, Hash, Eq, Ord, PartialEq, PartialOrd, Debug, Deref,
)]
pub struct Entity(pub(crate) hecs::Entity);

impl Entity {
    pub(crate) fn get<T>(&self, r: &Runtime) -> T
    where
        T: Component + Clone + Default,
    {
        r.ecs
            .get::<&T>(**self)
            .map(|c| (*c).clone())
            .unwrap_or_default()
    }

    pub(crate) fn set<T>(&self, r: &mut Runtime, val: T)
    where
        T: Component + Default + PartialEq,
    {
        if val == T::default() {
            // Components are assumed to be always present but
            // defaulted, remove default values from the ECS. Ignore
            // the error when the component wasn't there to begin with.
            let _ = r.ecs.remove_one::<T>(**self);
        } else {
            r.ecs.insert_one(**self, val).expect("Entity::set failed");
        }
    }

    pub fn name(&self, r: &Runtime) -> String {
        self.get::<Name>(r).0
    }

    pub fn kind(&self, r: &Runtime) -> Kind {
        self.get::<Kind>(r)
    }

    pub fn level(&self, r: &Runtime) -> i32 {
        self.get::<Level>(r).0
    }

    pub fn health(&self, r: &Runtime) -> Health {
        self.get::<Health>(r)
    }

    /// Dead characters stay in room occupancy, every character-facing
    /// query must filter with this.
    pub fn is_alive(&self, r: &Runtime) -> bool {
        self.health(r).current > 0
    }

    /// The room this character is currently in.
    pub fn room(&self, r: &Runtime) -> Option<RoomId> {
        r.placement.entity_room(self)
    }

    /// Put the character in a room, removing it from wherever it was.
    pub fn place(&self, r: &mut Runtime, room: RoomId) {
        r.placement.insert(room, *self);
    }
}
