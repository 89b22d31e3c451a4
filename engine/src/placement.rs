use std::collections::BTreeMap;

use indexmap::{IndexMap, IndexSet};
use world::RoomId;

use crate::Entity;

/// Occupancy index, used for finding the room of a character and the
/// characters in a room.
///
/// Maintains the invariant that a character is indexed in at most one
/// room: `insert` removes any previous placement before adding the new
/// one, so a single move never leaves a character observably in two
/// rooms or in none.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Placement {
    rooms: BTreeMap<Entity, RoomId>,
    occupants: IndexMap<RoomId, IndexSet<Entity>>,
}

impl Placement {
    /// Characters in a room in insertion order.
    pub fn entities_at(
        &self,
        room: RoomId,
    ) -> impl Iterator<Item = Entity> + '_ {
        self.occupants.get(&room).into_iter().flatten().copied()
    }

    pub fn all_entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.rooms.keys().copied()
    }

    pub fn entity_room(&self, e: &Entity) -> Option<RoomId> {
        self.rooms.get(e).copied()
    }

    pub fn remove(&mut self, e: &Entity) {
        if let Some(room) = self.rooms.remove(e) {
            if let Some(set) = self.occupants.get_mut(&room) {
                set.shift_remove(e);
            }
            // The per-room bins are left in place when they empty out,
            // the same bins keep getting emptied and refilled.
        }
    }

    pub fn insert(&mut self, room: RoomId, e: Entity) {
        self.remove(&e);
        self.rooms.insert(e, room);
        self.occupants.entry(room).or_default().insert(e);
    }
}
