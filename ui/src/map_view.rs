//! Text projection of the room graph.

use std::fmt::Write;

use strum::IntoEnumIterator;
use world::{Direction, Dungeon, RoomId};

/// Tracks the room the view is centered on and renders the local
/// neighborhood of the graph as a display string.
pub struct MapView {
    current: RoomId,
}

impl MapView {
    pub fn new(start: RoomId) -> MapView {
        MapView { current: start }
    }

    pub fn update_current_room(&mut self, room: RoomId) {
        self.current = room;
    }

    pub fn render(&self, dungeon: &Dungeon) -> String {
        let here = dungeon.room(self.current);
        let mut out = String::new();
        let _ = writeln!(out, "== {} ==", here.kind().title());
        for dir in Direction::iter() {
            let name = dir.to_string();
            match here.exit(dir) {
                Some(n) => {
                    let _ = writeln!(
                        out,
                        "  {name:<5} -> {}",
                        dungeon.room(n).kind().title()
                    );
                }
                None => {
                    let _ = writeln!(out, "  {name:<5} -> (wall)");
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use world::starter_dungeon;

    use super::*;

    #[test]
    fn renders_exits_and_walls() {
        let (d, entrance) = starter_dungeon();
        let mut view = MapView::new(entrance);

        let map = view.render(&d);
        assert!(map.contains("== Entrance =="));
        assert!(map.contains("north -> Treasure Room"));
        assert!(map.contains("west  -> Library"));
        assert!(map.contains("south -> (wall)"));

        let garden = d.exit(entrance, world::Direction::East).unwrap();
        view.update_current_room(garden);
        assert!(view.render(&d).contains("== Garden =="));
    }
}
