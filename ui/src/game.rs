//! Top-level game state machine and turn loop.

use std::{thread, time::Duration};

use engine::prelude::*;

use crate::{Console, Input, MapView, Style};

/// Phases of a game session.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    MainMenu,
    Setup,
    Playing,
    Exited,
}

/// Toplevel context object for one game session.
pub struct Game<C: Console, I: Input> {
    /// Logic level data.
    pub r: Runtime,
    map: MapView,
    console: C,
    input: I,
    state: State,
    /// Fixed pause between setup and the first turn.
    pub(crate) pause: Duration,
}

impl<C: Console, I: Input> Game<C, I> {
    pub fn new(r: Runtime, console: C, input: I) -> Game<C, I> {
        let map = MapView::new(r.start_room());
        Game {
            r,
            map,
            console,
            input,
            state: State::MainMenu,
            pause: Duration::from_secs(1),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Drive the state machine until the player exits.
    pub fn run(&mut self) {
        while self.state != State::Exited {
            match self.state {
                State::MainMenu => self.main_menu(),
                State::Setup => self.setup(),
                State::Playing => self.turn(),
                State::Exited => {}
            }
        }
    }

    fn main_menu(&mut self) {
        self.console.clear();
        self.console.writeln("=== DELVE ===", Style::Prompt);
        self.console.writeln("1. Start game", Style::Plain);
        self.console.writeln("2. Quit", Style::Plain);
        self.console.flush();

        match self.input.read_line().as_deref().map(str::trim) {
            Some("1") => self.state = State::Setup,
            Some("2") | None => self.state = State::Exited,
            Some(_) => self.console.writeln(
                "Invalid selection. Please choose a valid option.",
                Style::Danger,
            ),
        }
    }

    /// One-time world population before play starts.
    fn setup(&mut self) {
        let player = self.r.spawn_player("Aria");
        self.map.update_current_room(self.r.start_room());
        self.console.writeln(
            &format!("{} has entered the game.", player.name(&self.r)),
            Style::Info,
        );
        self.console.flush();

        load_monsters(&mut self.r);
        log::info!("setup complete, entering turn loop");

        // Let the entry message sit for a moment before the first
        // scene replaces it.
        thread::sleep(self.pause);
        self.state = State::Playing;
    }

    /// One iteration of the Playing state: render, read, dispatch.
    fn turn(&mut self) {
        let Some(player) = self.r.player() else {
            self.state = State::Exited;
            return;
        };

        self.console
            .writeln(&self.map.render(self.r.dungeon()), Style::Info);
        self.console.writeln("Choose an action:", Style::Prompt);
        self.console.writeln("1. Move North", Style::Plain);
        self.console.writeln("2. Move South", Style::Plain);
        self.console.writeln("3. Move East", Style::Plain);
        self.console.writeln("4. Move West", Style::Plain);
        if !player.live_targets(&self.r).is_empty() {
            self.console.writeln("5. Attack", Style::Plain);
        }
        self.console.writeln("6. Exit Game", Style::Plain);
        self.console.flush();

        let Some(line) = self.input.read_line() else {
            self.state = State::Exited;
            return;
        };

        let dir = match line.trim() {
            "1" => Some(Direction::North),
            "2" => Some(Direction::South),
            "3" => Some(Direction::East),
            "4" => Some(Direction::West),
            "5" => {
                self.attack_menu(player);
                None
            }
            "6" => {
                self.console.writeln("Exiting game...", Style::Danger);
                self.console.flush();
                self.state = State::Exited;
                None
            }
            _ => {
                self.console.writeln(
                    "Invalid selection. Please choose a valid option.",
                    Style::Danger,
                );
                None
            }
        };

        if let Some(dir) = dir {
            self.console.clear();
            // Walking into a wall is a defined no-op; the scene is
            // refreshed either way.
            player.step(&mut self.r, dir);
            if let Some(room) = player.room(&self.r) {
                self.map.update_current_room(room);
            }
        }
    }

    /// Target selection sub-loop for the attack action.
    ///
    /// Lists live targets 1..N plus a decline slot at N+1. Malformed
    /// and out-of-range selections re-prompt here instead of falling
    /// back to the turn loop; at most one attack is resolved per
    /// visit.
    fn attack_menu(&mut self, player: Entity) {
        self.console.clear();
        loop {
            let targets = player.live_targets(&self.r);
            if targets.is_empty() {
                self.console
                    .writeln("No characters to attack.", Style::Danger);
                return;
            }

            self.console.writeln("You can attack:", Style::Info);
            for (i, t) in targets.iter().enumerate() {
                self.console.writeln(
                    &format!("{}. {}", i + 1, t.name(&self.r)),
                    Style::Danger,
                );
            }
            self.console.writeln(
                &format!("{}. Don't attack", targets.len() + 1),
                Style::Note,
            );
            self.console.flush();

            let Some(line) = self.input.read_line() else {
                return;
            };
            // A malformed number is just an invalid selection.
            let choice = line.trim().parse::<usize>().unwrap_or(0);

            if (1..=targets.len()).contains(&choice) {
                self.console.clear();
                self.resolve_attack(player, targets[choice - 1]);
                return;
            } else if choice == targets.len() + 1 {
                self.console.clear();
                return;
            } else {
                self.console.writeln(
                    "That is not an option to choose from.",
                    Style::Plain,
                );
            }
        }
    }

    fn resolve_attack(&mut self, player: Entity, target: Entity) {
        let name = target.name(&self.r);
        match player.attack(&mut self.r, target) {
            Ok(AttackOutcome { damage, defeated }) => {
                self.console.writeln(
                    &format!("You hit {name} for {damage} damage."),
                    Style::Danger,
                );
                if defeated {
                    self.console.writeln(
                        &format!("{name} has been defeated!"),
                        Style::Info,
                    );
                    if let Some(treasure) = target.loot(&self.r) {
                        self.console.writeln(
                            &format!("{name} drops {treasure}."),
                            Style::Note,
                        );
                    }
                }
            }
            Err(e) => self.console.writeln(&e.to_string(), Style::Danger),
        }
        self.console.flush();
    }
}
