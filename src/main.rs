use clap::Parser;
use rand::Rng;

use engine::Runtime;
use ui::{Game, StdinInput, Terminal};

pub const GAME_NAME: &str = "delve";

#[derive(Parser, Debug)]
struct Args {
    /// Game world seed.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("seed: {seed}");

    let mut game =
        Game::new(Runtime::new(seed), Terminal::default(), StdinInput::default());
    game.run();
}
