use std::io;

use gem_hunters::{Console, Game, GameConfig, Session, Terminal};
use log::info;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut console = Terminal::new();
    console.write_line("Welcome to Gem Hunters!")?;

    // Entropy-seeded, but logged so a game can be replayed.
    let seed: u64 = rand::random();
    info!("board seed: {seed}");

    let game = Game::new(GameConfig::default(), seed);
    Session::new(game, &mut console).run()?;

    console.write_line("Press Enter to exit...")?;
    let _ = console.read_line();
    Ok(())
}
