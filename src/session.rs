//! The interactive session: one game driven to completion over a
//! console.
//!
//! Both solicitation loops are unbounded by design, as in the original
//! game: malformed input and illegal moves are re-prompted without any
//! attempt cap and without consuming a turn. The only way out besides
//! finishing the game is an I/O error from the console (including a
//! closed input stream), which propagates.

use std::io;

use crate::console::{render, Console};
use crate::core::{Direction, PlayerId};
use crate::game::{Game, GameResult};

/// Drives a `Game` to completion over a `Console`.
pub struct Session<C> {
    game: Game,
    console: C,
}

impl<C: Console> Session<C> {
    /// Wire a game to a console.
    #[must_use]
    pub fn new(game: Game, console: C) -> Self {
        Self { game, console }
    }

    /// The wrapped game, for inspection.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Tear the session down into its console, e.g. to inspect a
    /// captured transcript.
    #[must_use]
    pub fn into_console(self) -> C {
        self.console
    }

    /// Run the per-turn loop until the turn limit, then announce the
    /// result over the final board.
    ///
    /// # Errors
    ///
    /// Console I/O failure, including a closed input stream.
    pub fn run(&mut self) -> io::Result<()> {
        while !self.game.is_over() {
            self.console
                .write_line(&render(self.game.board(), self.game.players()))?;
            self.console
                .write_line(&format!("{}'s turn.", self.game.current_player().name()))?;
            self.console.write_line("Enter direction (U/D/L/R): ")?;

            let direction = self.read_direction()?;
            match self.game.play(direction) {
                Ok(report) if report.collected => {
                    let name = self.game.player(report.player).name().to_owned();
                    self.console.write_line(&format!("{name} collected a gem!"))?;
                }
                Ok(_) => {}
                Err(_) => {
                    self.console.write_line("Invalid move. Please try again.")?;
                }
            }
        }

        self.console
            .write_line(&render(self.game.board(), self.game.players()))?;
        self.announce()
    }

    /// Read lines until one parses as a direction, complaining about
    /// each reject.
    fn read_direction(&mut self) -> io::Result<Direction> {
        loop {
            let line = self.console.read_line()?;
            match line.parse::<Direction>() {
                Ok(direction) => return Ok(direction),
                Err(reject) => self.console.write_line(&reject.to_string())?,
            }
        }
    }

    fn announce(&mut self) -> io::Result<()> {
        let line = match self.game.result() {
            Some(GameResult::Winner(PlayerId::One)) => "Player 1 wins!",
            Some(GameResult::Winner(PlayerId::Two)) => "Player 2 wins!",
            Some(GameResult::Tie) => "It's a tie!",
            None => return Ok(()),
        };
        self.console.write_line(line)
    }
}
