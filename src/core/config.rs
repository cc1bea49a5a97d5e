//! Game configuration.
//!
//! The rules of gem hunters are fixed: a 6x6 board, six gem draws, six
//! obstacle draws, thirty turns. `GameConfig` records those numbers in
//! one place instead of scattering magic constants; the binary always
//! runs `GameConfig::default()`, while tests construct variants (small
//! turn limits, empty boards) to reach end states quickly.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Parameters of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width and height in cells.
    pub board_size: usize,
    /// Gem placement draws at board creation. Collisions between draws
    /// are kept, so fewer gems may be realized.
    pub gems: usize,
    /// Obstacle placement draws at board creation.
    pub obstacles: usize,
    /// Accepted moves before the game ends.
    pub turn_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 6,
            gems: 6,
            obstacles: 6,
            turn_limit: 30,
        }
    }
}

impl GameConfig {
    /// Player one's starting corner.
    #[must_use]
    pub const fn player_one_start(&self) -> Position {
        Position::new(0, 0)
    }

    /// Player two's starting corner, opposite player one.
    #[must_use]
    pub const fn player_two_start(&self) -> Position {
        Position::new(self.board_size - 1, self.board_size - 1)
    }
}
