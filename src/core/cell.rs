//! Cell contents of the board grid.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Content of one board cell. Exactly one value holds per cell at any
/// time; a gem vacated by collection or a cell vacated by a moving
/// player reverts to `Empty`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing here.
    #[default]
    Empty,
    /// A collectible gem.
    Gem,
    /// A fixed obstacle; blocks any move onto it.
    Obstacle,
    /// A player's marker, written by the game on arrival.
    Occupied(PlayerId),
}

impl Cell {
    /// Display symbol: `-`, `G`, `O`, `P1` or `P2`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "-",
            Cell::Gem => "G",
            Cell::Obstacle => "O",
            Cell::Occupied(id) => id.label(),
        }
    }

    /// Whether this cell holds a gem.
    #[must_use]
    pub const fn is_gem(self) -> bool {
        matches!(self, Cell::Gem)
    }

    /// Whether this cell holds an obstacle.
    #[must_use]
    pub const fn is_obstacle(self) -> bool {
        matches!(self, Cell::Obstacle)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
