//! The board: grid ownership, randomized seeding, move validation and
//! gem collection.
//!
//! ## Seeding
//!
//! `Board::new` draws every placement coordinate from a single
//! `BoardRng`. Gem draws are independent and may collide with earlier
//! gem draws, overwriting them — a board can realize fewer than the
//! configured number of gems. Obstacle draws are redrawn while they
//! land on a gem, but obstacle-on-obstacle collisions are accepted.
//! These collision rules are the original game's placement behavior
//! and are preserved as-is.
//!
//! ## Exposed cell surface
//!
//! `cell`/`set_cell` give the game direct coordinate access. The game
//! uses it for occupancy marking (vacated cell cleared, arrival cell
//! tagged); the board deliberately does not own that bookkeeping.

use log::debug;

use crate::core::{BoardRng, Cell, Direction, GameConfig, Player, Position};

/// Why a requested move is illegal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The target cell lies outside the board.
    OutOfBounds,
    /// The target cell holds an obstacle.
    Blocked,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "target cell is outside the board"),
            MoveError::Blocked => write!(f, "target cell holds an obstacle"),
        }
    }
}

impl std::error::Error for MoveError {}

/// A square grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<Vec<Cell>>,
}

impl Board {
    /// An all-empty board of `config.board_size`.
    #[must_use]
    pub fn empty(config: &GameConfig) -> Self {
        Self {
            size: config.board_size,
            grid: vec![vec![Cell::Empty; config.board_size]; config.board_size],
        }
    }

    /// A freshly seeded board: `config.gems` gem draws, then
    /// `config.obstacles` obstacle draws that redraw while landing on
    /// a gem.
    #[must_use]
    pub fn new(config: &GameConfig, rng: &mut BoardRng) -> Self {
        let mut board = Self::empty(config);

        for _ in 0..config.gems {
            let pos = board.random_position(rng);
            board.set_cell(pos, Cell::Gem);
        }

        for _ in 0..config.obstacles {
            // Redraw while the pick sits on a gem; collisions with
            // other obstacles are accepted.
            let pos = loop {
                let pos = board.random_position(rng);
                if !board.cell(pos).is_gem() {
                    break pos;
                }
            };
            board.set_cell(pos, Cell::Obstacle);
        }

        debug!(
            "seeded board (seed {}): {} gems, {} obstacles realized",
            rng.seed(),
            board.count(Cell::Gem),
            board.count(Cell::Obstacle)
        );

        board
    }

    fn random_position(&self, rng: &mut BoardRng) -> Position {
        Position::new(rng.coordinate(self.size), rng.coordinate(self.size))
    }

    /// Board width and height in cells.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The content of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self.grid[pos.y][pos.x]
    }

    /// Overwrite the cell at `pos`.
    pub fn set_cell(&mut self, pos: Position, cell: Cell) {
        self.grid[pos.y][pos.x] = cell;
    }

    /// The target cell for moving `player` one step in `direction`, or
    /// why that move is illegal. Does not mutate any state.
    ///
    /// # Errors
    ///
    /// `MoveError::OutOfBounds` if the target leaves the board,
    /// `MoveError::Blocked` if it holds an obstacle.
    pub fn validate_move(
        &self,
        player: &Player,
        direction: Direction,
    ) -> Result<Position, MoveError> {
        let target = player
            .position()
            .step(direction, self.size)
            .ok_or(MoveError::OutOfBounds)?;

        if self.cell(target).is_obstacle() {
            return Err(MoveError::Blocked);
        }

        Ok(target)
    }

    /// Whether moving `player` one step in `direction` is legal.
    #[must_use]
    pub fn is_valid_move(&self, player: &Player, direction: Direction) -> bool {
        self.validate_move(player, direction).is_ok()
    }

    /// Collect the gem under `player`, if any: credit the player and
    /// clear the cell. Returns whether a gem was collected so the
    /// caller can announce it. No-op on any other cell content.
    pub fn collect_gem(&mut self, player: &mut Player) -> bool {
        let pos = player.position();
        if !self.cell(pos).is_gem() {
            return false;
        }

        player.award_gem();
        self.set_cell(pos, Cell::Empty);
        debug!("{} collected a gem at {pos}", player.name());
        true
    }

    /// Number of cells currently holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.grid.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Row-major iteration over the grid, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.iter().map(Vec::as_slice)
    }
}
