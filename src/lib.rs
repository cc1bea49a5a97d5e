//! # gem-hunters
//!
//! A two-player, turn-based gem collection game on a fixed 6x6 grid.
//!
//! Players take turns moving their token one cell up, down, left or
//! right, collecting the gems scattered over the board while steering
//! around fixed obstacles. After 30 accepted moves the game ends and
//! the player holding more gems wins; equal counts are a tie.
//!
//! ## Design Principles
//!
//! 1. **Single owner per resource**: `Game` is the sole mutator of the
//!    board and both players; no shared mutable state, no concurrency.
//!
//! 2. **I/O behind a seam**: the core never touches stdin/stdout. The
//!    `Console` trait carries rendering and input; tests drive whole
//!    games with scripted consoles.
//!
//! 3. **Deterministic seeding**: every random coordinate comes from one
//!    `BoardRng` created from a single `u64` seed. Same seed, same board.
//!
//! ## Modules
//!
//! - `core`: positions, directions, cells, players, RNG, configuration
//! - `board`: grid ownership, randomized seeding, move validation, gem
//!   collection
//! - `game`: turn state machine and win determination
//! - `console`: terminal rendering and input collaborators
//! - `session`: interactive loop wiring a `Game` to a `Console`

pub mod board;
pub mod console;
pub mod core;
pub mod game;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardRng, Cell, Direction, GameConfig, ParseDirectionError, Player, PlayerId, PlayerPair,
    Position,
};

pub use crate::board::{Board, MoveError};

pub use crate::game::{Game, GameResult, TurnError, TurnReport};

pub use crate::console::{render, Console, Terminal};

pub use crate::session::Session;
