//! Core game types: positions, directions, cells, players, RNG, configuration.
//!
//! These are the leaf building blocks. They know nothing about the turn
//! loop; the `board` and `game` modules compose them.

pub mod cell;
pub mod config;
pub mod player;
pub mod position;
pub mod rng;

pub use cell::Cell;
pub use config::GameConfig;
pub use player::{Player, PlayerId, PlayerPair};
pub use position::{Direction, ParseDirectionError, Position};
pub use rng::BoardRng;
