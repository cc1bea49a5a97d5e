//! Player identity and per-player state.
//!
//! ## PlayerId
//!
//! Closed two-player identifier. Turn alternation is `opponent()`.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`. The game owns both
//! players through one of these; nothing else holds player state.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::position::{Direction, Position};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both player IDs, in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Short board label, also used as the default player name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PlayerId::One => "P1",
            PlayerId::Two => "P2",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A player: immutable name, current position, accumulated gems.
///
/// The gem count only ever grows; collection is the board's job and
/// flows through `award_gem`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    position: Position,
    gems: u32,
}

impl Player {
    /// Create a player at a starting position with no gems.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            gems: 0,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's current position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Gems collected so far.
    #[must_use]
    pub const fn gems(&self) -> u32 {
        self.gems
    }

    /// Move one cell in `direction` if that keeps the player on a
    /// `board_size` board; otherwise the position is left unchanged.
    ///
    /// Silently a no-op on an out-of-bounds attempt. Obstacle legality
    /// is the caller's responsibility, checked before this is called.
    pub fn advance(&mut self, direction: Direction, board_size: usize) {
        if let Some(next) = self.position.step(direction, board_size) {
            self.position = next;
        }
    }

    /// Credit one collected gem.
    pub(crate) fn award_gem(&mut self) {
        self.gems += 1;
    }
}

/// Per-player storage with one slot per `PlayerId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    one: T,
    two: T,
}

impl<T> PlayerPair<T> {
    /// Create a pair from both slots.
    #[must_use]
    pub const fn new(one: T, two: T) -> Self {
        Self { one, two }
    }

    /// Get a reference to a player's slot.
    #[must_use]
    pub const fn get(&self, id: PlayerId) -> &T {
        match id {
            PlayerId::One => &self.one,
            PlayerId::Two => &self.two,
        }
    }

    /// Get a mutable reference to a player's slot.
    pub fn get_mut(&mut self, id: PlayerId) -> &mut T {
        match id {
            PlayerId::One => &mut self.one,
            PlayerId::Two => &mut self.two,
        }
    }

    /// Iterate over `(PlayerId, &T)` pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        [(PlayerId::One, &self.one), (PlayerId::Two, &self.two)].into_iter()
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, id: PlayerId) -> &Self::Output {
        self.get(id)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, id: PlayerId) -> &mut Self::Output {
        self.get_mut(id)
    }
}
