//! The turn state machine: move validation, application, turn
//! alternation, termination and win determination.
//!
//! `Game` owns the board and both players and is their sole mutator.
//! One call to `play` is one solicited move: a rejected move changes
//! nothing and leaves the same player to move; an accepted move
//! advances the player, collects any gem on arrival, updates board
//! occupancy, counts the turn and passes play to the opponent. The
//! turn count reaching the configured limit is the sole termination
//! signal.

use std::cmp::Ordering;

use log::{debug, info};

use crate::board::{Board, MoveError};
use crate::core::{BoardRng, Cell, Direction, GameConfig, Player, PlayerId, PlayerPair, Position};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// One player collected strictly more gems.
    Winner(PlayerId),
    /// Equal gem counts.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Who moved.
    pub player: PlayerId,
    /// Position before the move.
    pub from: Position,
    /// Position after the move.
    pub to: Position,
    /// Whether a gem was collected on arrival.
    pub collected: bool,
}

/// Why `Game::play` rejected a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnError {
    /// The move was illegal; no turn was consumed and the same player
    /// stays to move.
    Move(MoveError),
    /// The turn limit has been reached; the game accepts no further
    /// moves.
    Finished,
}

impl std::fmt::Display for TurnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnError::Move(e) => write!(f, "invalid move: {e}"),
            TurnError::Finished => write!(f, "the game is over"),
        }
    }
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Move(e) => Some(e),
            TurnError::Finished => None,
        }
    }
}

impl From<MoveError> for TurnError {
    fn from(e: MoveError) -> Self {
        TurnError::Move(e)
    }
}

/// One game of gem hunters.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    players: PlayerPair<Player>,
    current: PlayerId,
    total_turns: u32,
}

impl Game {
    /// New game with a board seeded from `seed` and both players at
    /// opposite corners. Player one moves first.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = BoardRng::new(seed);
        let board = Board::new(&config, &mut rng);
        info!("new game (seed {seed})");
        Self::with_board(config, board)
    }

    /// Game over a prepared board. Used by tests and custom setups;
    /// the board must match `config.board_size`.
    #[must_use]
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        debug_assert_eq!(board.size(), config.board_size);

        let players = PlayerPair::new(
            Player::new(PlayerId::One.label(), config.player_one_start()),
            Player::new(PlayerId::Two.label(), config.player_two_start()),
        );

        Self {
            config,
            board,
            players,
            current: PlayerId::One,
            total_turns: 0,
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players.
    #[must_use]
    pub fn players(&self) -> &PlayerPair<Player> {
        &self.players
    }

    /// One player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Whose turn it is.
    #[must_use]
    pub const fn current(&self) -> PlayerId {
        self.current
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Accepted moves so far.
    #[must_use]
    pub const fn total_turns(&self) -> u32 {
        self.total_turns
    }

    /// The configuration this game runs under.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Apply one move for the current player.
    ///
    /// On success the player advances one cell, any gem at the arrival
    /// cell is collected, occupancy is re-marked (vacated cell cleared,
    /// arrival cell tagged), the turn counts, and play passes to the
    /// opponent.
    ///
    /// # Errors
    ///
    /// `TurnError::Finished` once the turn limit is reached;
    /// `TurnError::Move` for an out-of-bounds or blocked move. Neither
    /// changes any state.
    pub fn play(&mut self, direction: Direction) -> Result<TurnReport, TurnError> {
        if self.is_over() {
            return Err(TurnError::Finished);
        }

        let id = self.current;
        let target = self.board.validate_move(&self.players[id], direction)?;

        let from = self.players[id].position();
        self.players[id].advance(direction, self.config.board_size);
        debug_assert_eq!(self.players[id].position(), target);

        // Collect before occupancy marking: the arrival cell still
        // holds its seeded content at this point.
        let collected = self.board.collect_gem(&mut self.players[id]);
        self.board.set_cell(from, Cell::Empty);
        self.board.set_cell(target, Cell::Occupied(id));

        self.total_turns += 1;
        self.current = id.opponent();

        debug!(
            "turn {}: {} moved {direction} to {target}",
            self.total_turns,
            self.players[id].name()
        );

        Ok(TurnReport {
            player: id,
            from,
            to: target,
            collected,
        })
    }

    /// Whether the turn limit has been reached.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.total_turns >= self.config.turn_limit
    }

    /// Final result once the game is over, `None` while it runs.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }

        let one = self.players[PlayerId::One].gems();
        let two = self.players[PlayerId::Two].gems();
        Some(match one.cmp(&two) {
            Ordering::Greater => GameResult::Winner(PlayerId::One),
            Ordering::Less => GameResult::Winner(PlayerId::Two),
            Ordering::Equal => GameResult::Tie,
        })
    }
}
