//! Board coordinates and movement directions.
//!
//! ## Position
//!
//! An immutable `(x, y)` coordinate. Moving never mutates a position in
//! place: `step` produces a fresh value, or `None` when the shift would
//! leave the board. Construction performs no bounds check; callers
//! (board and player move logic) enforce bounds before a new position
//! is adopted.
//!
//! ## Direction
//!
//! The closed set of single-cell displacement requests. Parses from the
//! single characters `U`, `D`, `L`, `R`, case-insensitive; the two
//! rejection cases (wrong length vs. unknown letter) are distinguished
//! because the interactive session complains differently about them.

use serde::{Deserialize, Serialize};

/// A 2D board coordinate.
///
/// `y` grows downward: row 0 is the top row, matching the rendered
/// board. `(0, 0)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Create a position. No bounds validation happens here.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The position one cell over in `direction`, or `None` if that
    /// cell lies outside a `board_size` x `board_size` board.
    #[must_use]
    pub fn step(self, direction: Direction, board_size: usize) -> Option<Self> {
        match direction {
            Direction::Up => self.y.checked_sub(1).map(|y| Self::new(self.x, y)),
            Direction::Down => (self.y + 1 < board_size).then(|| Self::new(self.x, self.y + 1)),
            Direction::Left => self.x.checked_sub(1).map(|x| Self::new(x, self.y)),
            Direction::Right => (self.x + 1 < board_size).then(|| Self::new(self.x + 1, self.y)),
        }
    }

    /// Whether both axes fall inside a `board_size` board.
    #[must_use]
    pub const fn in_bounds(self, board_size: usize) -> bool {
        self.x < board_size && self.y < board_size
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single-cell displacement request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The input letter for this direction.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Why an input line failed to parse as a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseDirectionError {
    /// Input was not exactly one character.
    NotSingleChar,
    /// A single character, but not one of `U`, `D`, `L`, `R`.
    UnknownDirection,
}

impl std::fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseDirectionError::NotSingleChar => {
                write!(f, "Invalid input. Please enter a single character (U, D, L, or R).")
            }
            ParseDirectionError::UnknownDirection => {
                write!(f, "Invalid input. Please enter U, D, L, or R.")
            }
        }
    }
}

impl std::error::Error for ParseDirectionError {}

impl std::str::FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(ParseDirectionError::NotSingleChar);
        };

        match c.to_ascii_uppercase() {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            _ => Err(ParseDirectionError::UnknownDirection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_interior() {
        let pos = Position::new(2, 2);
        assert_eq!(pos.step(Direction::Up, 6), Some(Position::new(2, 1)));
        assert_eq!(pos.step(Direction::Down, 6), Some(Position::new(2, 3)));
        assert_eq!(pos.step(Direction::Left, 6), Some(Position::new(1, 2)));
        assert_eq!(pos.step(Direction::Right, 6), Some(Position::new(3, 2)));
    }

    #[test]
    fn test_step_blocked_at_corners() {
        let top_left = Position::new(0, 0);
        assert_eq!(top_left.step(Direction::Up, 6), None);
        assert_eq!(top_left.step(Direction::Left, 6), None);

        let bottom_right = Position::new(5, 5);
        assert_eq!(bottom_right.step(Direction::Down, 6), None);
        assert_eq!(bottom_right.step(Direction::Right, 6), None);
    }

    #[test]
    fn test_step_never_leaves_board() {
        for y in 0..6 {
            for x in 0..6 {
                for direction in Direction::ALL {
                    if let Some(next) = Position::new(x, y).step(direction, 6) {
                        assert!(next.in_bounds(6), "{next} escaped the board");
                    }
                }
            }
        }
    }

    #[test]
    fn test_parse_accepts_both_cases() {
        assert_eq!("U".parse(), Ok(Direction::Up));
        assert_eq!("d".parse(), Ok(Direction::Down));
        assert_eq!("l".parse(), Ok(Direction::Left));
        assert_eq!("R".parse(), Ok(Direction::Right));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "".parse::<Direction>(),
            Err(ParseDirectionError::NotSingleChar)
        );
        assert_eq!(
            "UD".parse::<Direction>(),
            Err(ParseDirectionError::NotSingleChar)
        );
        assert_eq!(
            " U".parse::<Direction>(),
            Err(ParseDirectionError::NotSingleChar)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_letter() {
        assert_eq!(
            "X".parse::<Direction>(),
            Err(ParseDirectionError::UnknownDirection)
        );
        assert_eq!(
            "7".parse::<Direction>(),
            Err(ParseDirectionError::UnknownDirection)
        );
    }

    #[test]
    fn test_letter_round_trip() {
        for direction in Direction::ALL {
            let parsed: Direction = direction.letter().to_string().parse().unwrap();
            assert_eq!(parsed, direction);
        }
    }

    #[test]
    fn test_position_serde() {
        let pos = Position::new(3, 4);
        let json = serde_json::to_string(&pos).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, back);
    }
}
