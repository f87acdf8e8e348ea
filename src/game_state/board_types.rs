//! Shared value types for both board variants.
//!
//! Colors, squares, variant selection and the outcome/status types returned
//! by the move-submission interface live here so the chess and checkers
//! boards expose the same surface to the session loop.

use std::fmt;
use std::str::FromStr;

use crate::board_errors::{ConfigError, MoveRejection};
use crate::game_state::pieces::Piece;

/// Width and height of every supported board.
pub const BOARD_SIZE: usize = 8;

/// Side to move. White always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step. White advances toward row 0.
    #[inline]
    pub const fn forward_dir(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cell address on the 8x8 grid, `row` and `col` both in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square, rejecting coordinates off the board.
    pub fn new(row: u8, col: u8) -> Result<Self, MoveRejection> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(MoveRejection::SquareOutOfBounds { row, col })
        }
    }

    /// Const constructor for layouts and tests; the caller guarantees bounds.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Signed `(dr, dc)` from `self` to `end`.
    #[inline]
    pub const fn delta_to(self, end: Square) -> (i8, i8) {
        (
            end.row as i8 - self.row as i8,
            end.col as i8 - self.col as i8,
        )
    }

    /// The cell halfway between two squares an even distance apart.
    #[inline]
    pub const fn midpoint(self, end: Square) -> Square {
        Square {
            row: (self.row + end.row) / 2,
            col: (self.col + end.col) / 2,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the configured game setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    StandardChess,
    CustomChess,
    Checkers,
}

impl Variant {
    pub const ALL: [Variant; 3] = [
        Variant::StandardChess,
        Variant::CustomChess,
        Variant::Checkers,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            Variant::StandardChess => "standard chess",
            Variant::CustomChess => "chess with custom pieces",
            Variant::Checkers => "checkers",
        }
    }

    /// Number shown for this variant in the session menu.
    pub const fn menu_index(self) -> u8 {
        match self {
            Variant::StandardChess => 1,
            Variant::CustomChess => 2,
            Variant::Checkers => 3,
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "standard" | "chess" => Ok(Variant::StandardChess),
            "2" | "custom" | "special" => Ok(Variant::CustomChess),
            "3" | "checkers" | "draughts" => Ok(Variant::Checkers),
            other => Err(ConfigError::UnknownVariant(other.to_owned())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Whether more moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Color),
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and play continues.
    ///
    /// `captured` is the opposing piece taken, `displaced` whatever occupied
    /// the destination and was overwritten: a same-color piece under a chess
    /// move, or any piece under a checkers jump.
    Applied {
        captured: Option<Piece>,
        displaced: Option<Piece>,
    },
    /// The move ended the game.
    GameOver { winner: Color, captured: Piece },
}

impl MoveOutcome {
    pub const fn captured(&self) -> Option<Piece> {
        match self {
            MoveOutcome::Applied { captured, .. } => *captured,
            MoveOutcome::GameOver { captured, .. } => Some(*captured),
        }
    }

    pub const fn is_game_over(&self) -> bool {
        matches!(self, MoveOutcome::GameOver { .. })
    }
}
