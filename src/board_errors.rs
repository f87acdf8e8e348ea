//! Errors used throughout the rules engine.
//!
//! Every variant here describes an expected, recoverable condition: bad user
//! input or a move the rules refuse. Rejections are returned before the board
//! is touched, so callers can report them and keep playing. Game-ending
//! conditions are not errors; they come back as
//! [`MoveOutcome::GameOver`](crate::game_state::board_types::MoveOutcome).

use thiserror::Error;

use crate::game_state::board_types::Color;

/// A textual move could not be turned into board coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// A move line must hold exactly two squares, e.g. `A7 A6`.
    #[error("expected two squares such as `A7 A6`, got {0} token(s)")]
    WrongTokenCount(usize),

    /// A token was not a file letter A-H followed by a rank digit 1-8.
    #[error("invalid square `{0}`, expected a letter A-H followed by a digit 1-8")]
    InvalidSquare(String),
}

/// Why a submitted move was refused. The board is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    /// No piece stands on the origin square.
    #[error("there is no piece on the selected square")]
    EmptySource,

    /// The origin piece belongs to the side not on move.
    #[error("it is {active}'s turn, the selected piece is the other color")]
    WrongTurn { active: Color },

    /// The piece cannot make this move, neither as a plain move nor as a capture.
    #[error("illegal move")]
    IllegalGeometry,

    /// A king was taken or a side was eliminated; no further moves are played.
    #[error("the game is already over")]
    GameAlreadyOver,

    /// Programmatic coordinates outside `0..=7`.
    #[error("square ({row}, {col}) is off the board")]
    SquareOutOfBounds { row: u8, col: u8 },
}

/// Command-line or menu configuration could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown game variant `{0}`, expected standard, custom or checkers")]
    UnknownVariant(String),

    #[error("unknown option `{0}`")]
    UnknownFlag(String),

    #[error("option `{0}` needs a value")]
    MissingValue(String),
}

/// Anything that stops the interactive session loop once it is running.
///
/// Bad moves and bad menu entries are reported to the player and never end
/// the loop; command-line problems surface earlier as [`ConfigError`].
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
