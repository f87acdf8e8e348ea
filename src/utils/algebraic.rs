//! Conversions between square tokens (for example `A7`) and grid coordinates.
//!
//! The file letter picks the column and the rank digit picks the row, with
//! rank 1 being row 0, the top row of the printed board. Letters are
//! accepted in either case.

use crate::board_errors::NotationError;
use crate::game_state::board_types::Square;

/// Convert a token such as `a7` or `H2` to a square.
pub fn notation_to_square(token: &str) -> Result<Square, NotationError> {
    let bytes = token.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(token.to_owned()));
    }

    let file = bytes[0].to_ascii_uppercase();
    let rank = bytes[1];

    if !(b'A'..=b'H').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidSquare(token.to_owned()));
    }

    Square::new(rank - b'1', file - b'A')
        .map_err(|_| NotationError::InvalidSquare(token.to_owned()))
}

/// Convert a square back to its token, upper-case file first.
pub fn square_to_notation(square: Square) -> String {
    let file_char = char::from(b'A' + square.col());
    let rank_char = char::from(b'1' + square.row());
    format!("{file_char}{rank_char}")
}

/// Split a move line into its start and end squares.
pub fn parse_move(line: &str) -> Result<(Square, Square), NotationError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [start, end] => Ok((notation_to_square(start)?, notation_to_square(end)?)),
        other => Err(NotationError::WrongTokenCount(other.len())),
    }
}
