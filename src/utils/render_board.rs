//! Plain-text board renderer for terminal play.
//!
//! Row 0 is printed first with rank label 1, matching the notation parser.

use crate::game_state::board::Board;
use crate::game_state::board_types::{Color, GameStatus};

const FILE_HEADER: &str = "  A B C D E F G H";
const RULE: &str = "  ---------------";

/// Render the grid followed by the side to move (or the winner).
pub fn render(board: &Board) -> String {
    let mut out = String::new();

    out.push_str(FILE_HEADER);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');

    for (row, cells) in board.grid().rows().enumerate() {
        out.push(char::from(b'1' + row as u8));
        out.push_str("| ");
        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Some(piece) => out.push(piece.symbol()),
                None => out.push('.'),
            }
            if col < cells.len() - 1 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push('\n');
    match board.status() {
        GameStatus::InProgress => {
            out.push_str("To move: ");
            out.push_str(color_title(board.current_turn()));
        }
        GameStatus::Won(winner) => {
            out.push_str("Winner: ");
            out.push_str(color_title(winner));
        }
    }
    out.push('\n');

    out
}

fn color_title(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}
