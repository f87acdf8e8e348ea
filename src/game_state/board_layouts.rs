//! Starting layouts for each variant.
//!
//! Row 0 is the top row of the printed board (rank label 1) and holds black's
//! back rank; white starts on rows 6 and 7 and advances toward row 0.

use crate::game_state::board_types::{Color, Square, Variant, BOARD_SIZE};
use crate::game_state::piece_grid::PieceGrid;
use crate::game_state::pieces::{Piece, PieceKind};

pub const STANDARD_BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const CUSTOM_BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Scandic,
    PieceKind::Technique,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Technique,
    PieceKind::Dag,
];

const BLACK_BACK_ROW: u8 = 0;
const BLACK_PAWN_ROW: u8 = 1;
const WHITE_PAWN_ROW: u8 = 6;
const WHITE_BACK_ROW: u8 = 7;

/// Checkers occupy the first three rows on each side.
const CHECKER_ROWS: usize = 3;

pub fn starting_grid(variant: Variant) -> PieceGrid {
    match variant {
        Variant::StandardChess => chess_grid(&STANDARD_BACK_RANK),
        Variant::CustomChess => chess_grid(&CUSTOM_BACK_RANK),
        Variant::Checkers => checkers_grid(),
    }
}

fn chess_grid(back_rank: &[PieceKind; BOARD_SIZE]) -> PieceGrid {
    let mut grid = PieceGrid::default();
    for (col, &kind) in back_rank.iter().enumerate() {
        let col = col as u8;
        grid.place(
            Square::at(WHITE_PAWN_ROW, col),
            Piece::new(PieceKind::Pawn, Color::White),
        );
        grid.place(
            Square::at(BLACK_PAWN_ROW, col),
            Piece::new(PieceKind::Pawn, Color::Black),
        );
        grid.place(Square::at(WHITE_BACK_ROW, col), Piece::new(kind, Color::White));
        grid.place(Square::at(BLACK_BACK_ROW, col), Piece::new(kind, Color::Black));
    }
    grid
}

/// Dark cells are those where `row + col` is odd.
fn checkers_grid() -> PieceGrid {
    let mut grid = PieceGrid::default();
    for row in 0..BOARD_SIZE {
        let color = if row < CHECKER_ROWS {
            Color::Black
        } else if row >= BOARD_SIZE - CHECKER_ROWS {
            Color::White
        } else {
            continue;
        };
        for col in 0..BOARD_SIZE {
            if (row + col) % 2 == 1 {
                grid.place(
                    Square::at(row as u8, col as u8),
                    Piece::new(PieceKind::Checker, color),
                );
            }
        }
    }
    grid
}
