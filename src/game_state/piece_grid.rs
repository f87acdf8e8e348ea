//! Fixed 8x8 cell buffer shared by both board variants.

use crate::board_errors::MoveRejection;
use crate::game_state::board_types::{Color, Square, BOARD_SIZE};
use crate::game_state::pieces::Piece;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceGrid {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl PieceGrid {
    #[inline]
    pub fn view(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    fn at(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.cells[square.row() as usize][square.col() as usize]
    }

    /// Put `piece` on `square`, returning whatever stood there before.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.at(square).replace(piece)
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.at(square).take()
    }

    /// Move whatever is on `start` to `end`, returning the previous occupant of `end`.
    pub fn relocate(&mut self, start: Square, end: Square) -> Option<Piece> {
        match self.take(start) {
            Some(piece) => self.place(end, piece),
            None => None,
        }
    }

    /// The piece on `start`, provided it belongs to the side on move.
    pub fn mover(&self, start: Square, turn: Color) -> Result<Piece, MoveRejection> {
        let piece = self.view(start).ok_or(MoveRejection::EmptySource)?;
        if piece.color != turn {
            return Err(MoveRejection::WrongTurn { active: turn });
        }
        Ok(piece)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>; BOARD_SIZE]> {
        self.cells.iter()
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .filter(|piece| piece.color == color)
            .count()
    }
}
