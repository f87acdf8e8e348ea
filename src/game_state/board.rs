//! Variant-agnostic board handed to the session loop.

use crate::board_errors::MoveRejection;
use crate::game_state::board_types::{Color, GameStatus, MoveOutcome, Square, Variant};
use crate::game_state::checkers_board::CheckersBoard;
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::piece_grid::PieceGrid;
use crate::game_state::pieces::Piece;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Board {
    Chess { variant: Variant, board: ChessBoard },
    Checkers(CheckersBoard),
}

/// Build a board in the starting layout of `variant`.
pub fn new_board(variant: Variant) -> Board {
    Board::new(variant)
}

impl Board {
    pub fn new(variant: Variant) -> Self {
        match variant {
            Variant::StandardChess => Board::Chess {
                variant,
                board: ChessBoard::standard(),
            },
            Variant::CustomChess => Board::Chess {
                variant,
                board: ChessBoard::custom(),
            },
            Variant::Checkers => Board::Checkers(CheckersBoard::new()),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Board::Chess { variant, .. } => *variant,
            Board::Checkers(_) => Variant::Checkers,
        }
    }

    pub fn submit_move(
        &mut self,
        start: Square,
        end: Square,
    ) -> Result<MoveOutcome, MoveRejection> {
        match self {
            Board::Chess { board, .. } => board.submit_move(start, end),
            Board::Checkers(board) => board.submit_move(start, end),
        }
    }

    pub fn grid(&self) -> &PieceGrid {
        match self {
            Board::Chess { board, .. } => board.grid(),
            Board::Checkers(board) => board.grid(),
        }
    }

    pub fn current_turn(&self) -> Color {
        match self {
            Board::Chess { board, .. } => board.current_turn(),
            Board::Checkers(board) => board.current_turn(),
        }
    }

    pub fn status(&self) -> GameStatus {
        match self {
            Board::Chess { board, .. } => board.status(),
            Board::Checkers(board) => board.status(),
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid().view(square)
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.grid().count(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_matches_variant() {
        for variant in Variant::ALL {
            let board = new_board(variant);
            assert_eq!(board.variant(), variant);
            assert_eq!(board.current_turn(), Color::White);
            assert_eq!(board.status(), GameStatus::InProgress);
        }
        assert_eq!(new_board(Variant::Checkers).piece_count(Color::Black), 12);
        assert_eq!(new_board(Variant::CustomChess).piece_count(Color::Black), 16);
    }

    #[test]
    fn submit_move_dispatches_to_the_variant() {
        let mut chess = new_board(Variant::StandardChess);
        // A knight hop is legal in chess and meaningless in checkers.
        let b1 = Square::at(7, 1);
        let c3 = Square::at(5, 2);
        assert!(chess.submit_move(b1, c3).is_ok());

        let mut checkers = new_board(Variant::Checkers);
        assert_eq!(
            checkers.submit_move(Square::at(7, 1), Square::at(6, 2)),
            Err(MoveRejection::EmptySource)
        );
        assert_eq!(
            checkers.submit_move(Square::at(6, 1), Square::at(4, 2)),
            Err(MoveRejection::IllegalGeometry)
        );
    }
}
