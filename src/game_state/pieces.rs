//! Piece catalog and the single dispatch from kind to movement rule.

use std::fmt;

use crate::game_state::board_types::{Color, Square};
use crate::moves::bishop_moves::bishop_move_is_legal;
use crate::moves::checker_moves::checker_step_is_legal;
use crate::moves::custom_moves::{
    dag_move_is_legal, scandic_move_is_legal, technique_move_is_legal,
};
use crate::moves::king_moves::king_move_is_legal;
use crate::moves::knight_moves::knight_move_is_legal;
use crate::moves::pawn_moves::pawn_move_is_legal;
use crate::moves::queen_moves::queen_move_is_legal;
use crate::moves::rook_moves::rook_move_is_legal;

/// Every kind of token either board can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Scandic,
    Dag,
    Technique,
    Checker,
}

impl PieceKind {
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
            PieceKind::Scandic => "scandic",
            PieceKind::Dag => "dag",
            PieceKind::Technique => "technique",
            PieceKind::Checker => "checker",
        }
    }
}

/// A colored token. Pieces carry no position; the grid cell holding one is
/// its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Display glyph. Chess pieces use their letter for both colors;
    /// checkers are told apart by fill.
    pub const fn symbol(self) -> char {
        match (self.kind, self.color) {
            (PieceKind::Pawn, _) => 'P',
            (PieceKind::Rook, _) => 'R',
            (PieceKind::Knight, _) => 'N',
            (PieceKind::Bishop, _) => 'B',
            (PieceKind::Queen, _) => 'Q',
            (PieceKind::King, _) => 'K',
            (PieceKind::Scandic, _) => 'S',
            (PieceKind::Dag, _) => 'D',
            (PieceKind::Technique, _) => 'T',
            (PieceKind::Checker, Color::White) => '●',
            (PieceKind::Checker, Color::Black) => '○',
        }
    }

    /// Pure geometric legality of `start -> end`.
    ///
    /// Board occupancy, the color of whatever stands on `end`, and pieces in
    /// between are all ignored. Checker captures are decided by the board.
    pub const fn is_legal_move(self, start: Square, end: Square) -> bool {
        let (dr, dc) = start.delta_to(end);
        match self.kind {
            PieceKind::Pawn => pawn_move_is_legal(self.color, dr, dc),
            PieceKind::Rook => rook_move_is_legal(dr, dc),
            PieceKind::Knight => knight_move_is_legal(dr, dc),
            PieceKind::Bishop => bishop_move_is_legal(dr, dc),
            PieceKind::Queen => queen_move_is_legal(dr, dc),
            PieceKind::King => king_move_is_legal(dr, dc),
            PieceKind::Scandic => scandic_move_is_legal(dr, dc),
            PieceKind::Dag => dag_move_is_legal(dr, dc),
            PieceKind::Technique => technique_move_is_legal(dr, dc),
            PieceKind::Checker => checker_step_is_legal(self.color, dr, dc),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [PieceKind; 10] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Scandic,
        PieceKind::Dag,
        PieceKind::Technique,
        PieceKind::Checker,
    ];

    fn all_squares() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::at(row, col)))
    }

    #[test]
    fn no_piece_may_stay_in_place() {
        for kind in ALL_KINDS {
            for color in [Color::White, Color::Black] {
                let piece = Piece::new(kind, color);
                for square in all_squares() {
                    assert!(
                        !piece.is_legal_move(square, square),
                        "{} {} moved in place at {square}",
                        color,
                        kind.name()
                    );
                }
            }
        }
    }

    #[test]
    fn knight_from_center_has_eight_targets() {
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let center = Square::at(4, 3);
        let targets = all_squares()
            .filter(|&end| knight.is_legal_move(center, end))
            .count();
        assert_eq!(targets, 8);
    }

    #[test]
    fn rook_can_cross_the_whole_board() {
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        assert!(rook.is_legal_move(Square::at(0, 0), Square::at(7, 0)));
        assert!(rook.is_legal_move(Square::at(3, 0), Square::at(3, 7)));
        assert!(!rook.is_legal_move(Square::at(0, 0), Square::at(1, 2)));
    }

    #[test]
    fn pawn_direction_depends_on_color() {
        let white = Piece::new(PieceKind::Pawn, Color::White);
        let black = Piece::new(PieceKind::Pawn, Color::Black);
        assert!(white.is_legal_move(Square::at(6, 0), Square::at(5, 0)));
        assert!(!white.is_legal_move(Square::at(6, 0), Square::at(7, 0)));
        assert!(black.is_legal_move(Square::at(1, 7), Square::at(2, 6)));
        assert!(!black.is_legal_move(Square::at(1, 7), Square::at(0, 7)));
    }

    #[test]
    fn checker_symbols_depend_on_color() {
        assert_eq!(Piece::new(PieceKind::Checker, Color::White).symbol(), '●');
        assert_eq!(Piece::new(PieceKind::Checker, Color::Black).symbol(), '○');
        assert_eq!(Piece::new(PieceKind::Technique, Color::Black).to_string(), "T");
    }
}
