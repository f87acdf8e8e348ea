use crate::moves::bishop_moves::bishop_move_is_legal;
use crate::moves::rook_moves::rook_move_is_legal;

#[inline]
pub const fn queen_move_is_legal(dr: i8, dc: i8) -> bool {
    rook_move_is_legal(dr, dc) || bishop_move_is_legal(dr, dc)
}
