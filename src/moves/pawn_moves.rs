use crate::game_state::board_types::Color;

/// One step toward the opponent, straight or diagonal.
///
/// The straight step and the diagonal capture share a predicate; occupancy
/// of the target is not consulted, so a pawn may also step diagonally onto
/// an empty square or straight onto an occupied one.
#[inline]
pub const fn pawn_move_is_legal(color: Color, dr: i8, dc: i8) -> bool {
    dr == color.forward_dir() && dc.abs() <= 1
}
