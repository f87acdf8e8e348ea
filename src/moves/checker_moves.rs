use crate::game_state::board_types::Color;

/// A plain checker move: one diagonal step, forward only.
#[inline]
pub const fn checker_step_is_legal(color: Color, dr: i8, dc: i8) -> bool {
    dr == color.forward_dir() && dc.abs() == 1
}

/// Shape of a capture jump: two diagonal squares in any direction.
///
/// Unlike the plain step, jumps may go backwards. Whether the jumped cell
/// holds an opponent is a board question, see `CheckersBoard::can_capture`.
#[inline]
pub const fn checker_jump_shape(dr: i8, dc: i8) -> bool {
    dr.abs() == 2 && dc.abs() == 2
}
