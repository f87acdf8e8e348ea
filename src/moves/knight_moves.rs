#[inline]
pub const fn knight_move_is_legal(dr: i8, dc: i8) -> bool {
    matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2))
}
