/// Any distance along a row or column. Intervening pieces are ignored.
#[inline]
pub const fn rook_move_is_legal(dr: i8, dc: i8) -> bool {
    (dr == 0) != (dc == 0)
}
