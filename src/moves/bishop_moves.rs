/// Any distance along a diagonal. Intervening pieces are ignored.
#[inline]
pub const fn bishop_move_is_legal(dr: i8, dc: i8) -> bool {
    dr != 0 && dr.abs() == dc.abs()
}
