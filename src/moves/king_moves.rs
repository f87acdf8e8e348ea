/// One step in any of the eight directions.
#[inline]
pub const fn king_move_is_legal(dr: i8, dc: i8) -> bool {
    let (r, c) = (dr.abs(), dc.abs());
    (if r > c { r } else { c }) == 1
}
