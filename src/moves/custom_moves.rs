//! Movement rules for the pieces that only appear in the custom chess layout.

/// Exactly two squares along a diagonal.
#[inline]
pub const fn scandic_move_is_legal(dr: i8, dc: i8) -> bool {
    dr.abs() == 2 && dc.abs() == 2
}

/// Exactly one square along a row or column.
#[inline]
pub const fn dag_move_is_legal(dr: i8, dc: i8) -> bool {
    (dr == 0 && dc.abs() == 1) || (dc == 0 && dr.abs() == 1)
}

/// Same jump as the Scandic.
///
/// The piece was described as "a knight stretched by one square", but the
/// playable rule has always been the two-square diagonal. Kept as-is so
/// existing games keep the same moves.
#[inline]
pub const fn technique_move_is_legal(dr: i8, dc: i8) -> bool {
    scandic_move_is_legal(dr, dc)
}
