//! Advisor movement
//!
//! Exactly one diagonal step, never leaving the owning side's palace.

use crate::constants::{palace_rows, PALACE_COL_MAX, PALACE_COL_MIN};
use crate::rules::{col_delta, row_delta};
use crate::types::{Pos, Side};

pub fn is_legal(from: Pos, to: Pos, side: Side) -> bool {
    let (row_min, row_max) = palace_rows(side);
    (PALACE_COL_MIN..=PALACE_COL_MAX).contains(&to.col)
        && (row_min..=row_max).contains(&to.row)
        && row_delta(from, to).abs() == 1
        && col_delta(from, to).abs() == 1
}
