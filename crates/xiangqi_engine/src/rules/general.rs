//! General movement
//!
//! Exactly one orthogonal step, confined to the owning side's palace:
//! columns 3..=5 and the three rows against that side's back rank.

use crate::constants::{palace_rows, PALACE_COL_MAX, PALACE_COL_MIN};
use crate::rules::{col_delta, row_delta};
use crate::types::{Pos, Side};

pub fn is_legal(from: Pos, to: Pos, side: Side) -> bool {
    let (row_min, row_max) = palace_rows(side);
    let in_palace = (PALACE_COL_MIN..=PALACE_COL_MAX).contains(&to.col)
        && (row_min..=row_max).contains(&to.row);
    in_palace && row_delta(from, to).abs() + col_delta(from, to).abs() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_orthogonal_steps_inside_the_palace() {
        assert!(is_legal(Pos::new(0, 4), Pos::new(1, 4), Side::Red));
        assert!(is_legal(Pos::new(0, 4), Pos::new(0, 3), Side::Red));
        assert!(is_legal(Pos::new(9, 4), Pos::new(8, 4), Side::Black));
    }

    #[test]
    fn may_not_leave_the_palace() {
        assert!(!is_legal(Pos::new(0, 3), Pos::new(0, 2), Side::Red));
        assert!(!is_legal(Pos::new(2, 4), Pos::new(3, 4), Side::Red));
        assert!(!is_legal(Pos::new(7, 4), Pos::new(6, 4), Side::Black));
    }

    #[test]
    fn no_diagonal_or_double_steps() {
        assert!(!is_legal(Pos::new(0, 4), Pos::new(1, 5), Side::Red));
        assert!(!is_legal(Pos::new(0, 4), Pos::new(2, 4), Side::Red));
    }
}
