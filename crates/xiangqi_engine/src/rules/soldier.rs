//! Soldier movement
//!
//! One step straight forward, away from the owning side's back rank. Once
//! the soldier has crossed the river it may also step one column sideways
//! on the same row. It never moves backward or diagonally.

use crate::constants::crossed_river;
use crate::rules::{col_delta, row_delta};
use crate::types::{Pos, Side};

pub fn is_legal(from: Pos, to: Pos, side: Side) -> bool {
    let forward = row_delta(from, to) == side.forward() && from.col == to.col;
    let sideways = crossed_river(side, from.row)
        && from.row == to.row
        && col_delta(from, to).abs() == 1;
    forward || sideways
}
