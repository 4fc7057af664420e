//! Move legality for the seven piece roles
//!
//! `is_legal` answers whether a proposed displacement of the piece believed
//! to occupy `from` is legal on the given board snapshot. It never mutates
//! and never panics for in-range coordinates; malformed coordinates are the
//! caller's job to exclude at the parsing boundary.
//!
//! All blocking and screening checks read the pre-move board. The occupant
//! of `to` is only consulted for the same-side rejection and, for the
//! cannon, to pick the empty-move versus capture branch.

mod advisor;
mod cannon;
mod chariot;
mod elephant;
mod general;
mod horse;
mod soldier;

use crate::board::Board;
use crate::types::{Piece, Pos, Role};

/// Is moving `piece` from `from` to `to` legal on `board`?
pub fn is_legal(from: Pos, to: Pos, piece: Piece, board: &Board) -> bool {
    if let Some(dest) = board.get(to) {
        if dest.side() == piece.side() {
            return false;
        }
    }

    match piece.role() {
        Role::Soldier => soldier::is_legal(from, to, piece.side()),
        Role::Chariot => chariot::is_legal(from, to, board),
        Role::Horse => horse::is_legal(from, to, board),
        Role::Cannon => cannon::is_legal(from, to, board),
        Role::General => general::is_legal(from, to, piece.side()),
        Role::Advisor => advisor::is_legal(from, to, piece.side()),
        Role::Elephant => elephant::is_legal(from, to, piece.side(), board),
    }
}

/// Count the occupied cells strictly between `from` and `to` along a shared
/// row or column. `None` when the two cells are not on one line.
pub(crate) fn screens_between(board: &Board, from: Pos, to: Pos) -> Option<u32> {
    if from.row != to.row && from.col != to.col {
        return None;
    }

    let mut count = 0;
    if from.row == to.row {
        let (lo, hi) = (from.col.min(to.col), from.col.max(to.col));
        for col in lo + 1..hi {
            if board.is_occupied(Pos::new(from.row, col)) {
                count += 1;
            }
        }
    } else {
        let (lo, hi) = (from.row.min(to.row), from.row.max(to.row));
        for row in lo + 1..hi {
            if board.is_occupied(Pos::new(row, from.col)) {
                count += 1;
            }
        }
    }
    Some(count)
}

pub(crate) fn row_delta(from: Pos, to: Pos) -> i16 {
    to.row as i16 - from.row as i16
}

pub(crate) fn col_delta(from: Pos, to: Pos) -> i16 {
    to.col as i16 - from.col as i16
}
