//! Elephant movement
//!
//! Exactly two diagonal steps. The midpoint cell (the "eye") must be
//! empty, and the destination must stay on the owning side's bank of the
//! river: elephants never cross.

use crate::board::Board;
use crate::constants::on_own_bank;
use crate::rules::{col_delta, row_delta};
use crate::types::{Pos, Side};

pub fn is_legal(from: Pos, to: Pos, side: Side, board: &Board) -> bool {
    if row_delta(from, to).abs() != 2 || col_delta(from, to).abs() != 2 {
        return false;
    }

    let eye = Pos::new(
        ((from.row as i16 + to.row as i16) / 2) as u8,
        ((from.col as i16 + to.col as i16) / 2) as u8,
    );
    !board.is_occupied(eye) && on_own_bank(side, to.row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    #[test]
    fn two_step_diagonals_on_its_own_bank() {
        let board = Board::new();
        assert!(is_legal(Pos::new(0, 2), Pos::new(2, 4), Side::Red, &board));
        assert!(is_legal(Pos::new(0, 2), Pos::new(2, 0), Side::Red, &board));
        assert!(is_legal(Pos::new(9, 2), Pos::new(7, 4), Side::Black, &board));
    }

    #[test]
    fn blocked_by_an_occupied_eye() {
        let board: Board = [(Pos::new(1, 3), Piece::RedSoldier)].into_iter().collect();
        assert!(!is_legal(Pos::new(0, 2), Pos::new(2, 4), Side::Red, &board));
        assert!(is_legal(Pos::new(0, 2), Pos::new(2, 0), Side::Red, &board));
    }

    #[test]
    fn never_crosses_the_river() {
        let board = Board::new();
        assert!(!is_legal(Pos::new(4, 2), Pos::new(6, 4), Side::Red, &board));
        assert!(!is_legal(Pos::new(5, 2), Pos::new(3, 4), Side::Black, &board));
        // up to the bank is fine
        assert!(is_legal(Pos::new(2, 0), Pos::new(4, 2), Side::Red, &board));
    }

    #[test]
    fn single_diagonals_are_rejected() {
        let board = Board::new();
        assert!(!is_legal(Pos::new(0, 2), Pos::new(1, 3), Side::Red, &board));
        assert!(!is_legal(Pos::new(0, 2), Pos::new(2, 3), Side::Red, &board));
    }
}
