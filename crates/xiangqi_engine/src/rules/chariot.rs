//! Chariot movement
//!
//! Any distance along its row or column, with no occupied cell strictly
//! between origin and destination.

use crate::board::Board;
use crate::rules::screens_between;
use crate::types::Pos;

pub fn is_legal(from: Pos, to: Pos, board: &Board) -> bool {
    screens_between(board, from, to) == Some(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    fn lone_chariot() -> Board {
        [(Pos::new(0, 0), Piece::RedChariot)].into_iter().collect()
    }

    #[test]
    fn slides_the_full_rank_when_clear() {
        let board = lone_chariot();
        assert!(is_legal(Pos::new(0, 0), Pos::new(0, 8), &board));
        assert!(is_legal(Pos::new(0, 0), Pos::new(9, 0), &board));
    }

    #[test]
    fn any_interior_piece_blocks() {
        let mut board = lone_chariot();
        board.set(Pos::new(0, 4), Piece::BlackHorse);
        assert!(!is_legal(Pos::new(0, 0), Pos::new(0, 8), &board));
        // but the blocker itself can be captured
        assert!(is_legal(Pos::new(0, 0), Pos::new(0, 4), &board));
    }

    #[test]
    fn diagonals_are_rejected() {
        let board = lone_chariot();
        assert!(!is_legal(Pos::new(0, 0), Pos::new(1, 1), &board));
    }
}
