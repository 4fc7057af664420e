//! The board: an ordered map from occupied cells to pieces
//!
//! Absent entries are empty cells. The map serializes as a JSON object
//! keyed by `"row-col"` strings, the wire shape clients render from.
//! The board alone carries the outcome of a game: a side has lost when
//! its general is no longer on it.

use crate::constants::OPENING;
use crate::types::{Piece, Pos, Role, Side};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Board(BTreeMap<Pos, Piece>);

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    /// The canonical game-start position
    pub fn opening() -> Board {
        Board(
            OPENING
                .iter()
                .map(|&(row, col, piece)| (Pos::new(row, col), piece))
                .collect(),
        )
    }

    pub fn get(&self, pos: Pos) -> Option<Piece> {
        self.0.get(&pos).copied()
    }

    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.0.contains_key(&pos)
    }

    pub fn set(&mut self, pos: Pos, piece: Piece) {
        self.0.insert(pos, piece);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.0.iter().map(|(&pos, &piece)| (pos, piece))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The board after moving the piece at `from` onto `to`, capturing
    /// whatever stood there. The receiver is untouched.
    pub fn moved(&self, from: Pos, to: Pos) -> Board {
        let mut next = self.clone();
        if let Some(piece) = next.0.remove(&from) {
            next.0.insert(to, piece);
        }
        next
    }

    pub fn has_general(&self, side: Side) -> bool {
        self.0
            .values()
            .any(|piece| piece.role() == Role::General && piece.side() == side)
    }

    /// The side whose opponent's general has been captured, if any
    pub fn winner(&self) -> Option<Side> {
        if !self.has_general(Side::Red) {
            Some(Side::Black)
        } else if !self.has_general(Side::Black) {
            Some(Side::Red)
        } else {
            None
        }
    }
}

impl FromIterator<(Pos, Piece)> for Board {
    fn from_iter<I: IntoIterator<Item = (Pos, Piece)>>(iter: I) -> Board {
        Board(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_has_thirty_two_pieces_and_both_generals() {
        let board = Board::opening();
        assert_eq!(board.len(), 32);
        assert!(board.has_general(Side::Red));
        assert!(board.has_general(Side::Black));
        assert_eq!(board.winner(), None);
        assert_eq!(board.get(Pos::new(0, 4)), Some(Piece::RedGeneral));
        assert_eq!(board.get(Pos::new(9, 4)), Some(Piece::BlackGeneral));
    }

    #[test]
    fn moved_captures_and_leaves_source_empty() {
        let board = Board::opening();
        let after = board.moved(Pos::new(0, 0), Pos::new(3, 0));
        assert_eq!(after.get(Pos::new(3, 0)), Some(Piece::RedChariot));
        assert!(!after.is_occupied(Pos::new(0, 0)));
        assert_eq!(after.len(), 31);
        // the source board is untouched
        assert_eq!(board.len(), 32);
    }

    #[test]
    fn winner_appears_when_a_general_falls() {
        let board: Board = OPENING
            .iter()
            .filter(|&&(_, _, piece)| piece != Piece::BlackGeneral)
            .map(|&(row, col, piece)| (Pos::new(row, col), piece))
            .collect();
        assert_eq!(board.winner(), Some(Side::Red));
    }

    #[test]
    fn serializes_as_string_keyed_map() {
        let board: Board = [(Pos::new(3, 0), Piece::RedSoldier)].into_iter().collect();
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json, serde_json::json!({ "3-0": "卒" }));
        let back: Board = serde_json::from_value(json).unwrap();
        assert_eq!(back, board);
    }
}
